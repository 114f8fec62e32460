//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::config::Config;
use crate::consts::cli_consts::{SPLASH_DURATION_MS, UI_POLL_INTERVAL_MS};
use crate::ui::dashboard::{DashboardState, KeyOutcome, render_dashboard};
use crate::ui::splash::render_splash;
use crate::ui::variant::PageVariant;
use crossterm::event::{self, Event, KeyCode};
use log::debug;
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub variant: PageVariant,
    /// Seed for the mock revenue generator; entropy when absent.
    pub seed: Option<u64>,
}

impl UIConfig {
    pub fn new(with_background_color: bool, variant: PageVariant, seed: Option<u64>) -> Self {
        Self {
            with_background_color,
            variant,
            seed,
        }
    }

    /// Saved settings with any command-line overrides applied on top.
    pub fn resolve(
        config: &Config,
        variant: Option<PageVariant>,
        with_background_color: Option<bool>,
        seed: Option<u64>,
    ) -> Self {
        Self::new(
            with_background_color.unwrap_or(config.with_background_color),
            variant.unwrap_or(config.variant),
            seed,
        )
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// The financial dashboard.
    Dashboard(Box<DashboardState>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Presentation settings handed to the dashboard.
    ui_config: UIConfig,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(ui_config: UIConfig) -> Self {
        Self {
            current_screen: Screen::Splash,
            ui_config,
        }
    }

    /// Leaves the splash screen for the dashboard.
    fn show_dashboard(&mut self) {
        debug!("Opening dashboard ({} variant)", self.ui_config.variant);
        let state = DashboardState::new(&self.ui_config);
        self.current_screen = Screen::Dashboard(Box::new(state));
    }

    /// Routes a key press to the current screen. Returns false when the app should exit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        if let Screen::Dashboard(state) = &mut self.current_screen {
            return state.handle_key(code) != KeyOutcome::Quit;
        }
        if matches!(code, KeyCode::Esc | KeyCode::Char('q')) {
            return false;
        }
        // Any other key skips the splash screen
        self.show_dashboard();
        true
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_millis(SPLASH_DURATION_MS);

    // UI event loop
    loop {
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.show_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(Duration::from_millis(UI_POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                if !app.handle_key(key.code) {
                    return Ok(());
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
