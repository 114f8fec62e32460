//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from user input

use super::state::DashboardState;

use crate::events::Event;
use crate::model::Timeframe;
use crossterm::event::KeyCode;

/// What the dashboard did with a key press.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key changed dashboard state.
    Consumed,
    /// The key means nothing to the dashboard.
    Ignored,
    /// The user asked to leave the application.
    Quit,
}

impl DashboardState {
    /// Select a timeframe and regenerate the revenue series.
    pub fn select_timeframe(&mut self, timeframe: Timeframe) {
        self.view_model.select_timeframe(timeframe);
        self.add_to_activity_log(Event::timeframe_selected(timeframe));
        self.add_to_activity_log(Event::series_refreshed(
            timeframe,
            self.view_model.generations(),
            self.view_model.series().total_revenue(),
        ));
    }

    /// Open or close the navigation drawer. Returns false when the page has no drawer.
    pub fn toggle_drawer(&mut self) -> bool {
        if !self.variant.has_drawer() {
            return false;
        }
        let open = !self.drawer_open();
        self.set_drawer_open(open);
        self.add_to_activity_log(Event::drawer_toggled(open));
        true
    }

    /// Apply a key press to the dashboard.
    pub fn handle_key(&mut self, code: KeyCode) -> KeyOutcome {
        match code {
            KeyCode::Char('q') => KeyOutcome::Quit,
            KeyCode::Esc => {
                // Esc closes an open drawer before quitting.
                if self.drawer_open() && self.toggle_drawer() {
                    KeyOutcome::Consumed
                } else {
                    KeyOutcome::Quit
                }
            }
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                match Timeframe::from_index(index) {
                    Some(timeframe) => {
                        self.select_timeframe(timeframe);
                        KeyOutcome::Consumed
                    }
                    None => KeyOutcome::Ignored,
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.select_timeframe(self.view_model.timeframe().next());
                KeyOutcome::Consumed
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.select_timeframe(self.view_model.timeframe().previous());
                KeyOutcome::Consumed
            }
            KeyCode::Char('m') | KeyCode::Char('M') => {
                if self.toggle_drawer() {
                    KeyOutcome::Consumed
                } else {
                    KeyOutcome::Ignored
                }
            }
            _ => KeyOutcome::Ignored,
        }
    }
}
