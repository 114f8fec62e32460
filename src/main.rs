mod cli_messages;
mod config;
mod consts;
mod events;
mod logging;
mod model;
mod session;
mod ui;

use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::LOG_FILE_NAME;
use crate::model::Timeframe;
use crate::ui::{PageVariant, UIConfig};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::Path;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Terminal financial dashboard with mock revenue data
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Launch the interactive dashboard
    Start {
        /// Page layout. Overrides the saved configuration.
        #[arg(long, value_enum)]
        variant: Option<PageVariant>,

        /// Paint a dark background behind the dashboard. Overrides the saved configuration.
        #[arg(long, value_name = "BOOL")]
        with_background: Option<bool>,

        /// Seed for the mock revenue generator.
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,
    },
    /// Print the dashboard once as plain text
    Snapshot {
        /// Timeframe to select before printing (1W, 1M, 3M, 1Y, ALL).
        #[arg(long, value_name = "TIMEFRAME")]
        timeframe: Option<Timeframe>,

        /// Page layout. Overrides the saved configuration.
        #[arg(long, value_enum)]
        variant: Option<PageVariant>,

        /// Seed for the mock revenue generator.
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,
    },
    /// Update the saved presentation settings
    Configure {
        /// Page layout to use by default.
        #[arg(long, value_enum)]
        variant: Option<PageVariant>,

        /// Whether to paint a dark background by default.
        #[arg(long, value_name = "BOOL")]
        with_background: Option<bool>,
    },
    /// Delete the saved configuration
    Reset,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config_path = get_config_path()?;

    // The TUI owns the terminal, so its diagnostics go to a file instead
    let logger = match args.command {
        Command::Start { .. } => {
            logging::init_file_logging(&config_path.with_file_name(LOG_FILE_NAME))
        }
        _ => logging::init_stderr_logging(),
    };
    if let Err(e) = logger {
        print_cmd_error!("Failed to initialize logging", &e.to_string());
        let e: Box<dyn Error> = e;
        return Err(e);
    }

    match args.command {
        Command::Start {
            variant,
            with_background,
            seed,
        } => {
            let config = load_config(&config_path)?;
            let ui_config = UIConfig::resolve(&config, variant, with_background, seed);
            session::run_tui_mode(ui_config)
        }
        Command::Snapshot {
            timeframe,
            variant,
            seed,
        } => {
            let config = load_config(&config_path)?;
            let ui_config = UIConfig::resolve(&config, variant, Some(false), seed);
            session::run_snapshot_mode(ui_config, timeframe);
            Ok(())
        }
        Command::Configure {
            variant,
            with_background,
        } => {
            let mut config = load_config(&config_path)?;
            if let Some(variant) = variant {
                config.variant = variant;
            }
            if let Some(with_background) = with_background {
                config.with_background_color = with_background;
            }
            config.save(&config_path).map_err(|e| {
                print_cmd_error!("Failed to save config", &e.to_string());
                e
            })?;
            print_cmd_success!("Configuration saved", "{}", config_path.display());
            print_cmd_info!(
                "Current settings",
                "variant={} with_background={}",
                config.variant,
                config.with_background_color
            );
            Ok(())
        }
        Command::Reset => {
            print_cmd_info!("Resetting configuration", "{}", config_path.display());
            Config::clear(&config_path)?;
            Ok(())
        }
    }
}

/// Loads the saved config, reporting a broken file before bailing out.
fn load_config(path: &Path) -> Result<Config, Box<dyn Error>> {
    Config::load_or_default(path).map_err(|e| {
        print_cmd_error!("Failed to load config", &e.to_string());
        e.into()
    })
}
