use log::LevelFilter;
use std::env;
use std::error::Error;
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::filter::LevelFilter as SubscriberLevel;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

pub fn get_rust_log_level() -> LogLevel {
    let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    parse_rust_log_level(&rust_log)
}

pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    // Handle common RUST_LOG formats
    let level_str = rust_log
        .split(',')
        .next()
        .unwrap_or(rust_log)
        .split('=')
        .next_back()
        .unwrap_or(rust_log)
        .to_lowercase();

    match level_str.as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info, // Default to info if parsing fails
    }
}

impl From<LogLevel> for SubscriberLevel {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => SubscriberLevel::TRACE,
            LogLevel::Debug => SubscriberLevel::DEBUG,
            LogLevel::Info => SubscriberLevel::INFO,
            LogLevel::Warn => SubscriberLevel::WARN,
            LogLevel::Error => SubscriberLevel::ERROR,
        }
    }
}

pub type LoggingError = Box<dyn Error + Send + Sync + 'static>;

/// Send diagnostic records to stderr.
pub fn init_stderr_logging() -> Result<(), LoggingError> {
    install_subscriber(std::io::stderr, true)
}

/// Append diagnostic records to `path`, keeping the terminal free for the TUI.
pub fn init_file_logging(path: &Path) -> Result<(), LoggingError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    install_subscriber(Mutex::new(file), false)
}

/// Install a fmt subscriber that also receives `log` records, and cap both at
/// the level requested through `RUST_LOG`.
fn install_subscriber<W>(writer: W, ansi: bool) -> Result<(), LoggingError>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let level = get_rust_log_level();
    tracing_subscriber::fmt()
        .with_max_level(SubscriberLevel::from(level))
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .try_init()?;
    log::set_max_level(level.into());
    Ok(())
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}
