//! Event System
//!
//! Activity events raised by dashboard interactions

use crate::logging::{LogLevel, should_log};
use crate::model::Timeframe;
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    /// A timeframe was selected.
    Selection,
    /// The revenue series was regenerated.
    Refresh,
    /// The navigation drawer was opened or closed.
    Drawer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn timeframe_selected(timeframe: Timeframe) -> Self {
        Self::new(
            format!("Selected timeframe {}", timeframe),
            EventType::Selection,
            LogLevel::Info,
        )
    }

    pub fn series_refreshed(timeframe: Timeframe, generation: u64, total_revenue: u64) -> Self {
        Self::new(
            format!(
                "Revenue series #{} regenerated for {} (total ${})",
                generation, timeframe, total_revenue
            ),
            EventType::Refresh,
            LogLevel::Debug,
        )
    }

    pub fn drawer_toggled(open: bool) -> Self {
        let msg = if open {
            "Navigation drawer opened"
        } else {
            "Navigation drawer closed"
        };
        Self::new(msg.to_string(), EventType::Drawer, LogLevel::Debug)
    }

    /// Whether the event is shown at `threshold`. User-initiated selections always are.
    pub fn should_display(&self, threshold: LogLevel) -> bool {
        self.event_type == EventType::Selection || should_log(self.log_level, threshold)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
