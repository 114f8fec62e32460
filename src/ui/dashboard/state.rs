//! Dashboard state management
//!
//! Contains the main dashboard state struct

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::events::Event;
use crate::logging::{LogLevel, get_rust_log_level};
use crate::model::{DashboardViewModel, RandomRevenueSource};
use crate::ui::app::UIConfig;
use crate::ui::variant::PageVariant;

use std::collections::VecDeque;

/// State of the dashboard screen: the view model plus presentation flags.
#[derive(Debug)]
pub struct DashboardState {
    /// Selected timeframe and current revenue series.
    pub view_model: DashboardViewModel,
    /// Which page variant is being shown.
    pub variant: PageVariant,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Lowest activity level shown, taken from `RUST_LOG` at construction.
    pub log_threshold: LogLevel,
    /// Activity logs for display (last 100 events)
    pub activity_logs: VecDeque<Event>,

    /// Whether the navigation drawer is currently shown.
    drawer_open: bool,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(ui_config: &UIConfig) -> Self {
        let source = RandomRevenueSource::with_optional_seed(ui_config.seed);
        Self {
            view_model: DashboardViewModel::new(source),
            variant: ui_config.variant,
            with_background_color: ui_config.with_background_color,
            log_threshold: get_rust_log_level(),
            activity_logs: VecDeque::new(),
            drawer_open: false,
        }
    }

    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub(super) fn set_drawer_open(&mut self, open: bool) {
        self.drawer_open = open;
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Most recent event that should be displayed, if any.
    pub fn latest_activity(&self) -> Option<&Event> {
        self.activity_logs
            .iter()
            .rev()
            .find(|event| event.should_display(self.log_threshold))
    }
}

/// Seeded default-config state for tests across the dashboard modules.
#[cfg(test)]
pub(crate) fn test_state(variant: PageVariant, seed: u64) -> DashboardState {
    let ui_config = UIConfig::new(false, variant, Some(seed));
    let mut state = DashboardState::new(&ui_config);
    state.log_threshold = LogLevel::Info;
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventType;
    use crate::model::Timeframe;

    #[test]
    fn test_new_state_starts_with_series_and_closed_drawer() {
        let state = test_state(PageVariant::Drawer, 1);
        assert_eq!(state.view_model.timeframe(), Timeframe::OneMonth);
        assert_eq!(state.view_model.series().iter().count(), 12);
        assert!(!state.drawer_open());
        assert!(state.activity_logs.is_empty());
        assert!(state.latest_activity().is_none());
    }

    #[test]
    fn test_activity_log_is_bounded() {
        let mut state = test_state(PageVariant::Standard, 1);
        for _ in 0..(MAX_ACTIVITY_LOGS + 10) {
            state.add_to_activity_log(Event::timeframe_selected(Timeframe::OneWeek));
        }
        state.add_to_activity_log(Event::timeframe_selected(Timeframe::All));

        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
        assert_eq!(
            state.activity_logs.back().map(|e| e.event_type),
            Some(EventType::Selection)
        );
        assert_eq!(
            state.latest_activity().map(|e| e.msg.as_str()),
            Some("Selected timeframe ALL")
        );
    }

    #[test]
    fn test_latest_activity_follows_log_threshold() {
        let mut state = test_state(PageVariant::Standard, 2);
        state.add_to_activity_log(Event::timeframe_selected(Timeframe::ThreeMonths));
        state.add_to_activity_log(Event::series_refreshed(Timeframe::ThreeMonths, 2, 40_000));

        assert_eq!(
            state.latest_activity().map(|e| e.event_type),
            Some(EventType::Selection)
        );

        state.log_threshold = LogLevel::Debug;
        assert_eq!(
            state.latest_activity().map(|e| e.event_type),
            Some(EventType::Refresh)
        );
    }

    #[test]
    fn test_same_seed_gives_same_initial_series() {
        let a = test_state(PageVariant::Standard, 99);
        let b = test_state(PageVariant::Drawer, 99);
        assert_eq!(a.view_model.series(), b.view_model.series());
    }
}
