//! Dashboard view model
//!
//! Owns the selected timeframe and the revenue series derived from it.

use crate::model::revenue::RevenueSeries;
use crate::model::source::{RandomRevenueSource, RevenueSource, generate_series};
use crate::model::timeframe::Timeframe;
use log::debug;
use std::fmt::{Debug, Formatter};

/// Selected timeframe plus the current revenue series.
///
/// The series is generated on construction, so there is always one to render.
/// Every timeframe selection replaces it wholesale.
pub struct DashboardViewModel<S: RevenueSource = RandomRevenueSource> {
    timeframe: Timeframe,
    series: RevenueSeries,
    source: S,
    /// Number of series generated so far, including the initial one.
    generations: u64,
}

impl<S: RevenueSource> DashboardViewModel<S> {
    /// Creates a view model with the default timeframe and an initial series.
    pub fn new(mut source: S) -> Self {
        let series = generate_series(&mut source);
        Self {
            timeframe: Timeframe::default(),
            series,
            source,
            generations: 1,
        }
    }

    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    pub fn series(&self) -> &RevenueSeries {
        &self.series
    }

    pub fn generations(&self) -> u64 {
        self.generations
    }

    /// Store `timeframe` and regenerate the series.
    ///
    /// Regenerates even when `timeframe` is already selected.
    pub fn select_timeframe(&mut self, timeframe: Timeframe) {
        self.timeframe = timeframe;
        self.series = self.generate_series();
        self.generations += 1;
        debug!(
            "Regenerated revenue series for {} (generation {}): {}",
            self.timeframe, self.generations, self.series
        );
    }

    /// Draw a fresh series from the source without touching stored state.
    pub fn generate_series(&mut self) -> RevenueSeries {
        generate_series(&mut self.source)
    }
}

impl<S: RevenueSource> Debug for DashboardViewModel<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardViewModel")
            .field("timeframe", &self.timeframe)
            .field("series", &self.series)
            .field("generations", &self.generations)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::cli_consts::{REVENUE_MAX, REVENUE_MIN, SERIES_LEN};
    use crate::model::revenue::Month;
    use crate::model::source::MockRevenueSource;

    fn seeded(seed: u64) -> DashboardViewModel {
        DashboardViewModel::new(RandomRevenueSource::seeded(seed))
    }

    #[test]
    fn test_initial_state_has_full_series_and_default_timeframe() {
        let vm = seeded(1);
        assert_eq!(vm.timeframe(), Timeframe::OneMonth);
        assert_eq!(vm.series().iter().count(), SERIES_LEN);
        assert_eq!(vm.generations(), 1);
    }

    #[test]
    fn test_select_stores_every_timeframe() {
        let mut vm = seeded(2);
        for tf in Timeframe::all() {
            vm.select_timeframe(tf);
            assert_eq!(vm.timeframe(), tf);
        }
    }

    #[test]
    fn test_one_week_then_all_regenerates_twice() {
        let mut vm = seeded(3);
        let initial = vm.series().clone();

        vm.select_timeframe(Timeframe::OneWeek);
        let after_week = vm.series().clone();
        vm.select_timeframe(Timeframe::All);

        assert_eq!(vm.generations(), 3);
        assert_eq!(vm.timeframe(), Timeframe::All);
        assert_ne!(initial, after_week);
        assert_ne!(&after_week, vm.series());
    }

    #[test]
    fn test_reselecting_same_timeframe_still_regenerates() {
        let mut vm = seeded(4);
        let before = vm.series().clone();
        vm.select_timeframe(Timeframe::OneMonth);
        assert_eq!(vm.generations(), 2);
        assert_ne!(&before, vm.series());
    }

    #[test]
    fn test_generate_series_leaves_stored_series_alone() {
        let mut vm = seeded(5);
        let stored = vm.series().clone();
        let fresh = vm.generate_series();

        assert_eq!(&stored, vm.series());
        assert_eq!(vm.generations(), 1);
        let months: Vec<Month> = fresh.iter().map(|p| p.month()).collect();
        assert_eq!(months, Month::ALL.to_vec());
        assert!(
            fresh
                .iter()
                .all(|p| (REVENUE_MIN..REVENUE_MAX).contains(&p.revenue()))
        );
    }

    #[test]
    fn test_selection_replaces_whole_series_from_source() {
        let mut source = MockRevenueSource::new();
        let mut calls = 0u32;
        // First series is all 1000, second all 5999.
        source.expect_draw().times(SERIES_LEN * 2).returning(move |range| {
            calls += 1;
            if calls as usize <= SERIES_LEN {
                range.start
            } else {
                range.end - 1
            }
        });

        let mut vm = DashboardViewModel::new(source);
        assert!(vm.series().iter().all(|p| p.revenue() == REVENUE_MIN));

        vm.select_timeframe(Timeframe::OneYear);
        assert!(vm.series().iter().all(|p| p.revenue() == REVENUE_MAX - 1));
    }
}
