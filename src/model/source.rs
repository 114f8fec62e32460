//! Revenue data sources
//!
//! The dashboard draws its mock revenue numbers through the [`RevenueSource`]
//! trait so tests can substitute seeded or mocked generators.

use crate::consts::cli_consts::{REVENUE_MAX, REVENUE_MIN, SERIES_LEN};
use crate::model::revenue::RevenueSeries;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

#[cfg(test)]
use mockall::{automock, predicate::*};

/// Supplies revenue values for generated series.
#[cfg_attr(test, automock)]
pub trait RevenueSource {
    /// Draw one integer uniformly from `range` (start inclusive, end exclusive).
    fn draw(&mut self, range: Range<u32>) -> u32;
}

/// Random source backed by a standard RNG.
#[derive(Debug, Clone)]
pub struct RandomRevenueSource {
    rng: StdRng,
}

impl RandomRevenueSource {
    /// Source seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Source with a fixed seed; the same seed yields the same series.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded source when `seed` is given, entropy otherwise.
    pub fn with_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl RevenueSource for RandomRevenueSource {
    fn draw(&mut self, range: Range<u32>) -> u32 {
        self.rng.gen_range(range)
    }
}

/// Generate a fresh series: one independent draw from `[REVENUE_MIN, REVENUE_MAX)`
/// per month, Jan through Dec.
pub fn generate_series<S: RevenueSource + ?Sized>(source: &mut S) -> RevenueSeries {
    let mut revenues = [0u32; SERIES_LEN];
    for revenue in revenues.iter_mut() {
        *revenue = source.draw(REVENUE_MIN..REVENUE_MAX);
    }
    RevenueSeries::from_revenues(revenues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::revenue::Month;

    #[test]
    fn test_generated_series_has_twelve_months_in_order() {
        let mut source = RandomRevenueSource::seeded(7);
        let series = generate_series(&mut source);

        let months: Vec<Month> = series.iter().map(|p| p.month()).collect();
        assert_eq!(months, Month::ALL.to_vec());
    }

    #[test]
    fn test_generated_revenue_stays_in_range() {
        let mut source = RandomRevenueSource::from_entropy();
        for _ in 0..200 {
            let series = generate_series(&mut source);
            assert!(
                series
                    .iter()
                    .all(|p| (REVENUE_MIN..REVENUE_MAX).contains(&p.revenue()))
            );
        }
    }

    #[test]
    fn test_same_seed_gives_same_series() {
        let a = generate_series(&mut RandomRevenueSource::seeded(42));
        let b = generate_series(&mut RandomRevenueSource::seeded(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_successive_series_are_drawn_independently() {
        let mut source = RandomRevenueSource::seeded(42);
        let first = generate_series(&mut source);
        let second = generate_series(&mut source);
        // 12 draws from 5000 values each; a full collision is effectively impossible.
        assert_ne!(first, second);
    }

    #[test]
    fn test_generate_draws_once_per_month_with_revenue_range() {
        let mut source = MockRevenueSource::new();
        source
            .expect_draw()
            .with(eq(REVENUE_MIN..REVENUE_MAX))
            .times(SERIES_LEN)
            .returning(|range| range.start);

        let series = generate_series(&mut source);
        assert!(series.iter().all(|p| p.revenue() == REVENUE_MIN));
    }

    #[test]
    fn test_generate_keeps_draw_order() {
        let mut source = MockRevenueSource::new();
        let mut next = REVENUE_MIN;
        source.expect_draw().returning(move |_| {
            let value = next;
            next += 100;
            value
        });

        let series = generate_series(&mut source);
        let revenues: Vec<u32> = series.iter().map(|p| p.revenue()).collect();
        assert_eq!(revenues[0], 1000);
        assert_eq!(revenues[11], 2100);
        assert!(revenues.windows(2).all(|w| w[0] < w[1]));
    }
}
