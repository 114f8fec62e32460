//! Revenue series types

use crate::consts::cli_consts::SERIES_LEN;
use std::fmt::{Display, Formatter};

/// Calendar month labels used on the revenue chart's x-axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; SERIES_LEN] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];
}

/// One bar of the revenue chart.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RevenuePoint {
    month: Month,
    revenue: u32,
}

impl RevenuePoint {
    pub fn new(month: Month, revenue: u32) -> Self {
        Self { month, revenue }
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn revenue(&self) -> u32 {
        self.revenue
    }
}

/// Twelve revenue points, one per month from Jan to Dec.
///
/// The fixed-size backing array keeps the length invariant; the only way to
/// build a series is from a value per month, in calendar order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevenueSeries {
    points: [RevenuePoint; SERIES_LEN],
}

impl RevenueSeries {
    /// Build a series from one revenue value per month, Jan first.
    pub fn from_revenues(revenues: [u32; SERIES_LEN]) -> Self {
        let mut i = 0;
        let points = Month::ALL.map(|month| {
            let point = RevenuePoint::new(month, revenues[i]);
            i += 1;
            point
        });
        Self { points }
    }

    pub fn iter(&self) -> impl Iterator<Item = &RevenuePoint> {
        self.points.iter()
    }

    /// Sum of all monthly revenue values.
    pub fn total_revenue(&self) -> u64 {
        self.points.iter().map(|p| u64::from(p.revenue)).sum()
    }
}

impl Display for RevenueSeries {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .points
            .iter()
            .map(|p| format!("{}={}", p.month, p.revenue))
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}
