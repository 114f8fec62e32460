//! Timeframe selection

use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// A coarse window selector for the revenue overview.
///
/// The selection only triggers regeneration of the revenue series; it does not
/// scale or filter the generated values.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Timeframe {
    /// One week
    #[strum(serialize = "1W")]
    OneWeek,
    /// One month
    #[default]
    #[strum(serialize = "1M")]
    OneMonth,
    /// Three months
    #[strum(serialize = "3M")]
    ThreeMonths,
    /// One year
    #[strum(serialize = "1Y")]
    OneYear,
    /// All time
    #[strum(serialize = "ALL")]
    All,
}

impl Timeframe {
    /// All timeframes in display order.
    pub fn all() -> Vec<Timeframe> {
        Timeframe::iter().collect()
    }

    /// Position of this timeframe in display order.
    pub fn index(&self) -> usize {
        Timeframe::iter()
            .position(|tf| tf == *self)
            .unwrap_or_default()
    }

    /// Timeframe at `index` in display order, if any.
    pub fn from_index(index: usize) -> Option<Timeframe> {
        Timeframe::iter().nth(index)
    }

    /// Next timeframe in display order, wrapping around after `ALL`.
    pub fn next(&self) -> Timeframe {
        let count = Timeframe::iter().len();
        Timeframe::from_index((self.index() + 1) % count).unwrap_or_default()
    }

    /// Previous timeframe in display order, wrapping around before `1W`.
    pub fn previous(&self) -> Timeframe {
        let count = Timeframe::iter().len();
        Timeframe::from_index((self.index() + count - 1) % count).unwrap_or_default()
    }
}
