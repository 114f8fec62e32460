//! Dashboard data model
//!
//! Timeframe selection, the generated revenue series, and the static sample
//! content, tied together by [`DashboardViewModel`].

pub mod revenue;
pub mod samples;
pub mod source;
pub mod timeframe;
pub mod view_model;

pub use source::RandomRevenueSource;
pub use timeframe::Timeframe;
pub use view_model::DashboardViewModel;
