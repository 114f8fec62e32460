//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod drawer;
pub mod footer;
pub mod header;
pub mod lists;
pub mod metrics;
pub mod revenue;
