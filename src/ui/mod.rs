// Module declarations
mod app;
pub mod dashboard;
pub mod splash;
mod variant;
// Re-exports for external use
pub use app::{App, UIConfig, run};
pub use variant::PageVariant;
