pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains the fixed values the dashboard is built around,
    //! organized by functional area.

    // =============================================================================
    // REVENUE SERIES
    // =============================================================================

    /// Number of points in a revenue series, one per calendar month.
    pub const SERIES_LEN: usize = 12;

    /// Lowest revenue value a generated point can take (inclusive).
    pub const REVENUE_MIN: u32 = 1_000;

    /// Upper bound for generated revenue values (exclusive).
    pub const REVENUE_MAX: u32 = 6_000;

    // =============================================================================
    // ACTIVITY LOG
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// How long the splash screen stays up before the dashboard appears.
    pub const SPLASH_DURATION_MS: u64 = 2_000;

    /// Input poll interval for the UI event loop.
    pub const UI_POLL_INTERVAL_MS: u64 = 100;

    /// Width of the navigation drawer, in columns.
    pub const DRAWER_WIDTH: u16 = 24;

    /// Config directory created under the user's home directory.
    pub const CONFIG_DIR_NAME: &str = ".finance-dashboard";

    /// Config file name inside [`CONFIG_DIR_NAME`].
    pub const CONFIG_FILE_NAME: &str = "config.json";

    /// Diagnostic log written next to the config while the TUI owns the terminal.
    pub const LOG_FILE_NAME: &str = "dashboard.log";
}
