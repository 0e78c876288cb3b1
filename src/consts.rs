pub mod cli_consts {
    //! Dashboard Configuration Constants

    use std::time::Duration;

    // =============================================================================
    // UI LOOP
    // =============================================================================

    /// How long the splash screen stays up unless a key is pressed.
    pub const SPLASH_DURATION: Duration = Duration::from_secs(2);

    /// Input poll timeout; also the redraw/animation tick.
    pub const TICK_RATE: Duration = Duration::from_millis(100);

    /// The maximum number of events to keep in the activity log.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    // =============================================================================
    // LAYOUT
    // =============================================================================

    /// Task cards per row in the workspace grid.
    pub const CARD_COLUMNS: usize = 3;

    /// Height of one task card, borders included.
    pub const CARD_HEIGHT: u16 = 8;

    // =============================================================================
    // CONFIGURATION
    // =============================================================================

    /// Directory under $HOME holding the config file.
    pub const CONFIG_DIR: &str = ".corenet";

    pub const CONFIG_FILE: &str = "config.json";
}
