pub mod cli_consts {
    //! Client Configuration Constants
    //!
    //! Organized by functional area.

    // =============================================================================
    // BACKEND
    // =============================================================================

    /// Backend used when neither a flag, the environment nor the config file names one.
    pub const DEFAULT_API_URL: &str = "http://localhost:8080";

    /// Environment variable overriding the backend base URL
    pub const API_URL_ENV: &str = "KYC_API_URL";

    /// Environment variable overriding the stored bearer token
    pub const API_TOKEN_ENV: &str = "KYC_API_TOKEN";

    /// Name of the per-user directory holding the config file and the TUI log
    pub const CONFIG_DIR_NAME: &str = ".kyc-console";

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// Number of assigned farmers listed under "Recent Activity".
    pub const RECENT_ACTIVITY_LIMIT: usize = 5;

    /// Capacity of the channel carrying completed requests back to the UI loop
    pub const EVENT_QUEUE_SIZE: usize = 64;

    /// How long the UI loop waits for a key press before redrawing (milliseconds)
    pub const INPUT_POLL_MS: u64 = 100;

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    pub mod network {
        use std::time::Duration;

        /// TCP connect timeout (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Whole-request timeout (seconds)
        pub const REQUEST_TIMEOUT_SECS: u64 = 30;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }
}
