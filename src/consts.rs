pub mod cli_consts {
    //! Client Configuration Constants
    //!
    //! This module contains all configuration constants for the dashboard
    //! client, organized by functional area for clarity and maintainability.

    // =============================================================================
    // CLASS SHAPE
    // =============================================================================

    /// Number of graded subjects per student. The backend stores exactly
    /// this many grades and rejects updates with any other count.
    pub const SUBJECT_COUNT: usize = 5;

    /// Inclusive grade range accepted by the backend.
    pub const GRADE_MIN: f64 = 0.0;
    pub const GRADE_MAX: f64 = 10.0;

    /// Inclusive attendance percentage range accepted by the backend.
    pub const ATTENDANCE_MIN: f64 = 0.0;
    pub const ATTENDANCE_MAX: f64 = 100.0;

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of entries to keep in the activity log.
    pub const MAX_ACTIVITY_LOGS: usize = 50;

    /// Maximum event buffer size between workers and the UI loop.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // UI TIMING
    // =============================================================================

    /// Status message configuration
    pub mod status {
        use std::time::Duration;

        /// How long a transient status message stays on screen (milliseconds).
        /// Every message schedules its own independent clear.
        pub const MESSAGE_TTL_MS: u64 = 3_000;

        /// Helper function to get the status message lifetime
        pub const fn message_ttl() -> Duration {
            Duration::from_millis(MESSAGE_TTL_MS)
        }
    }

    /// Terminal input polling configuration
    pub mod input {
        use std::time::Duration;

        /// Interval at which the UI loop polls for key events (milliseconds).
        pub const POLL_INTERVAL_MS: u64 = 100;

        /// Helper function to get the key polling interval
        pub const fn poll_interval() -> Duration {
            Duration::from_millis(POLL_INTERVAL_MS)
        }
    }
}
