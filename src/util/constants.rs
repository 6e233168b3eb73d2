// ScrapeDeck - util/constants.rs
//
// Single source of truth for named constants and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "ScrapeDeck";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Backend
// =============================================================================

/// Default base URL of the scraper backend (the local Flask dev server).
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

// =============================================================================
// UI timing
// =============================================================================

/// Repaint interval while a job is in flight, so the outcome channel is
/// polled promptly even when the user is not interacting with the window.
pub const JOB_POLL_INTERVAL_MS: u64 = 100;

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG nor --debug is set.
pub const DEFAULT_LOG_LEVEL: &str = "info";
