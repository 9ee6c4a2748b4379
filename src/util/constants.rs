// LeadDeck - util/constants.rs
//
// Single source of truth for named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LeadDeck";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "LeadDeck";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Config file name, resolved relative to the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Sub-directory of the data directory that receives CSV exports by default.
pub const EXPORTS_DIR_NAME: &str = "exports";

// =============================================================================
// Lead source
// =============================================================================

/// Default remote endpoint returning user records.
pub const DEFAULT_SOURCE_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Default HTTP timeout for a lead fetch.
pub const DEFAULT_SOURCE_TIMEOUT_SECS: u64 = 15;

/// Bounds for the configurable HTTP timeout.
pub const MIN_SOURCE_TIMEOUT_SECS: u64 = 1;
pub const MAX_SOURCE_TIMEOUT_SECS: u64 = 300;

/// Upper bound on a lead source response body.
pub const MAX_RESPONSE_BYTES: usize = 8 * 1024 * 1024; // 8 MB

/// Default seed for connection-flag draws when no seed is configured.
/// Tags are not drawn from it; without a seed they follow the cyclic pool.
pub const DEFAULT_DRAW_SEED: u64 = 0x1EAD_DECC;

// =============================================================================
// Lead defaults
// =============================================================================

/// Display date assigned to every ingested lead.
pub const DEFAULT_LEAD_DATE: &str = "Aug 04 - 2025";

/// Display weekday assigned to every ingested lead.
pub const DEFAULT_LEAD_WEEKDAY: &str = "Tuesday";

// =============================================================================
// Export
// =============================================================================

/// MIME type of the CSV export.
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8";

/// Timestamp format embedded in export filenames (YYYYMMDD_HHmm).
pub const EXPORT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M";

/// How long the export success notice stays on screen.
pub const EXPORT_NOTICE_SECS: u64 = 3;

// =============================================================================
// UI
// =============================================================================

/// Default body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;
pub const MIN_FONT_SIZE: f32 = 8.0;
pub const MAX_FONT_SIZE: f32 = 32.0;

/// Number of skeleton rows shown while a load is in flight.
pub const SKELETON_ROWS: usize = 5;

/// Repaint interval while a load is outstanding.
pub const LOAD_POLL_INTERVAL_MS: u64 = 100;

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG, --debug, nor config set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";
