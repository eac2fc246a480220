//! Application configuration.
//!
//! Centralized configuration for the Receipt Scanner frontend.
//! The API base URL can be overridden at build time through the
//! `RECEIPT_SCANNER_API_URL` environment variable; everything else
//! is hardcoded.

/// Extraction API base URL.
///
/// Points at the receipt extraction backend. Overridable at compile
/// time via `RECEIPT_SCANNER_API_URL`.
pub const API_BASE_URL: &str = match option_env!("RECEIPT_SCANNER_API_URL") {
    Some(url) => url,
    None => "http://localhost:3001",
};

/// MIME types accepted by the upload validator.
pub const ALLOWED_FILE_TYPES: [&str; 3] = ["image/jpeg", "image/jpg", "image/png"];

/// Maximum upload size in bytes.
///
/// 10 MiB limit; a file of exactly this size is still accepted.
pub const MAX_FILE_SIZE: f64 = 10.0 * 1024.0 * 1024.0;

/// Application name shown in the header and the document title.
pub const APP_NAME: &str = "Receipt Scanner";

/// Milliseconds between step advances in the extraction loader.
pub const STEP_INTERVAL_MS: u32 = 2_000;

/// Milliseconds between progress-bar increments in the extraction loader.
pub const PROGRESS_INTERVAL_MS: u32 = 500;
