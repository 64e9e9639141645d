//! Application Configuration
//!
//! Fixed settings for the tracker, built once in `main` and provided through
//! context.

use log::LevelFilter;

/// `localStorage` key holding the JSON array of transactions
pub const STORAGE_KEY: &str = "transactions";
/// Query parameter carrying the open modal
pub const MODAL_PARAM: &str = "modal";
/// How long the validation toast stays up
pub const TOAST_HIDE_AFTER_MS: u32 = 3000;
/// Lists longer than this switch to the expanded layout
pub const EXPANDED_AFTER: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub storage_key: String,
    pub modal_param: String,
    pub toast_hide_after_ms: u32,
    pub expanded_after: usize,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            modal_param: MODAL_PARAM.to_string(),
            toast_hide_after_ms: TOAST_HIDE_AFTER_MS,
            expanded_after: EXPANDED_AFTER,
            log_level: if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info },
        }
    }
}
