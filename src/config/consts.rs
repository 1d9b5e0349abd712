// src/config/consts.rs

// Request defaults
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_DELAY_MS: u64 = 1_000;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

// Extraction
pub const TITLE_FALLBACK_CHARS: usize = 80;

// Local store
pub const STORE_DIR: &str = ".store";
pub const HISTORY_FILE: &str = "history.json";
pub const SETTINGS_FILE: &str = "settings.toml";
pub const LOG_FILE: &str = "debug.log";
pub const LOG_ENV: &str = "WEB_SCRAPE_LOG";

// History
pub const HISTORY_LIMIT: usize = 50;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE_STEM: &str = "parsed_data";
