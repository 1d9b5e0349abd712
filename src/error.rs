// src/error.rs
use thiserror::Error;

/// Everything the scrape / history / export core can fail with.
/// Frontends mostly just show `to_string()`.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Fill in URL and selector")]
    MissingInput,

    #[error("Invalid URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid CSS selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    #[error("Invalid headers JSON: {0}")]
    InvalidHeaders(String),

    #[error("HTTP error: {status} {url}")]
    Status { status: u16, url: String },

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Task {0} not found")]
    TaskNotFound(u64),

    #[error("url and selector are required")]
    InvalidSaveRequest,

    #[error("No data to export")]
    NothingToExport,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Settings: {0}")]
    TomlRead(#[from] toml::de::Error),

    #[error("Settings: {0}")]
    TomlWrite(#[from] toml::ser::Error),
}

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;
