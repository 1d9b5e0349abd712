// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::consts::*;
use crate::error::{Result, ScrapeError};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub scraper: ScraperSettings,
    pub export: ExportOptions,
    pub history: HistoryOptions,
}

/* ---------------- Scraper ---------------- */

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperSettings {
    pub timeout_ms: u64,
    /// Pause between consecutive requests of one batch.
    pub delay_ms: u64,
    pub user_agent: String,
    /// Raw JSON object as typed by the user, e.g. `{"Accept": "text/html"}`.
    /// Empty means no extra headers.
    pub extra_headers: String,
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            delay_ms: DEFAULT_DELAY_MS,
            user_agent: s!(DEFAULT_USER_AGENT),
            extra_headers: s!(),
        }
    }
}

impl ScraperSettings {
    #[inline]
    pub fn timeout(&self) -> Duration { Duration::from_millis(self.timeout_ms) }

    #[inline]
    pub fn delay(&self) -> Duration { Duration::from_millis(self.delay_ms) }

    /// Parse `extra_headers` into (name, value) pairs.
    /// Numbers and booleans are stringified; anything else that isn't a
    /// string is rejected.
    pub fn header_pairs(&self) -> Result<Vec<(String, String)>> {
        let text = self.extra_headers.trim();
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let value: serde_json::Value = serde_json::from_str(text)
            .map_err(|e| ScrapeError::InvalidHeaders(e.to_string()))?;
        let serde_json::Value::Object(map) = value else {
            return Err(ScrapeError::InvalidHeaders(s!("expected a JSON object")));
        };

        let mut out = Vec::with_capacity(map.len());
        for (name, v) in map {
            let v = match v {
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                _ => {
                    return Err(ScrapeError::InvalidHeaders(format!(
                        "value for `{name}` must be a string"
                    )));
                }
            };
            out.push((name, v));
        }
        Ok(out)
    }

    pub fn validate(&self) -> Result<()> {
        if self.timeout_ms == 0 {
            return Err(ScrapeError::InvalidSetting(s!("timeout must be greater than 0 ms")));
        }
        if self.user_agent.contains(['\r', '\n']) {
            return Err(ScrapeError::InvalidSetting(s!("User-Agent must be a single line")));
        }
        // Same checks the fetcher applies, so a saved config always builds a client.
        crate::core::net::default_headers(self).map(|_| ())
    }
}

/* ---------------- Export ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
    /// Tab-separated text with an .xls name; Excel opens it directly.
    Excel,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Csv, ExportFormat::Json, ExportFormat::Excel];

    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xls",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
            ExportFormat::Excel => "EXCEL",
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
            ExportFormat::Excel => "application/vnd.ms-excel",
        }
    }

    /// Field separator for the delimited formats.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Excel => Some('\t'),
            ExportFormat::Json => None,
        }
    }

    pub fn default_file_name(&self) -> String {
        format!("{DEFAULT_FILE_STEM}.{}", self.ext())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "excel" | "xls" | "tsv" => Ok(ExportFormat::Excel),
            other => Err(format!("Unknown format: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub out_dir: PathBuf,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// Default target for the current format: `<out_dir>/parsed_data.<ext>`.
    pub fn out_path(&self) -> PathBuf {
        self.out_dir.join(self.format.default_file_name())
    }

    /// Resolve user text into a file path.
    /// Empty → default; trailing separator or existing dir → dir + default name.
    pub fn resolve_path(&self, text: &str) -> PathBuf {
        let text = text.trim();
        if text.is_empty() {
            return self.out_path();
        }
        let p = Path::new(text);
        if looks_like_dir_hint(text) || p.is_dir() {
            p.join(self.format.default_file_name())
        } else {
            p.to_path_buf()
        }
    }
}

fn looks_like_dir_hint(s: &str) -> bool {
    s.ends_with('/') || s.ends_with('\\')
}

/* ---------------- History ---------------- */

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryOptions {
    /// GET endpoint returning `{"tasks": [...]}`; also serves `?task_id=N`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_url: Option<String>,
    /// POST endpoint accepting `{url, selector, items}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_url: Option<String>,
    pub limit: usize,
}

impl Default for HistoryOptions {
    fn default() -> Self {
        Self { history_url: None, save_url: None, limit: HISTORY_LIMIT }
    }
}

impl HistoryOptions {
    /// Both endpoints, if configured. Otherwise the local store is used.
    pub fn remote(&self) -> Option<(&str, &str)> {
        let h = self.history_url.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let s = self.save_url.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        Some((h, s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_settings_form() {
        let s = ScraperSettings::default();
        assert_eq!(s.timeout_ms, 5000);
        assert_eq!(s.delay_ms, 1000);
        assert!(s.user_agent.starts_with("Mozilla/5.0"));
        assert!(s.header_pairs().unwrap().is_empty());
    }

    #[test]
    fn header_pairs_accepts_object_and_stringifies_scalars() {
        let s = ScraperSettings {
            extra_headers: s!(r#"{"Accept": "text/html", "X-Depth": 2, "X-Flag": true}"#),
            ..Default::default()
        };
        let pairs = s.header_pairs().unwrap();
        assert!(pairs.contains(&(s!("Accept"), s!("text/html"))));
        assert!(pairs.contains(&(s!("X-Depth"), s!("2"))));
        assert!(pairs.contains(&(s!("X-Flag"), s!("true"))));
    }

    #[test]
    fn header_pairs_rejects_non_objects_and_nested_values() {
        for bad in [r#"["a"]"#, r#"{"a": null}"#, r#"{"a": {"b": 1}}"#, "{not json"] {
            let s = ScraperSettings { extra_headers: s!(bad), ..Default::default() };
            assert!(
                matches!(s.header_pairs(), Err(ScrapeError::InvalidHeaders(_))),
                "accepted {bad}"
            );
        }
    }

    #[test]
    fn zero_timeout_is_invalid() {
        let s = ScraperSettings { timeout_ms: 0, ..Default::default() };
        assert!(matches!(s.validate(), Err(ScrapeError::InvalidSetting(_))));
    }

    #[test]
    fn resolve_path_rules() {
        let opts = ExportOptions::default();
        assert_eq!(opts.resolve_path(""), PathBuf::from("out").join("parsed_data.csv"));
        assert_eq!(opts.resolve_path("exports/"), PathBuf::from("exports/").join("parsed_data.csv"));
        assert_eq!(opts.resolve_path("a/b.txt"), PathBuf::from("a/b.txt"));
    }

    #[test]
    fn format_names() {
        assert_eq!(ExportFormat::Excel.default_file_name(), "parsed_data.xls");
        assert_eq!("xls".parse::<ExportFormat>().unwrap(), ExportFormat::Excel);
        assert!("yaml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn remote_needs_both_endpoints() {
        let mut h = HistoryOptions::default();
        assert!(h.remote().is_none());
        h.history_url = Some(s!("https://h.example"));
        assert!(h.remote().is_none());
        h.save_url = Some(s!("  "));
        assert!(h.remote().is_none());
        h.save_url = Some(s!("https://s.example"));
        assert_eq!(h.remote(), Some(("https://h.example", "https://s.example")));
    }
}
