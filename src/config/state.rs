// src/config/state.rs
use url::Url;

use super::options::{AppOptions, ExportFormat, ScraperSettings};
use crate::error::{Result, ScrapeError};

/// GUI tabs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Parse,
    History,
    Settings,
}

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Parse form
    pub url_text: String,
    pub selector_text: String,

    /// Output field on the results card; empty = default path
    pub out_path_text: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current_page_index: 0,
            url_text: s!(),
            selector_text: s!(),
            out_path_text: s!(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        Self { options, gui: GuiState::default() }
    }
}

/// Editable copy of the options behind the Settings tab.
/// Nothing takes effect until `to_options` succeeds and the caller saves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsDraft {
    pub scraper: ScraperSettings,
    pub use_remote: bool,
    pub history_url: String,
    pub save_url: String,
    pub out_dir: String,
    pub format: ExportFormat,
    pub include_headers: bool,
}

impl SettingsDraft {
    pub fn from_options(opts: &AppOptions) -> Self {
        Self {
            scraper: opts.scraper.clone(),
            use_remote: opts.history.remote().is_some(),
            history_url: opts.history.history_url.clone().unwrap_or_default(),
            save_url: opts.history.save_url.clone().unwrap_or_default(),
            out_dir: opts.export.out_dir.to_string_lossy().into_owned(),
            format: opts.export.format,
            include_headers: opts.export.include_headers,
        }
    }

    /// Validate and merge into a copy of `base`.
    pub fn to_options(&self, base: &AppOptions) -> Result<AppOptions> {
        self.scraper.validate()?;

        let mut opts = base.clone();
        opts.scraper = self.scraper.clone();

        if self.use_remote {
            for (label, raw) in [("history", &self.history_url), ("save", &self.save_url)] {
                let raw = raw.trim();
                if raw.is_empty() {
                    return Err(ScrapeError::InvalidSetting(format!("{label} endpoint is empty")));
                }
                Url::parse(raw).map_err(|e| ScrapeError::InvalidUrl { url: s!(raw), reason: e.to_string() })?;
            }
            opts.history.history_url = Some(s!(self.history_url.trim()));
            opts.history.save_url = Some(s!(self.save_url.trim()));
        } else {
            opts.history.history_url = None;
            opts.history.save_url = None;
        }

        let out_dir = self.out_dir.trim();
        if !out_dir.is_empty() {
            opts.export.out_dir = out_dir.into();
        }
        opts.export.format = self.format;
        opts.export.include_headers = self.include_headers;
        Ok(opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_round_trips_defaults() {
        let opts = AppOptions::default();
        let draft = SettingsDraft::from_options(&opts);
        assert_eq!(draft.to_options(&opts).unwrap(), opts);
    }

    #[test]
    fn remote_draft_needs_valid_endpoints() {
        let opts = AppOptions::default();
        let mut draft = SettingsDraft::from_options(&opts);
        draft.use_remote = true;
        assert!(matches!(draft.to_options(&opts), Err(ScrapeError::InvalidSetting(_))));

        draft.history_url = s!("not a url");
        draft.save_url = s!("https://s.example/save");
        assert!(matches!(draft.to_options(&opts), Err(ScrapeError::InvalidUrl { .. })));

        draft.history_url = s!("https://h.example/history");
        let merged = draft.to_options(&opts).unwrap();
        assert_eq!(merged.history.remote(), Some(("https://h.example/history", "https://s.example/save")));
    }

    #[test]
    fn bad_headers_block_the_save() {
        let opts = AppOptions::default();
        let mut draft = SettingsDraft::from_options(&opts);
        draft.scraper.extra_headers = s!("{\"Accept\": ");
        assert!(matches!(draft.to_options(&opts), Err(ScrapeError::InvalidHeaders(_))));
    }

    #[test]
    fn header_names_must_be_valid_http() {
        let opts = AppOptions::default();
        let mut draft = SettingsDraft::from_options(&opts);
        draft.scraper.extra_headers = s!(r#"{"Bad Name": "x"}"#);
        assert!(matches!(draft.to_options(&opts), Err(ScrapeError::InvalidHeaders(_))));

        draft.scraper.extra_headers = s!(r#"{"X-Token": "line\nbreak"}"#);
        assert!(matches!(draft.to_options(&opts), Err(ScrapeError::InvalidHeaders(_))));

        draft.scraper.extra_headers = s!(r#"{"X-Token": "abc"}"#);
        assert!(draft.to_options(&opts).is_ok());
    }
}
