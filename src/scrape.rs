// src/scrape.rs
//
// The parse action: validate the form, fetch, extract, record.

use std::thread;

use scraper::Selector;
use url::Url;

use crate::{
    config::options::ScraperSettings,
    core::{compile_selector, extract_items, Fetcher},
    data::{ParsedItem, SaveReceipt, SaveRequest},
    error::{Result, ScrapeError},
    history::HistoryBackend,
    progress::Progress,
};

/// What the user typed into the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrapeRequest {
    pub url: String,
    pub selector: String,
}

/// A request that passed validation: absolute http(s) URL and a compiled selector.
#[derive(Debug)]
pub struct ValidRequest {
    pub url: Url,
    pub selector: Selector,
}

impl ScrapeRequest {
    pub fn new(url: impl Into<String>, selector: impl Into<String>) -> Self {
        Self { url: url.into(), selector: selector.into() }
    }

    pub fn validate(&self) -> Result<ValidRequest> {
        let raw_url = self.url.trim();
        let raw_sel = self.selector.trim();
        if raw_url.is_empty() || raw_sel.is_empty() {
            return Err(ScrapeError::MissingInput);
        }

        let url = Url::parse(raw_url).map_err(|e| ScrapeError::InvalidUrl {
            url: s!(raw_url),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ScrapeError::InvalidUrl {
                url: s!(raw_url),
                reason: format!("unsupported scheme `{}`", url.scheme()),
            });
        }

        let selector = compile_selector(raw_sel)?;
        Ok(ValidRequest { url, selector })
    }

    fn to_save_request(&self, items: &[ParsedItem]) -> SaveRequest {
        SaveRequest {
            url: s!(self.url.trim()),
            selector: s!(self.selector.trim()),
            items: items.to_vec(),
        }
    }
}

/// Fetch an already validated request and extract its items.
pub fn fetch_and_extract(fetcher: &Fetcher, valid: &ValidRequest) -> Result<Vec<ParsedItem>> {
    let html = fetcher.get_html(&valid.url)?;
    let items = extract_items(&html, &valid.selector, Some(&valid.url));
    logd!("Scrape: {} → {} items", valid.url, items.len());
    Ok(items)
}

/// Validate, fetch and extract one request.
pub fn scrape_one(fetcher: &Fetcher, req: &ScrapeRequest) -> Result<Vec<ParsedItem>> {
    let valid = req.validate()?;
    fetch_and_extract(fetcher, &valid)
}

/// Per-request result of a batch.
#[derive(Debug)]
pub struct BatchEntry {
    pub request: ScrapeRequest,
    pub result: Result<Vec<ParsedItem>>,
}

/// Run `requests` in order, pausing `settings.delay` between consecutive
/// fetches (not after the last). Failures are recorded per entry; only
/// unusable settings fail the whole batch.
pub fn scrape_batch(
    settings: &ScraperSettings,
    requests: &[ScrapeRequest],
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<BatchEntry>> {
    settings.validate()?;
    let fetcher = Fetcher::new(settings)?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(requests.len());
    }

    let mut out = Vec::with_capacity(requests.len());
    let mut fetched_before = false;

    for req in requests {
        let result = match req.validate() {
            Ok(valid) => {
                if fetched_before && !settings.delay().is_zero() {
                    thread::sleep(settings.delay()); // be polite
                }
                fetched_before = true;
                fetch_and_extract(&fetcher, &valid)
            }
            Err(e) => Err(e),
        };

        if let Some(p) = progress.as_deref_mut() {
            match &result {
                Ok(items) => p.item_done(&req.url, items.len()),
                Err(e) => {
                    loge!("Scrape: {} failed: {e}", req.url);
                    p.item_failed(&req.url, &e.to_string());
                }
            }
        }
        out.push(BatchEntry { request: req.clone(), result });
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(out)
}

/// Result of a parse that was (maybe) written to history.
#[derive(Debug)]
pub struct ScrapeOutcome {
    pub items: Vec<ParsedItem>,
    pub receipt: Option<SaveReceipt>,
    /// Saving is best-effort: the parse still counts if history is down.
    pub save_error: Option<String>,
}

impl ScrapeOutcome {
    pub fn message(&self) -> String {
        format!("Parsed {} items successfully", self.items.len())
    }
}

/// Save `items` for `req` to `backend`, turning failures into a message.
pub fn record(
    backend: &dyn HistoryBackend,
    req: &ScrapeRequest,
    items: &[ParsedItem],
) -> (Option<SaveReceipt>, Option<String>) {
    match backend.save(&req.to_save_request(items)) {
        Ok(receipt) => (Some(receipt), None),
        Err(e) => {
            logw!("History: save to {} backend failed: {e}", backend.name());
            (None, Some(format!("History not saved: {e}")))
        }
    }
}

/// The whole parse action: validate → fetch → extract → save to history.
/// Validation and fetch errors fail the call; a failed save does not.
pub fn scrape_and_record(
    settings: &ScraperSettings,
    backend: Option<&dyn HistoryBackend>,
    req: &ScrapeRequest,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ScrapeOutcome> {
    let valid = req.validate()?;
    settings.validate()?;
    let fetcher = Fetcher::new(settings)?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(1);
        p.log(&format!("Fetching {}", valid.url));
    }

    let items = match fetch_and_extract(&fetcher, &valid) {
        Ok(items) => items,
        Err(e) => {
            if let Some(p) = progress.as_deref_mut() {
                p.item_failed(&req.url, &e.to_string());
                p.finish();
            }
            return Err(e);
        }
    };

    if let Some(p) = progress.as_deref_mut() {
        p.item_done(&req.url, items.len());
    }

    let (receipt, save_error) = match backend {
        Some(b) => record(b, req, &items),
        None => (None, None),
    };

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(ScrapeOutcome { items, receipt, save_error })
}
