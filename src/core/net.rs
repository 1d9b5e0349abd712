// src/core/net.rs
//
// Blocking HTTP GET with the user's request settings baked into the client.

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use url::Url;

use crate::config::options::ScraperSettings;
use crate::error::{Result, ScrapeError};

#[derive(Clone, Debug)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(settings: &ScraperSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .default_headers(default_headers(settings)?)
            .build()?;
        Ok(Self { client })
    }

    /// GET `url` and return the body as text. Non-2xx is an error.
    pub fn get_html(&self, url: &Url) -> Result<String> {
        logd!("Net: GET {url}");
        let resp = self.client.get(url.clone()).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Status { status: status.as_u16(), url: url.to_string() });
        }

        let body = resp.text()?;
        logd!("Net: {} {url} ({} bytes)", status.as_u16(), body.len());
        Ok(body)
    }
}

/// User-Agent plus the extra headers JSON, validated into a HeaderMap.
pub fn default_headers(settings: &ScraperSettings) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();

    let ua = settings.user_agent.trim();
    if !ua.is_empty() {
        let v = HeaderValue::from_str(ua)
            .map_err(|e| ScrapeError::InvalidSetting(format!("User-Agent: {e}")))?;
        map.insert(USER_AGENT, v);
    }

    for (name, value) in settings.header_pairs()? {
        let n = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ScrapeError::InvalidHeaders(format!("`{name}`: {e}")))?;
        let v = HeaderValue::from_str(&value)
            .map_err(|e| ScrapeError::InvalidHeaders(format!("`{name}`: {e}")))?;
        map.insert(n, v);
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_headers_override_user_agent() {
        let settings = ScraperSettings {
            extra_headers: s!(r#"{"User-Agent": "custom/1.0", "Accept": "text/html"}"#),
            ..Default::default()
        };
        let map = default_headers(&settings).unwrap();
        assert_eq!(map[USER_AGENT], "custom/1.0");
        assert_eq!(map["accept"], "text/html");
    }

    #[test]
    fn bad_header_name_is_reported() {
        let settings = ScraperSettings {
            extra_headers: s!(r#"{"Bad Name": "x"}"#),
            ..Default::default()
        };
        assert!(matches!(default_headers(&settings), Err(ScrapeError::InvalidHeaders(_))));
    }
}
