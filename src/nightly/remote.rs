//! Remote version lookup on the nightly release page.

use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;
use std::time::Duration;

use crate::error::{NevirallerError, Result};

use super::version::VersionSignature;

/// `<meta name="twitter:description">` elements.
static TWITTER_DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[name="twitter:description"]"#)
        .expect("TWITTER_DESCRIPTION must parse")
});

/// Nightly version token: product prefix, semver-like core, dev hash.
static VERSION_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"NVIM v[0-9]+\.[0-9]+\.[0-9]+-dev-[a-fA-F0-9]+")
        .expect("VERSION_TOKEN must compile")
});

/// Extract the nightly version from release page HTML.
///
/// Looks at the `content` of `<meta name="twitter:description">` elements
/// only. Returns the unknown signature when no element carries a version
/// token.
pub fn extract_version(html: &str) -> VersionSignature {
    let document = Html::parse_document(html);
    let version = document
        .select(&TWITTER_DESCRIPTION)
        .filter_map(|meta| meta.value().attr("content"))
        .find_map(|content| VERSION_TOKEN.find(content))
        .map(|m| VersionSignature::new(m.as_str()))
        .unwrap_or_default();
    version
}

/// Client for the nightly release page.
pub struct ReleasePage {
    url: String,
    timeout: Duration,
    client: reqwest::blocking::Client,
}

impl ReleasePage {
    /// Create a client bounded by `timeout`.
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("neviraller/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| NevirallerError::Fetch {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            url: url.to_string(),
            timeout,
            client,
        })
    }

    /// Fetch the page and extract the version.
    ///
    /// Transport errors, timeouts and non-2xx statuses are `Fetch` errors; a
    /// page without a version token is the unknown signature.
    pub fn fetch_version(&self) -> Result<VersionSignature> {
        tracing::debug!("GET {} (timeout {:?})", self.url, self.timeout);
        let body = self.fetch_body()?;
        let version = extract_version(&body);
        if version.is_unknown() {
            tracing::warn!("No version token found on {}", self.url);
        } else {
            tracing::debug!("Remote version: {}", version);
        }
        Ok(version)
    }

    fn fetch_body(&self) -> Result<String> {
        let response = self.client.get(&self.url).send().map_err(|e| self.fetch_error(e))?;

        if !response.status().is_success() {
            return Err(NevirallerError::Fetch {
                url: self.url.clone(),
                message: format!("HTTP {}", response.status()),
            });
        }

        response.text().map_err(|e| self.fetch_error(e))
    }

    fn fetch_error(&self, e: reqwest::Error) -> NevirallerError {
        let message = if e.is_timeout() {
            format!("timed out after {}s", self.timeout.as_secs())
        } else {
            e.to_string()
        };
        NevirallerError::Fetch {
            url: self.url.clone(),
            message,
        }
    }
}
