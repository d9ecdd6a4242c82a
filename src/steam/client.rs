//! Blocking HTTP client for the Steam store.

use std::time::Duration;

use anyhow::{anyhow, Context};
use reqwest::blocking::Client;
use tracing::{debug, warn};

use crate::config::StoreSettings;
use crate::error::{PixelBuddyError, Result};

use super::appdetails::{pc_requirements, RawRequirements};
use super::search::{parse_search_results, GameListing};
use super::GameStore;

/// Fetches search pages and app details from the Steam store.
///
/// # Example
///
/// ```no_run
/// use pixelbuddy::config::StoreSettings;
/// use pixelbuddy::steam::{GameStore, SteamClient};
///
/// let client = SteamClient::new(&StoreSettings::default()).unwrap();
/// for game in client.search("portal", 5).unwrap() {
///     println!("{} ({})", game.name, game.app_id);
/// }
/// ```
pub struct SteamClient {
    client: Client,
    base_url: String,
    language: String,
    search_timeout: Duration,
    fetch_timeout: Duration,
}

impl SteamClient {
    /// Create a client from store settings.
    pub fn new(settings: &StoreSettings) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("pixelbuddy/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            language: settings.language.clone(),
            search_timeout: Duration::from_secs(settings.search_timeout_secs),
            fetch_timeout: Duration::from_secs(settings.fetch_timeout_secs),
        })
    }

    /// Get the search request timeout.
    pub fn search_timeout(&self) -> Duration {
        self.search_timeout
    }

    /// Get the requirement fetch timeout.
    pub fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
    }

    /// URL of the store search page for a query.
    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}/search/?term={}&l={}",
            self.base_url,
            percent_encode(query),
            percent_encode(&self.language)
        )
    }

    /// URL of the `appdetails` API for an app.
    pub fn appdetails_url(&self, app_id: u32) -> String {
        format!(
            "{}/api/appdetails?appids={}&l={}",
            self.base_url,
            app_id,
            percent_encode(&self.language)
        )
    }

    /// Fetch and scrape the search page.
    pub fn fetch_search_results(
        &self,
        query: &str,
        max_results: usize,
    ) -> anyhow::Result<Vec<GameListing>> {
        let url = self.search_url(query);
        debug!("Searching store: {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(self.search_timeout)
            .send()
            .with_context(|| format!("Failed to fetch {}", url))?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP {} fetching {}", response.status(), url));
        }

        let html = response
            .text()
            .with_context(|| format!("Failed to read response from {}", url))?;

        Ok(parse_search_results(&html, max_results))
    }

    /// Fetch the raw requirement markup for an app.
    pub fn fetch_appdetails(&self, app_id: u32) -> anyhow::Result<RawRequirements> {
        let url = self.appdetails_url(app_id);
        debug!("Fetching app details: {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(self.fetch_timeout)
            .send()
            .with_context(|| format!("Failed to fetch {}", url))?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP {} fetching {}", response.status(), url));
        }

        let body: serde_json::Value = response
            .json()
            .with_context(|| format!("Invalid JSON from {}", url))?;

        Ok(pc_requirements(&body, app_id))
    }
}

impl GameStore for SteamClient {
    fn search(&self, query: &str, max_results: usize) -> Result<Vec<GameListing>> {
        self.fetch_search_results(query, max_results)
            .map_err(|e| PixelBuddyError::SearchFailed {
                query: query.to_string(),
                message: format!("{:#}", e),
            })
    }

    fn fetch_requirements(&self, app_id: u32) -> RawRequirements {
        self.fetch_appdetails(app_id).unwrap_or_else(|e| {
            warn!("Steam API error for app {}: {:#}", app_id, e);
            RawRequirements::default()
        })
    }
}

/// Percent-encode a query component, keeping RFC 3986 unreserved characters.
pub fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
