//! Search-engine ping notifications.
//!
//! Alerts search engines that the sitemap for a site has been updated.
//! Each notification is a single blocking HTTP GET of
//! `{ping_url}?sitemap={sitemap_url}`, the de-facto ping convention.
//! [`ping_all`] logs each outcome and never lets one failed engine abort
//! the rest.

use crate::config::PingConfig;
use crate::{debug, log};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use url::Url;

const ASK_PING_URL: &str = "http://submissions.ask.com/ping";
const GOOGLE_PING_URL: &str = "http://www.google.com/webmasters/tools/ping";
const LIVE_SEARCH_PING_URL: &str = "http://webmaster.live.com/ping.aspx";

/// Per-request timeout for ping requests.
const PING_TIMEOUT: Duration = Duration::from_secs(10);

/// Ping errors
#[derive(Debug, Error)]
pub enum PingError {
    #[error("no sitemap URL was provided and none could be derived from config")]
    SitemapNotFound,

    #[error("invalid ping URL `{0}`")]
    InvalidUrl(String, #[source] url::ParseError),

    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("request to {0} failed")]
    Request(String, #[source] reqwest::Error),

    #[error("{name} responded with status {status}")]
    Status { name: String, status: u16 },
}

/// One search-engine ping endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engine {
    /// Engine name, used in logs.
    pub name: String,
    /// Ping endpoint; the sitemap URL is appended as a query parameter.
    pub ping_url: String,
}

impl Engine {
    pub fn new(name: impl Into<String>, ping_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ping_url: ping_url.into(),
        }
    }

    pub fn ask() -> Self {
        Self::new("Ask", ASK_PING_URL)
    }

    pub fn google() -> Self {
        Self::new("Google", GOOGLE_PING_URL)
    }

    pub fn live_search() -> Self {
        Self::new("Live Search", LIVE_SEARCH_PING_URL)
    }

    /// The default engine set.
    pub fn defaults() -> Vec<Self> {
        vec![Self::ask(), Self::google(), Self::live_search()]
    }
}

/// A single notification attempt against one engine. Constructed per
/// attempt, discarded after use.
pub struct Pinger {
    engine: Engine,
    sitemap_url: String,
    client: Client,
}

impl Pinger {
    pub fn new(engine: Engine, sitemap_url: impl Into<String>) -> Result<Self, PingError> {
        let sitemap_url = sitemap_url.into();
        if sitemap_url.is_empty() {
            return Err(PingError::SitemapNotFound);
        }
        let client = Client::builder()
            .timeout(PING_TIMEOUT)
            .build()
            .map_err(PingError::Client)?;
        Ok(Self {
            engine,
            sitemap_url,
            client,
        })
    }

    /// Full request URL, with the sitemap URL encoded as the `sitemap`
    /// query parameter.
    pub fn request_url(&self) -> Result<Url, PingError> {
        let mut url = Url::parse(&self.engine.ping_url)
            .map_err(|err| PingError::InvalidUrl(self.engine.ping_url.clone(), err))?;
        url.query_pairs_mut()
            .append_pair("sitemap", &self.sitemap_url);
        Ok(url)
    }

    /// Issue the ping. Non-2xx responses count as failure.
    pub fn ping(&self) -> Result<(), PingError> {
        let url = self.request_url()?;
        debug!("ping"; "pinging {} with sitemap {}", self.engine.name, self.sitemap_url);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|err| PingError::Request(self.engine.name.clone(), err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PingError::Status {
                name: self.engine.name.clone(),
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

/// Ping every configured engine with the given sitemap URL.
///
/// Failures are logged per engine and do not stop the remaining pings.
/// Returns the number of engines that acknowledged the ping, or an error
/// when pinging is impossible altogether (no sitemap URL).
pub fn ping_all(config: &PingConfig, sitemap_url: &str) -> Result<usize, PingError> {
    if sitemap_url.is_empty() {
        return Err(PingError::SitemapNotFound);
    }
    if !config.enable {
        debug!("ping"; "pinging disabled, skipping {} engines", config.engines.len());
        return Ok(0);
    }

    let mut acknowledged = 0;
    for engine in &config.engines {
        let name = engine.name.clone();
        match Pinger::new(engine.clone(), sitemap_url).and_then(|pinger| pinger.ping()) {
            Ok(()) => {
                acknowledged += 1;
                log!("ping"; "pinged {} with sitemap {}", name, sitemap_url);
            }
            Err(err) => log!("error"; "{} ping failed: {:#}", name, anyhow::Error::from(err)),
        }
    }
    Ok(acknowledged)
}

/// Ping Google with the given sitemap URL.
pub fn ping_google(sitemap_url: &str) -> Result<(), PingError> {
    Pinger::new(Engine::google(), sitemap_url)?.ping()
}
