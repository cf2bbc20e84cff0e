//! Sitemapper - XML sitemap generation and search-engine pinging.
//!
//! Two components:
//!
//! - **Sitemap formatter**: the [`Sitemap`] trait turns a collection of
//!   caller-supplied items into sitemaps.org `<urlset>` documents, paginated
//!   at the protocol limit of 50,000 URLs per file, with a `<sitemapindex>`
//!   when more than one file is needed.
//! - **Search-engine pinger**: [`ping::ping_all`] notifies configured search
//!   engines that a sitemap changed, one blocking HTTP GET per endpoint.
//!
//! # Example
//!
//! ```ignore
//! struct PageSitemap {
//!     permalinks: Vec<String>,
//! }
//!
//! impl Sitemap for PageSitemap {
//!     type Item = String;
//!
//!     fn items(&self) -> Vec<String> {
//!         self.permalinks.clone()
//!     }
//!
//!     fn location(&self, item: &String) -> String {
//!         item.clone()
//!     }
//! }
//!
//! let config = Config::load(Path::new("sitemapper.toml"))?;
//! let sitemap = PageSitemap { permalinks: vec!["/".into(), "/about/".into()] };
//! generator::write_sitemaps(&config, &sitemap, Path::new("public"))?;
//! ping::ping_all(&config.ping, &config.sitemap_url().unwrap_or_default());
//! ```

pub mod config;
pub mod generator;
#[doc(hidden)]
pub mod logger;
pub mod paginator;
pub mod ping;
pub mod sitemap;

pub use config::{Config, ConfigError, PingConfig, SiteConfig, SitemapConfig};
pub use paginator::{Page, Paginator, PaginatorError};
pub use ping::{Engine, PingError, Pinger};
pub use sitemap::{ChangeFreq, GenericSitemap, MAX_URLS_PER_SITEMAP, Site, Sitemap, UrlEntry};
