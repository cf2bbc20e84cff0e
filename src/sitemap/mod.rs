//! Sitemap formatting over caller-supplied items.
//!
//! The [`Sitemap`] trait describes how to derive per-URL records from a
//! collection of domain items: each item yields a location (an absolute
//! path), and optionally a last-modified date, a change frequency and a
//! crawl priority. Entries are built page by page, with page size capped
//! at the protocol limit.

mod entry;
mod generic;
mod xml;

pub use entry::{ChangeFreq, UrlEntry};
pub use generic::GenericSitemap;
pub use xml::{render_index, render_urlset};

use crate::paginator::{Paginator, PaginatorError};
use chrono::NaiveDate;

/// Maximum URLs per sitemap file. This limit is defined by the
/// sitemaps.org index documentation.
pub const MAX_URLS_PER_SITEMAP: usize = 50_000;

/// The host that absolute URLs are built against.
///
/// Current-site lookup and domain resolution belong to the caller; this
/// crate only needs the resolved domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    pub domain: String,
}

impl Site {
    /// Trailing slashes are trimmed so joining with an absolute path cannot
    /// produce doubled separators.
    pub fn new(domain: impl Into<String>) -> Self {
        let domain = domain.into();
        Self {
            domain: domain.trim_end_matches('/').to_string(),
        }
    }
}

/// Derives sitemap entries from a collection of domain items.
///
/// Only [`items`](Self::items) and [`location`](Self::location) are
/// required; the remaining lookups default to absent, matching optional
/// elements in the sitemaps.org protocol.
pub trait Sitemap {
    type Item;

    /// The items this sitemap covers. Recomputed per call; cache on the
    /// implementor if the collection is expensive to produce.
    fn items(&self) -> Vec<Self::Item>;

    /// Absolute path of an item on the site, e.g. `/posts/hello/`.
    fn location(&self, item: &Self::Item) -> String;

    /// Last modification date of an item.
    fn lastmod(&self, _item: &Self::Item) -> Option<NaiveDate> {
        None
    }

    /// How frequently an item is expected to change.
    fn changefreq(&self, _item: &Self::Item) -> Option<ChangeFreq> {
        None
    }

    /// Crawl priority of an item, `0.0..=1.0`.
    fn priority(&self, _item: &Self::Item) -> Option<f32> {
        None
    }

    /// URL scheme for absolute locations.
    fn protocol(&self) -> &str {
        "http"
    }

    /// URLs per sitemap file. Values above the protocol limit are clamped.
    fn limit(&self) -> usize {
        MAX_URLS_PER_SITEMAP
    }

    /// Paginate [`items`](Self::items) at the effective page size.
    fn paginator(&self) -> Paginator<Self::Item> {
        Paginator::new(self.items(), self.limit().clamp(1, MAX_URLS_PER_SITEMAP))
    }

    /// Build the entry for a single item.
    fn entry(&self, item: &Self::Item, site: &Site) -> UrlEntry {
        UrlEntry {
            location: format!(
                "{}://{}{}",
                self.protocol(),
                site.domain,
                self.location(item)
            ),
            lastmod: self.lastmod(item),
            changefreq: self.changefreq(item),
            priority: self.priority(item),
        }
    }

    /// Build the entries for one page (1-based) of this sitemap.
    ///
    /// Convenience for single-page use; multi-page callers should build
    /// one [`paginator`](Self::paginator) and map [`entry`](Self::entry)
    /// over each page to avoid recomputing the item collection.
    fn entries(&self, page: usize, site: &Site) -> Result<Vec<UrlEntry>, PaginatorError> {
        let paginator = self.paginator();
        let page = paginator.page(page)?;
        Ok(page
            .object_list
            .iter()
            .map(|item| self.entry(item, site))
            .collect())
    }
}
