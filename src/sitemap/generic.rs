//! Sitemap over a plain item collection.

use super::{ChangeFreq, MAX_URLS_PER_SITEMAP, Sitemap};
use crate::config::Config;
use chrono::NaiveDate;

/// A [`Sitemap`] built from an item collection and a location function,
/// with fixed priority/changefreq across all items.
///
/// Covers the common case where items are already collected and no custom
/// trait implementation is warranted:
///
/// ```ignore
/// let sitemap = GenericSitemap::new(posts, |post: &Post| post.permalink.clone())
///     .with_lastmod(|post| Some(post.updated))
///     .with_changefreq(ChangeFreq::Weekly)
///     .with_priority(0.5);
/// ```
pub struct GenericSitemap<T> {
    items: Vec<T>,
    location: fn(&T) -> String,
    lastmod: Option<fn(&T) -> Option<NaiveDate>>,
    changefreq: Option<ChangeFreq>,
    priority: Option<f32>,
    protocol: String,
    limit: usize,
}

impl<T: Clone> GenericSitemap<T> {
    pub fn new(items: Vec<T>, location: fn(&T) -> String) -> Self {
        Self {
            items,
            location,
            lastmod: None,
            changefreq: None,
            priority: None,
            protocol: "http".to_string(),
            limit: MAX_URLS_PER_SITEMAP,
        }
    }

    /// Construct with protocol and per-file limit taken from config.
    pub fn from_config(config: &Config, items: Vec<T>, location: fn(&T) -> String) -> Self {
        Self::new(items, location)
            .with_protocol(config.sitemap.protocol.clone())
            .with_limit(config.sitemap.limit)
    }

    /// Derive lastmod per item, e.g. from a date field.
    pub fn with_lastmod(mut self, lastmod: fn(&T) -> Option<NaiveDate>) -> Self {
        self.lastmod = Some(lastmod);
        self
    }

    pub fn with_changefreq(mut self, changefreq: ChangeFreq) -> Self {
        self.changefreq = Some(changefreq);
        self
    }

    pub fn with_priority(mut self, priority: f32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = protocol.into();
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

impl<T: Clone> Sitemap for GenericSitemap<T> {
    type Item = T;

    fn items(&self) -> Vec<T> {
        self.items.clone()
    }

    fn location(&self, item: &T) -> String {
        (self.location)(item)
    }

    fn lastmod(&self, item: &T) -> Option<NaiveDate> {
        self.lastmod.and_then(|f| f(item))
    }

    fn changefreq(&self, _item: &T) -> Option<ChangeFreq> {
        self.changefreq
    }

    fn priority(&self, _item: &T) -> Option<f32> {
        self.priority
    }

    fn protocol(&self) -> &str {
        &self.protocol
    }

    fn limit(&self) -> usize {
        self.limit
    }
}
