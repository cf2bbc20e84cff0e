//! Per-URL sitemap records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Change frequency hint per the sitemaps.org protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `<url>` record. Computed on demand, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlEntry {
    /// Absolute URL of the page.
    pub location: String,
    /// Last modification date, rendered as a W3C date (`YYYY-MM-DD`).
    pub lastmod: Option<NaiveDate>,
    pub changefreq: Option<ChangeFreq>,
    /// Relative crawl priority, clamped to `0.0..=1.0` when rendered.
    pub priority: Option<f32>,
}

impl UrlEntry {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            lastmod: None,
            changefreq: None,
            priority: None,
        }
    }
}

/// Format a priority value for XML output, trimming trailing zeros.
pub(crate) fn format_priority(priority: f32) -> String {
    let clamped = priority.clamp(0.0, 1.0);
    let formatted = format!("{clamped:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
