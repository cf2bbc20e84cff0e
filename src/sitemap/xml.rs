//! XML rendering for sitemap documents.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!   </url>
//! </urlset>
//! ```

use super::entry::{UrlEntry, format_priority};
use std::borrow::Cow;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Render a `<urlset>` document from per-URL entries.
pub fn render_urlset(entries: &[UrlEntry]) -> String {
    let mut xml = String::with_capacity(4096);

    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"");
    xml.push_str(SITEMAP_NS);
    xml.push_str("\">\n");

    for entry in entries {
        xml.push_str("  <url>\n    <loc>");
        xml.push_str(&escape_xml(&entry.location));
        xml.push_str("</loc>\n");
        if let Some(lastmod) = entry.lastmod {
            xml.push_str("    <lastmod>");
            xml.push_str(&lastmod.format("%Y-%m-%d").to_string());
            xml.push_str("</lastmod>\n");
        }
        if let Some(changefreq) = entry.changefreq {
            xml.push_str("    <changefreq>");
            xml.push_str(changefreq.as_str());
            xml.push_str("</changefreq>\n");
        }
        if let Some(priority) = entry.priority {
            xml.push_str("    <priority>");
            xml.push_str(&format_priority(priority));
            xml.push_str("</priority>\n");
        }
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Render a `<sitemapindex>` document listing per-page sitemap URLs.
pub fn render_index(locations: &[String]) -> String {
    let mut xml = String::with_capacity(1024);

    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<sitemapindex xmlns=\"");
    xml.push_str(SITEMAP_NS);
    xml.push_str("\">\n");

    for location in locations {
        xml.push_str("  <sitemap>\n    <loc>");
        xml.push_str(&escape_xml(location));
        xml.push_str("</loc>\n  </sitemap>\n");
    }

    xml.push_str("</sitemapindex>\n");
    xml
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sitemap::ChangeFreq;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("<test>"), "&lt;test&gt;");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_urlset_empty() {
        let xml = render_urlset(&[]);

        assert!(xml.contains(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#)));
        assert!(xml.contains("</urlset>"));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_urlset_full_entry() {
        let entry = UrlEntry {
            location: "https://example.com/posts/hello/".to_string(),
            lastmod: Some(date(2025, 1, 2)),
            changefreq: Some(ChangeFreq::Weekly),
            priority: Some(0.5),
        };
        let xml = render_urlset(&[entry]);

        assert!(xml.contains("<loc>https://example.com/posts/hello/</loc>"));
        assert!(xml.contains("<lastmod>2025-01-02</lastmod>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<priority>0.5</priority>"));
    }

    #[test]
    fn test_urlset_optional_elements_omitted() {
        let xml = render_urlset(&[UrlEntry::new("https://example.com/")]);

        assert!(xml.contains("<loc>https://example.com/</loc>"));
        assert!(!xml.contains("<lastmod>"));
        assert!(!xml.contains("<changefreq>"));
        assert!(!xml.contains("<priority>"));
    }

    #[test]
    fn test_urlset_multiple_entries() {
        let entries = vec![
            UrlEntry::new("https://example.com/"),
            UrlEntry::new("https://example.com/about/"),
            UrlEntry::new("https://example.com/posts/hello/"),
        ];
        let xml = render_urlset(&entries);

        assert_eq!(xml.matches("<url>").count(), 3);
        assert_eq!(xml.matches("</url>").count(), 3);
    }

    #[test]
    fn test_urlset_escapes_special_chars() {
        let xml = render_urlset(&[UrlEntry::new("https://example.com/search?q=a&b=c")]);
        assert!(xml.contains("<loc>https://example.com/search?q=a&amp;b=c</loc>"));
    }

    #[test]
    fn test_urlset_xml_structure() {
        let xml = render_urlset(&[UrlEntry::new("https://example.com/")]);

        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(lines[0], r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        assert!(lines[1].starts_with("<urlset"));
        assert_eq!(lines.last().unwrap().trim(), "</urlset>");
    }

    #[test]
    fn test_index() {
        let xml = render_index(&[
            "https://example.com/sitemap-1.xml".to_string(),
            "https://example.com/sitemap-2.xml".to_string(),
        ]);

        assert!(xml.contains(&format!(r#"<sitemapindex xmlns="{SITEMAP_NS}">"#)));
        assert!(xml.contains("<loc>https://example.com/sitemap-1.xml</loc>"));
        assert!(xml.contains("<loc>https://example.com/sitemap-2.xml</loc>"));
        assert_eq!(xml.matches("<sitemap>").count(), 2);
    }

    #[test]
    fn test_index_empty() {
        let xml = render_index(&[]);
        assert!(xml.contains("</sitemapindex>"));
        assert!(!xml.contains("<sitemap>"));
    }
}
