//! Sitemap file output.
//!
//! Renders a [`Sitemap`] to disk: one `<urlset>` file when everything fits
//! in a single page, otherwise one numbered file per page plus a
//! `<sitemapindex>` at the configured path.

use crate::config::Config;
use crate::log;
use crate::sitemap::{Site, Sitemap, UrlEntry, render_index, render_urlset};
use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Render and write all sitemap files for `sitemap` under `output_dir`.
///
/// Returns the paths written, in page order with the index last. A no-op
/// returning no paths when sitemap generation is disabled.
pub fn write_sitemaps<S: Sitemap>(
    config: &Config,
    sitemap: &S,
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    if !config.sitemap.enable {
        return Ok(Vec::new());
    }

    let site = Site::new(config.site.domain.clone());

    // Paginate once; recomputing items per page is wasteful for large maps
    let paginator = sitemap.paginator();
    let num_pages = paginator.num_pages();

    let index_path = output_dir.join(&config.sitemap.path);
    if let Some(parent) = index_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let page_entries = |page: usize| -> Result<Vec<UrlEntry>> {
        Ok(paginator
            .page(page)?
            .object_list
            .iter()
            .map(|item| sitemap.entry(item, &site))
            .collect())
    };

    let mut written = Vec::new();

    if num_pages == 1 {
        let entries = page_entries(1)?;
        write_xml(&index_path, &render_urlset(&entries))?;
        written.push(index_path);
        return Ok(written);
    }

    let mut locations = Vec::with_capacity(num_pages);
    for page in 1..=num_pages {
        let entries = page_entries(page)?;
        let file_name = numbered_file_name(&config.sitemap.path, page);
        let path = match config.sitemap.path.parent() {
            Some(parent) => output_dir.join(parent).join(&file_name),
            None => output_dir.join(&file_name),
        };
        write_xml(&path, &render_urlset(&entries))?;

        locations.push(format!(
            "{}://{}/{}",
            sitemap.protocol(),
            site.domain,
            relative_url(&config.sitemap.path, &file_name)
        ));
        written.push(path);
    }

    write_xml(&index_path, &render_index(&locations))?;
    written.push(index_path);
    Ok(written)
}

/// Write one XML document, logging the file name.
fn write_xml(path: &Path, xml: &str) -> Result<()> {
    fs::write(path, xml)
        .with_context(|| format!("Failed to write sitemap to {}", path.display()))?;

    log!("sitemap"; "{}", path.file_name().unwrap_or_default().to_string_lossy());
    Ok(())
}

/// Per-page file name: `sitemap.xml` becomes `sitemap-2.xml` for page 2.
fn numbered_file_name(path: &Path, page: usize) -> String {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sitemap".to_string());
    match path.extension() {
        Some(ext) => format!("{stem}-{page}.{}", ext.to_string_lossy()),
        None => format!("{stem}-{page}"),
    }
}

/// URL path of a per-page file, keeping the configured directory prefix.
fn relative_url(configured_path: &Path, file_name: &str) -> String {
    match configured_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            format!("{}/{file_name}", parent.to_string_lossy().replace('\\', "/"))
        }
        _ => file_name.to_string(),
    }
}
