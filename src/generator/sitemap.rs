//! Sitemap generation.
//!
//! Generates a sitemap.xml file listing the home page and every detail page.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com</loc>
//!     <priority>1.0</priority>
//!     <changefreq>daily</changefreq>
//!     <lastmod>2025-01-01</lastmod>
//!   </url>
//! </urlset>
//! ```
//!
//! Entry order is fixed: root, products in collection order, posts in
//! collection order. Every `lastmod` is the build date.

use super::write_output;
use crate::{
    build::BuildContext,
    content::ContentKind,
    log,
    utils::{
        date::format_ymd,
        xml::{create_xml_writer, finish_xml, write_end, write_start, write_text_element},
    },
};
use anyhow::Result;

// ============================================================================
// Constants
// ============================================================================

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

// ============================================================================
// Public API
// ============================================================================

/// Build and write the sitemap.
pub fn build_sitemap(ctx: &BuildContext<'_>) -> Result<()> {
    let sitemap = Sitemap::from_build(ctx);
    let path = ctx.config.sitemap_path();
    write_output(&path, &sitemap.into_xml()?)?;

    log!("sitemap"; "{}", path.file_name().unwrap_or_default().to_string_lossy());
    Ok(())
}

// ============================================================================
// Sitemap Implementation
// ============================================================================

/// Sitemap data structure
struct Sitemap {
    urls: Vec<UrlEntry>,
}

/// Single URL entry in the sitemap
struct UrlEntry {
    loc: String,
    priority: &'static str,
    changefreq: &'static str,
    lastmod: String,
}

/// Priority and change frequency of a detail page
const fn hints(kind: ContentKind) -> (&'static str, &'static str) {
    match kind {
        ContentKind::Product => ("0.8", "weekly"),
        ContentKind::Post => ("0.7", "monthly"),
    }
}

impl Sitemap {
    fn from_build(ctx: &BuildContext<'_>) -> Self {
        let lastmod = format_ymd(ctx.today);
        let mut urls = vec![UrlEntry {
            loc: ctx.base_url().to_owned(),
            priority: "1.0",
            changefreq: "daily",
            lastmod: lastmod.clone(),
        }];

        for kind in ContentKind::ALL {
            let (priority, changefreq) = hints(kind);
            urls.extend(ctx.content.collection(kind).records().iter().map(|record| {
                UrlEntry {
                    loc: kind.url(ctx.base_url(), &record.slug()),
                    priority,
                    changefreq,
                    lastmod: lastmod.clone(),
                }
            }));
        }

        Self { urls }
    }

    /// Generate sitemap XML bytes.
    fn into_xml(self) -> Result<Vec<u8>> {
        let mut writer = create_xml_writer()?;

        write_start(&mut writer, "urlset", &[("xmlns", SITEMAP_NS)])?;
        for entry in self.urls {
            write_start(&mut writer, "url", &[])?;
            write_text_element(&mut writer, "loc", &entry.loc)?;
            write_text_element(&mut writer, "priority", entry.priority)?;
            write_text_element(&mut writer, "changefreq", entry.changefreq)?;
            write_text_element(&mut writer, "lastmod", &entry.lastmod)?;
            write_end(&mut writer, "url")?;
        }
        write_end(&mut writer, "urlset")?;

        Ok(finish_xml(writer))
    }
}

// ============================================================================
// Tests
// ============================================================================
