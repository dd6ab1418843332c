//! `[site]` section configuration.
//!
//! The site-wide record merged into every rendered page and used for
//! absolute URLs in the sitemap and rss feed.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[site]` section in storefront.toml.
///
/// # Example
/// ```toml
/// [site]
/// title = "My Store"
/// description = "Handpicked things"
/// base_url = "https://example.com"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteMeta {
    /// Site title, also the rss channel title.
    #[serde(default = "defaults::site::title")]
    #[educe(Default = defaults::site::title())]
    pub title: String,

    /// Site description, also the rss channel description.
    #[serde(default)]
    pub description: String,

    /// Absolute base URL, e.g.: "https://example.com".
    /// Trailing slashes are stripped on load.
    #[serde(default = "defaults::site::base_url")]
    #[educe(Default = defaults::site::base_url())]
    pub base_url: String,

    /// BCP 47 language code, e.g.: "en", "de-DE".
    #[serde(default = "defaults::site::language")]
    #[educe(Default = defaults::site::language())]
    pub language: String,

    /// Copyright notice for page footers.
    #[serde(default)]
    pub copyright: String,
}

impl SiteMeta {
    /// Fixed keys exposed to templates, in declaration order.
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("title", self.title.as_str()),
            ("description", self.description.as_str()),
            ("base_url", self.base_url.as_str()),
            ("language", self.language.as_str()),
            ("copyright", self.copyright.as_str()),
        ]
    }

    /// Strip trailing slashes so derived URLs have exactly one separator.
    pub(super) fn normalize_base_url(&mut self) {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        self.base_url = trimmed.to_owned();
    }
}
