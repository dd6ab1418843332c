//! Content kinds and the URL layout derived from them.
//!
//! Every page, listing, sitemap entry, and feed item computes its path
//! through [`ContentKind::detail_path`] or [`ContentKind::url`], so links
//! always resolve to a generated file.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Product,
    Post,
}

impl ContentKind {
    /// All kinds, in build order.
    pub const ALL: [ContentKind; 2] = [ContentKind::Product, ContentKind::Post];

    /// File stem of the tabular source, e.g. `products` → `products.csv`.
    pub const fn source_stem(self) -> &'static str {
        match self {
            Self::Product => "products",
            Self::Post => "posts",
        }
    }

    /// Output directory for index and detail pages.
    pub const fn section(self) -> &'static str {
        match self {
            Self::Product => "products",
            Self::Post => "blog",
        }
    }

    /// Template rendering one record.
    pub const fn detail_template(self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Post => "post",
        }
    }

    /// Template rendering the full collection.
    pub const fn index_template(self) -> &'static str {
        match self {
            Self::Product => "products_index",
            Self::Post => "blog_index",
        }
    }

    /// Fields every record of this kind exposes to templates, empty when absent.
    pub const fn known_fields(self) -> &'static [&'static str] {
        match self {
            Self::Product => &[
                "title",
                "status",
                "publish_date",
                "price",
                "external_url",
                "tags",
                "description",
            ],
            Self::Post => &["title", "status", "publish_date", "excerpt", "tags"],
        }
    }

    /// Detail page path relative to the output root: `<section>/<slug>.html`.
    pub fn detail_path(self, slug: &str) -> String {
        format!("{}/{slug}.html", self.section())
    }

    /// Absolute detail page URL: `<base_url>/<section>/<slug>.html`.
    pub fn url(self, base_url: &str, slug: &str) -> String {
        format!("{base_url}/{}", self.detail_path(slug))
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source_stem())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_path() {
        assert_eq!(ContentKind::Product.detail_path("blue-widget"), "products/blue-widget.html");
        assert_eq!(ContentKind::Post.detail_path("hello"), "blog/hello.html");
    }

    #[test]
    fn test_url() {
        assert_eq!(
            ContentKind::Post.url("https://example.com", "hello"),
            "https://example.com/blog/hello.html"
        );
    }

    #[test]
    fn test_templates() {
        assert_eq!(ContentKind::Product.detail_template(), "product");
        assert_eq!(ContentKind::Product.index_template(), "products_index");
        assert_eq!(ContentKind::Post.detail_template(), "post");
        assert_eq!(ContentKind::Post.index_template(), "blog_index");
    }

    #[test]
    fn test_display() {
        assert_eq!(ContentKind::Product.to_string(), "products");
        assert_eq!(ContentKind::Post.to_string(), "posts");
    }
}
