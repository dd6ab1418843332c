//! HTML page generation.
//!
//! | Page | Template | Output |
//! |------|----------|--------|
//! | Home | `index` | `index.html` |
//! | Products index | `products_index` | `products/index.html` |
//! | Product detail | `product` | `products/<slug>.html` |
//! | Blog index | `blog_index` | `blog/index.html` |
//! | Post detail | `post` | `blog/<slug>.html` |
//!
//! Pages are written in exactly that order, detail pages in collection
//! order. Two records with the same slug write the same file; the later
//! one wins.

use super::write_output;
use crate::{
    build::BuildContext,
    content::{Collection, ContentKind, ContentRecord},
    log,
    template::{Context, render},
};
use anyhow::Result;
use std::fmt::Write;

/// Products shown on the home page
const FEATURED_PRODUCTS: usize = 4;
/// Posts shown on the home page
const RECENT_POSTS: usize = 3;

/// Render and write every page. Returns the number of pages written.
pub fn build_pages(ctx: &BuildContext<'_>) -> Result<usize> {
    let mut written = 0;

    write_page(ctx, "index", "index.html", &home_context(ctx))?;
    written += 1;

    for kind in ContentKind::ALL {
        let collection = ctx.content.collection(kind);
        let index_path = format!("{}/index.html", kind.section());
        let page = index_context(ctx, collection);
        write_page(ctx, kind.index_template(), &index_path, &page)?;
        written += 1;

        written += build_detail_pages(ctx, collection)?;
    }

    log!("pages"; "{written} pages");
    Ok(written)
}

/// Render one detail page per record, fetching the template body once.
fn build_detail_pages(ctx: &BuildContext<'_>, collection: &Collection) -> Result<usize> {
    if collection.is_empty() {
        return Ok(0);
    }

    let kind = collection.kind();
    let body = ctx.templates.load(kind.detail_template())?;
    for record in collection.records() {
        let slug = record.slug();
        let html = render(&body, &detail_context(ctx, kind, record, &slug));
        write_output(&ctx.output().join(kind.detail_path(&slug)), html.as_bytes())?;
    }

    Ok(collection.len())
}

fn write_page(
    ctx: &BuildContext<'_>,
    template: &str,
    rel_path: &str,
    page: &Context,
) -> Result<()> {
    let html = ctx.templates.render(template, page)?;
    write_output(&ctx.output().join(rel_path), html.as_bytes())
}

// ============================================================================
// Page Contexts
// ============================================================================

fn home_context(ctx: &BuildContext<'_>) -> Context {
    let (products, posts) = (&ctx.content.products, &ctx.content.posts);

    let featured = listing(ctx, ContentKind::Product, products.head(FEATURED_PRODUCTS));
    let recent = listing(ctx, ContentKind::Post, posts.head(RECENT_POSTS));

    Context::from_site(ctx.config)
        .with("featured_products", featured)
        .with("recent_posts", recent)
        .with("product_count", products.len())
        .with("post_count", posts.len())
}

fn index_context(ctx: &BuildContext<'_>, collection: &Collection) -> Context {
    let kind = collection.kind();
    let (list_key, count_key) = match kind {
        ContentKind::Product => ("products", "product_count"),
        ContentKind::Post => ("posts", "post_count"),
    };

    Context::from_site(ctx.config)
        .with(list_key, listing(ctx, kind, collection.records()))
        .with(count_key, collection.len())
}

/// Site record, then the kind's well-known fields (empty when absent),
/// then every column of the record, then `slug` and `url`.
fn detail_context(
    ctx: &BuildContext<'_>,
    kind: ContentKind,
    record: &ContentRecord,
    slug: &str,
) -> Context {
    let mut page = Context::from_site(ctx.config);
    for field in kind.known_fields() {
        page.insert(*field, record.get(field));
    }
    for (key, value) in record.iter() {
        page.insert(key, value);
    }
    page.with("slug", slug).with("url", kind.url(ctx.base_url(), slug))
}

/// `<ul>` of links to detail pages, in collection order.
///
/// Values are inserted verbatim.
fn listing(ctx: &BuildContext<'_>, kind: ContentKind, records: &[ContentRecord]) -> String {
    let mut html = format!("<ul class=\"{}-list\">\n", kind.section());

    for record in records {
        let url = kind.url(ctx.base_url(), &record.slug());
        let _ = write!(html, "  <li><a href=\"{url}\">{}</a>", record.title());

        let detail = match kind {
            ContentKind::Product => record
                .field("price")
                .map(|p| format!("<span class=\"price\">{p}</span>")),
            ContentKind::Post => record
                .field("publish_date")
                .map(|d| format!("<time>{d}</time>")),
        };
        if let Some(detail) = detail {
            let _ = write!(html, " {detail}");
        }
        html.push_str("</li>\n");
    }

    html.push_str("</ul>");
    html
}
