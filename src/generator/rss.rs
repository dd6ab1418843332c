//! rss feed generation.
//!
//! One channel carrying the site title, description, and link, followed by
//! the newest posts (up to `[build.rss].limit`, default 10) in collection
//! order. `pubDate` is the post's raw `publish_date` cell, not reformatted.

use super::write_output;
use crate::{
    build::BuildContext,
    content::{ContentKind, ContentRecord},
    log,
    utils::xml::{XmlWriter, create_xml_writer, finish_xml, write_end, write_start, write_text_element},
};
use anyhow::Result;

// ============================================================================
// Public API
// ============================================================================

/// Build and write the rss feed.
pub fn build_rss(ctx: &BuildContext<'_>) -> Result<()> {
    let feed = RssFeed::from_build(ctx, ctx.config.build.rss.limit);
    let path = ctx.config.rss_path();
    write_output(&path, &feed.into_xml()?)?;

    log!("rss"; "{} ({} items)", path.file_name().unwrap_or_default().to_string_lossy(), feed.posts.len());
    Ok(())
}

// ============================================================================
// RssFeed Implementation
// ============================================================================

/// rss feed builder
struct RssFeed<'a> {
    title: &'a str,
    description: &'a str,
    base_url: &'a str,
    posts: &'a [ContentRecord],
}

impl<'a> RssFeed<'a> {
    fn from_build(ctx: &'a BuildContext<'_>, limit: usize) -> Self {
        let site = &ctx.config.site;
        Self {
            title: &site.title,
            description: &site.description,
            base_url: ctx.base_url(),
            posts: ctx.content.posts.head(limit),
        }
    }

    /// Generate rss xml bytes
    fn into_xml(&self) -> Result<Vec<u8>> {
        let mut writer = create_xml_writer()?;

        write_start(&mut writer, "rss", &[("version", "2.0")])?;
        write_start(&mut writer, "channel", &[])?;
        write_text_element(&mut writer, "title", self.title)?;
        write_text_element(&mut writer, "description", self.description)?;
        write_text_element(&mut writer, "link", self.base_url)?;
        for post in self.posts {
            self.write_item(&mut writer, post)?;
        }
        write_end(&mut writer, "channel")?;
        write_end(&mut writer, "rss")?;

        Ok(finish_xml(writer))
    }

    fn write_item(&self, writer: &mut XmlWriter, post: &ContentRecord) -> Result<()> {
        let link = ContentKind::Post.url(self.base_url, &post.slug());

        write_start(writer, "item", &[])?;
        write_text_element(writer, "title", post.title())?;
        write_text_element(writer, "description", post.get("excerpt"))?;
        write_text_element(writer, "link", &link)?;
        write_text_element(writer, "pubDate", post.publish_date())?;
        write_end(writer, "item")
    }
}
