//! Site initialization module.
//!
//! Creates a starter project: config, one sample record per content kind,
//! the five page templates, and a stylesheet.

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result, bail};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore"];

const PRODUCTS_CSV: &str = "\
title,status,publish_date,price,external_url,description,image,tags
Sample Widget,published,2025-01-01,9.99,https://example.com/buy/sample-widget,A widget to start with,,starter
";

const POSTS_CSV: &str = "\
title,status,publish_date,excerpt,content,author,tags
\"Hello, World!\",published,2025-01-01,Our first post,Welcome to the store.,,news
";

const LAYOUT_HEAD: &str = r#"<!DOCTYPE html>
<html lang="{{ language }}">
<head>
  <meta charset="utf-8">
  <title>{{ title }}</title>
  <link rel="stylesheet" href="{{ base_url }}/assets/style.css">
</head>
<body>
"#;

const LAYOUT_FOOT: &str = "</body>\n</html>\n";

const STYLE_CSS: &str = "\
body { font-family: sans-serif; max-width: 48rem; margin: 0 auto; padding: 1rem; }
.price { font-weight: bold; }
time { color: #666; }
";

/// Page template bodies, keyed by template name
const TEMPLATES: &[(&str, &str)] = &[
    (
        "index",
        "<h1>{{ title }}</h1>\n<p>{{ description }}</p>\n\
         <h2>Featured products</h2>\n{{ featured_products }}\n\
         <h2>Recent posts</h2>\n{{ recent_posts }}\n",
    ),
    (
        "products_index",
        "<h1>Products ({{ product_count }})</h1>\n{{ products }}\n",
    ),
    (
        "product",
        "<h1>{{ title }}</h1>\n<p class=\"price\">{{ price }}</p>\n\
         <p>{{ description }}</p>\n<a href=\"{{ external_url }}\">Buy</a>\n",
    ),
    ("blog_index", "<h1>Blog ({{ post_count }})</h1>\n{{ posts }}\n"),
    (
        "post",
        "<h1>{{ title }}</h1>\n<time>{{ publish_date }}</time>\n\
         <p>{{ excerpt }}</p>\n<div>{{ content }}</div>\n",
    ),
];

/// Create a new site with the default structure
pub fn new_site(config: &SiteConfig, has_name: bool) -> Result<()> {
    let root = &config.root;

    // Without a name the site lands in the current directory, which must be empty
    if !has_name && !is_dir_empty(root)? {
        bail!(
            "Current directory is not empty. Use `storefront init <SITE_NAME>` to create in a subdirectory."
        );
    }

    let files = scaffold(config)?;
    for (path, _) in &files {
        if path.exists() {
            bail!(
                "Path `{}` already exists. Try `storefront init <SITE_NAME>` instead.",
                path.display()
            );
        }
    }

    for (path, content) in &files {
        write_new(path, content)?;
    }
    init_ignored_files(root, &config.build.output)?;

    log!("init"; "created site at {}", root.display());
    Ok(())
}

/// Every file the starter project consists of
fn scaffold(config: &SiteConfig) -> Result<Vec<(PathBuf, String)>> {
    let build = &config.build;
    let config_toml = toml::to_string_pretty(&SiteConfig::default())?;

    let mut files = vec![
        (config.config_path.clone(), config_toml),
        (build.data.join("products.csv"), PRODUCTS_CSV.to_owned()),
        (build.data.join("posts.csv"), POSTS_CSV.to_owned()),
    ];
    files.extend(TEMPLATES.iter().map(|(name, body)| {
        let path = build.templates.join(format!("{name}.html"));
        (path, format!("{LAYOUT_HEAD}{body}{LAYOUT_FOOT}"))
    }));
    files.push((build.assets.join("style.css"), STYLE_CSS.to_owned()));
    Ok(files)
}

/// Check if a directory is completely empty
fn is_dir_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    Ok(fs::read_dir(path)?.next().is_none())
}

fn write_new(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// Write the output directory into ignore files that do not exist yet
fn init_ignored_files(root: &Path, output: &Path) -> Result<()> {
    let output = output.strip_prefix(root).unwrap_or(output);
    let content = format!("/{}\n", output.display());

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        if !path.exists() {
            fs::write(&path, &content)?;
        }
    }

    Ok(())
}
