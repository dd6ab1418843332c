//! Site configuration management for `storefront.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                        |
//! |-------------|------------------------------------------------|
//! | `[site]`    | Site record (title, description, base url)     |
//! | `[build]`   | Source/output paths, sitemap and rss settings  |
//! | `[extra]`   | User-defined values merged into every page     |
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "My Store"
//! description = "Handpicked things"
//! base_url = "https://example.com"
//!
//! [build]
//! output = "_site"
//!
//! [build.rss]
//! limit = 10
//!
//! [extra]
//! analytics_id = "UA-12345"
//! ```

mod build;
pub mod defaults;
mod error;
mod site;

pub use error::ConfigError;

use build::BuildConfig;
use site::SiteMeta;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing storefront.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the project root (set after loading)
    #[serde(skip)]
    pub root: PathBuf,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site record shared by every page
    #[serde(default)]
    pub site: SiteMeta,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: BTreeMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let mut config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        config.site.normalize_base_url();
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Update configuration with CLI arguments.
    ///
    /// Applies overrides, then resolves every path against the project root.
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli.root.clone().unwrap_or_else(|| PathBuf::from("./"));
        let root = match &cli.command {
            Commands::Init { name: Some(name) } => root.join(name),
            _ => root,
        };

        if let Commands::Build { build_args } = &cli.command {
            Self::update_option(&mut self.build.output, build_args.output.as_ref());
            if let Some(base_url) = &build_args.base_url {
                self.site.base_url = base_url.clone();
                self.site.normalize_base_url();
            }
        }

        self.config_path = normalize_path(&root.join(&cli.config));
        self.update_path_with_root(&root);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve all paths relative to the root directory and normalize to absolute paths
    pub fn update_path_with_root(&mut self, root: &Path) {
        let root = normalize_path(root);

        self.build.data = normalize_path(&root.join(&self.build.data));
        self.build.templates = normalize_path(&root.join(&self.build.templates));
        self.build.assets = normalize_path(&root.join(&self.build.assets));
        self.build.output = normalize_path(&root.join(&self.build.output));
        self.root = root;
    }

    /// Absolute path of the sitemap file.
    pub fn sitemap_path(&self) -> PathBuf {
        self.build.output.join(&self.build.sitemap.path)
    }

    /// Absolute path of the rss file.
    pub fn rss_path(&self) -> PathBuf {
        self.build.output.join(&self.build.rss.path)
    }

    /// Validate configuration before any output is touched
    pub fn validate(&self) -> Result<()> {
        let base_url = &self.site.base_url;
        if base_url.is_empty() {
            bail!(ConfigError::Validation("[site.base_url] is empty".into()));
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            bail!(ConfigError::Validation(
                "[site.base_url] must start with http:// or https://".into()
            ));
        }

        // The output directory is wiped on every build
        let output = &self.build.output;
        if !self.root.as_os_str().is_empty() && self.root.starts_with(output) {
            bail!(ConfigError::Validation(format!(
                "[build.output] `{}` must not contain the project root",
                output.display()
            )));
        }
        let sources = [
            ("data", &self.build.data),
            ("templates", &self.build.templates),
            ("assets", &self.build.assets),
        ];
        for (key, source) in sources {
            if source.starts_with(output) {
                bail!(ConfigError::Validation(format!(
                    "[build.output] `{}` must not contain [build.{key}] `{}`",
                    output.display(),
                    source.display()
                )));
            }
        }

        Ok(())
    }
}

/// Normalize a path to absolute, using canonicalize if the path exists
fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        // For non-existent paths, manually make them absolute
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(path))
                .unwrap_or_else(|_| path.to_path_buf())
        }
    })
}
