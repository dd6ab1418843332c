//! Literal placeholder templates.
//!
//! A template body is plain text containing zero or more `{{ key }}` tokens
//! (exactly one space of padding on each side). Rendering replaces each token
//! whose key is in the [`Context`] with the value's string form and leaves
//! every other token verbatim. There are no conditionals, loops, or escaping.
//!
//! Placeholders are found in a single left-to-right pass; substituted text is
//! never scanned again.

mod value;

pub use value::Value;

use crate::{config::SiteConfig, error::SiteError};
use anyhow::{Context as _, Result, bail};
use regex::{Captures, Regex};
use std::{
    collections::BTreeMap,
    fs,
    io::ErrorKind,
    path::PathBuf,
    sync::LazyLock,
};

/// `{{ key }}` with exactly one space on each side of the key
static RE_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{ ([^{}]+?) \}\}").expect("static regex is valid"));

// ============================================================================
// Render Context
// ============================================================================

/// Per-page key → value mapping.
///
/// Built from the site record first; page keys inserted afterwards shadow
/// site keys of the same name.
#[derive(Debug, Clone, Default)]
pub struct Context {
    values: BTreeMap<String, Value>,
}

impl Context {
    /// Context holding only the site record: `[extra]`, then the fixed `[site]` keys.
    pub fn from_site(config: &SiteConfig) -> Self {
        let mut ctx = Self::default();
        for (key, value) in &config.extra {
            ctx.insert(key.as_str(), value);
        }
        for (key, value) in config.site.fields() {
            ctx.insert(key, value);
        }
        ctx
    }

    /// Insert or replace a key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Builder-style [`Context::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Context {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut ctx = Self::default();
        for (key, value) in iter {
            ctx.insert(key, value);
        }
        ctx
    }
}

/// Substitute every known placeholder in `body`.
pub fn render(body: &str, ctx: &Context) -> String {
    RE_PLACEHOLDER
        .replace_all(body, |caps: &Captures<'_>| match ctx.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_owned(),
        })
        .into_owned()
}

// ============================================================================
// Template Store
// ============================================================================

/// Template bodies stored as `<dir>/<name>.html`.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    dir: PathBuf,
}

impl TemplateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Read the body of template `name`.
    pub fn load(&self, name: &str) -> Result<String> {
        let path = self.dir.join(format!("{name}.html"));
        match fs::read_to_string(&path) {
            Ok(body) => Ok(body),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                bail!(SiteError::TemplateNotFound {
                    name: name.to_owned(),
                    path,
                })
            }
            Err(err) => Err(err)
                .with_context(|| format!("Failed to read template {}", path.display())),
        }
    }

    /// Load template `name` and render it with `ctx`.
    pub fn render(&self, name: &str, ctx: &Context) -> Result<String> {
        Ok(render(&self.load(name)?, ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_value() {
        let ctx = Context::default().with("price", 9.99);
        assert_eq!(render("Price: {{ price }}", &ctx), "Price: 9.99");
    }

    #[test]
    fn test_render_unmatched_left_verbatim() {
        assert_eq!(render("{{ missing }}", &Context::default()), "{{ missing }}");
    }

    #[test]
    fn test_render_requires_single_space_padding() {
        let ctx = Context::default().with("title", "Widget");
        assert_eq!(render("{{title}}", &ctx), "{{title}}");
        assert_eq!(render("{{  title  }}", &ctx), "{{  title  }}");
        assert_eq!(render("{{ title }}", &ctx), "Widget");
    }

    #[test]
    fn test_render_repeated_placeholders() {
        let ctx = Context::default().with("name", "A");
        assert_eq!(render("{{ name }}-{{ name }}", &ctx), "A-A");
    }

    #[test]
    fn test_render_substituted_text_not_rescanned() {
        let ctx: Context = [("a", "{{ b }}"), ("b", "B")].into_iter().collect();
        assert_eq!(render("{{ a }} {{ b }}", &ctx), "{{ b }} B");
    }

    #[test]
    fn test_render_no_escaping() {
        let ctx = Context::default().with("body", "<b>bold & brave</b>");
        assert_eq!(render("{{ body }}", &ctx), "<b>bold & brave</b>");
    }

    #[test]
    fn test_render_nested_braces() {
        let ctx = Context::default().with("x", "1");
        assert_eq!(render("{{ {{ x }}", &ctx), "{{ 1");
    }

    #[test]
    fn test_page_context_overrides_site() {
        let mut config = SiteConfig::default();
        config.site.title = "Site".into();
        let ctx = Context::from_site(&config).with("title", "Widget");

        assert_eq!(render("{{ title }}", &ctx), "Widget");
    }

    #[test]
    fn test_site_keys_available() {
        let mut config = SiteConfig::default();
        config.site.title = "Site".into();
        config.site.base_url = "https://example.com".into();
        let ctx = Context::from_site(&config);

        assert_eq!(render("{{ title }} @ {{ base_url }}", &ctx), "Site @ https://example.com");
    }

    #[test]
    fn test_extra_values_merged() {
        let config = SiteConfig::from_str(
            r#"
            [extra]
            analytics_id = "UA-1"
            columns = 3
        "#,
        )
        .unwrap();
        let ctx = Context::from_site(&config);

        assert_eq!(render("{{ analytics_id }}/{{ columns }}", &ctx), "UA-1/3");
    }

    #[test]
    fn test_fixed_site_keys_win_over_extra() {
        let config = SiteConfig::from_str(
            r#"
            [site]
            title = "Fixed"

            [extra]
            title = "Extra"
        "#,
        )
        .unwrap();
        let ctx = Context::from_site(&config);

        assert_eq!(render("{{ title }}", &ctx), "Fixed");
    }

    #[test]
    fn test_store_load_and_render() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("product.html"), "<h1>{{ title }}</h1>").unwrap();
        let store = TemplateStore::new(dir.path());
        let ctx = Context::default().with("title", "Widget");

        assert_eq!(store.render("product", &ctx).unwrap(), "<h1>Widget</h1>");
    }

    #[test]
    fn test_store_template_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = TemplateStore::new(dir.path());
        let err = store.load("post").unwrap_err();

        match err.downcast_ref::<SiteError>() {
            Some(SiteError::TemplateNotFound { name, path }) => {
                assert_eq!(name, "post");
                assert!(path.ends_with("post.html"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_store_unreadable_template_is_not_missing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("post.html"), b"<h1>\xff</h1>").unwrap();
        let store = TemplateStore::new(dir.path());
        let err = store.load("post").unwrap_err();

        assert!(err.downcast_ref::<SiteError>().is_none());
        assert!(format!("{err:#}").contains("post.html"));
    }
}
