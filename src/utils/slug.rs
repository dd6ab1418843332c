//! Title slugification.
//!
//! Converts free-text titles to URL- and filename-safe identifiers.
//! Distinct titles may map to the same slug; callers do not detect this.

use regex::Regex;
use std::sync::LazyLock;

/// Any run of characters outside `[a-z0-9]`
static RE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("static regex is valid"));

/// Convert a title to a slug.
///
/// Lower-cases the input, collapses every run of non `[a-z0-9]` characters
/// into a single `-`, then trims leading and trailing `-`.
///
/// | Title | Slug |
/// |-------|------|
/// | `Hello, World!` | `hello-world` |
/// | `  A -- B  ` | `a-b` |
/// | `Café Crème` | `caf-cr-me` |
pub fn slugify(title: &str) -> String {
    let lower = title.to_lowercase();
    RE_SEPARATOR
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_owned()
}
