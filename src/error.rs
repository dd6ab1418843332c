//! Build error taxonomy.
//!
//! Both variants abort the build. Per-record date parse failures and slug
//! collisions are not errors and never reach this type.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    /// A tabular source is missing or cannot be read at all.
    #[error("cannot read data source `{path}`: {reason}")]
    DataSource { path: PathBuf, reason: String },

    /// A named template body is not in the template store.
    #[error("template `{name}` not found at `{path}`")]
    TemplateNotFound { name: String, path: PathBuf },
}
