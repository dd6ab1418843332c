//! Static asset copying.
//!
//! Mirrors every file under the asset directory into `<output>/assets`,
//! keeping relative paths. Files the OS considers junk are skipped.

use crate::log;
use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// Files to ignore during the copy
const IGNORED_FILES: &[&str] = &[".DS_Store", "Thumbs.db"];

/// Copy the asset tree at `src` into `dest`.
///
/// A missing `src` is not an error.
pub fn copy_assets(src: &Path, dest: &Path) -> Result<()> {
    if !src.is_dir() {
        log!("assets"; "no asset directory at {}, skipped", src.display());
        return Ok(());
    }

    let files = collect_files(src);
    for file in &files {
        let rel_path = file.strip_prefix(src)?;
        let target = dest.join(rel_path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::copy(file, &target)
            .with_context(|| format!("Failed to copy asset {}", rel_path.display()))?;
    }

    log!("assets"; "{} files", files.len());
    Ok(())
}

/// Collect all files in a directory recursively, in a stable order.
fn collect_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .map(walkdir::DirEntry::into_path)
        .collect()
}
