//! Asset directory scanning.
//!
//! Stage 1 of a sync run. Lists each category directory, keeps the files whose
//! extension is on the category's allow-list, and orders them by
//! case-insensitive filename. The result is a [`Manifest`] that the render and
//! sync stages consume.
//!
//! ## Rules
//!
//! - **Missing directory**: not an error. The category is simply empty.
//! - **No recursion**: only direct children are listed.
//! - **Names only**: matching looks at the entry name, nothing else. Hidden
//!   files and symlinks are listed like any other entry.
//! - **Ordering**: case-insensitive, ties broken by the raw name.
//! - **Encoding**: a matching name that is not valid UTF-8 is a [`ScanError`],
//!   so nothing is written. Non-matching names are never decoded.
//!
//! ## Titles
//!
//! Titles are attached here, after filtering and sorting, so a panorama's
//! "View N" reflects its rank among the *matching* files only:
//!
//! ```text
//! assets/360-images/
//! ├── b.png        → View 2
//! ├── a.jpg        → View 1
//! └── notes.txt    (filtered out, takes no number)
//! ```

use crate::config::SyncConfig;
use crate::naming;
use crate::types::{AssetEntry, AssetKind, TitlePolicy};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to list {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("Filename is not valid UTF-8: {}", path.display())]
    NonUtf8Name { path: PathBuf },
}

/// Manifest output from the scan stage.
#[derive(Debug, Serialize)]
pub struct Manifest {
    /// One category per [`AssetKind`], in [`AssetKind::ALL`] order.
    pub categories: Vec<Category>,
}

impl Manifest {
    pub fn category(&self, kind: AssetKind) -> Option<&Category> {
        self.categories.iter().find(|c| c.kind == kind)
    }
}

/// The matching entries of one asset directory.
#[derive(Debug, Serialize)]
pub struct Category {
    pub kind: AssetKind,
    /// Directory as configured (root-relative, forward slashes).
    pub dir: String,
    pub entries: Vec<AssetEntry>,
}

/// Scan every category directory under `root`.
pub fn scan(root: &Path, config: &SyncConfig) -> Result<Manifest, ScanError> {
    let categories = AssetKind::ALL
        .iter()
        .map(|&kind| scan_category(root, config, kind))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Manifest { categories })
}

fn scan_category(root: &Path, config: &SyncConfig, kind: AssetKind) -> Result<Category, ScanError> {
    let category = config.category(kind);
    let filenames = list_assets(&root.join(&category.dir), &category.suffixes())?;
    let prefix = category.dir.trim_end_matches('/');

    let entries = filenames
        .into_iter()
        .enumerate()
        .map(|(i, filename)| {
            let title = match kind.title_policy() {
                TitlePolicy::None => None,
                TitlePolicy::FromFilename => Some(naming::display_title(&filename)),
                TitlePolicy::Positional => Some(naming::positional_title(i + 1)),
            };
            AssetEntry {
                src: format!("{prefix}/{filename}"),
                filename,
                title,
            }
        })
        .collect();

    Ok(Category {
        kind,
        dir: category.dir.clone(),
        entries,
    })
}

/// List the entries of `dir` whose names end with one of `suffixes`.
///
/// `suffixes` must already be lower-cased (see
/// [`CategoryConfig::suffixes`](crate::config::CategoryConfig::suffixes)).
/// Returns an empty list when `dir` does not exist. A matching entry whose
/// name is not valid UTF-8 cannot be written into the page and fails the scan.
pub fn list_assets(dir: &Path, suffixes: &[String]) -> Result<Vec<String>, ScanError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|source| ScanError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        let lower = entry.file_name().to_string_lossy().to_lowercase();
        if !suffixes.iter().any(|s| lower.ends_with(s.as_str())) {
            continue;
        }
        let name = entry
            .file_name()
            .to_str()
            .ok_or_else(|| ScanError::NonUtf8Name {
                path: entry.path().to_path_buf(),
            })?;
        names.push(name.to_string());
    }

    names.sort_by_cached_key(|n| (n.to_lowercase(), n.clone()));
    Ok(names)
}
