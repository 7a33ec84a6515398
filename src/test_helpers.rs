//! Shared test utilities for the gallery-sync test suite.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! touch(tmp.path(), "assets/videos/new_clip.mp4");
//!
//! let blocks = render_for(tmp.path(), &SyncConfig::default());
//! assert_eq!(blocks.len(), 4);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::config::SyncConfig;
use crate::render::{self, Block};
use crate::scan;

#[path = "../tests/support/mod.rs"]
mod support;

pub use support::make_read_only;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/site/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/site");
    support::copy_tree(&fixtures, tmp.path()).unwrap();
    tmp
}

/// Create a placeholder file at `rel` under `root`, creating parent dirs.
pub fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, "fake asset").unwrap();
}

// =========================================================================
// Page helpers
// =========================================================================

/// A page with all four declarations holding stale entries.
pub fn stale_page() -> String {
    [
        "<script>",
        "const galleryImages = [",
        "    \"assets/images/stale.jpg\"",
        "];",
        "const pdfFiles = [",
        "    { name: \"Stale\", file: \"stale.pdf\" }",
        "];",
        "const panoImages = [",
        "];",
        "const videoFiles = [",
        "    { src: \"assets/videos/stale.mp4\", title: \"Stale\" }",
        "];",
        "</script>",
    ]
    .join("\n")
}

pub fn read_document(root: &Path) -> String {
    std::fs::read_to_string(SyncConfig::default().document_path(root)).unwrap()
}

pub fn write_document(root: &Path, content: &str) {
    std::fs::write(SyncConfig::default().document_path(root), content).unwrap();
}

/// Scan `root` and render its four blocks.
pub fn render_for(root: &Path, config: &SyncConfig) -> Vec<Block> {
    let manifest = scan::scan(root, config).unwrap();
    render::render_blocks(&manifest)
}
