//! Sync configuration.
//!
//! Handles loading, validating, and merging `gallery-sync.toml`. Stock
//! defaults reproduce the conventional site layout; a config file in the root
//! directory overrides just the keys it names.
//!
//! ## Default Layout
//!
//! ```text
//! site/
//! ├── gallery-sync.toml        # Optional overrides
//! ├── index.html               # Gallery page holding the four declarations
//! └── assets/
//!     ├── images/              # → galleryImages
//!     ├── pdf/                 # → pdfFiles
//!     ├── 360-images/          # → panoImages
//!     └── videos/              # → videoFiles
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! document = "index.html"
//!
//! [images]
//! dir = "assets/images"
//! extensions = ["jpg", "jpeg", "png", "gif", "webp", "bmp"]
//!
//! [pdfs]
//! dir = "assets/pdf"
//! extensions = ["pdf"]
//!
//! [panoramas]
//! dir = "assets/360-images"
//! extensions = ["jpg", "jpeg", "png", "gif", "webp", "bmp"]
//!
//! [videos]
//! dir = "assets/videos"
//! extensions = ["mp4", "webm", "ogg"]
//! ```
//!
//! Declaration names are not configurable: they are the contract with the page.
//! Unknown keys are rejected to catch typos early.

use crate::types::AssetKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the optional config file in the root directory.
pub const CONFIG_FILENAME: &str = "gallery-sync.toml";

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];
const PDF_EXTENSIONS: &[&str] = &["pdf"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "ogg"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Sync configuration loaded from `gallery-sync.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyncConfig {
    /// Gallery page to rewrite, relative to the root directory.
    pub document: String,
    pub images: CategoryConfig,
    pub pdfs: CategoryConfig,
    pub panoramas: CategoryConfig,
    pub videos: CategoryConfig,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            document: "index.html".to_string(),
            images: CategoryConfig::new("assets/images", IMAGE_EXTENSIONS),
            pdfs: CategoryConfig::new("assets/pdf", PDF_EXTENSIONS),
            panoramas: CategoryConfig::new("assets/360-images", IMAGE_EXTENSIONS),
            videos: CategoryConfig::new("assets/videos", VIDEO_EXTENSIONS),
        }
    }
}

impl SyncConfig {
    /// Settings for one asset category.
    pub fn category(&self, kind: AssetKind) -> &CategoryConfig {
        match kind {
            AssetKind::Images => &self.images,
            AssetKind::Pdfs => &self.pdfs,
            AssetKind::Panoramas => &self.panoramas,
            AssetKind::Videos => &self.videos,
        }
    }

    /// Absolute (or root-relative) path of the gallery page.
    pub fn document_path(&self, root: &Path) -> PathBuf {
        root.join(&self.document)
    }

    /// Validate that every path and extension list is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.document.trim().is_empty() {
            return Err(ConfigError::Validation("document must not be empty".into()));
        }
        for kind in AssetKind::ALL {
            let section = section_name(kind);
            let category = self.category(kind);
            if category.dir.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{section}.dir must not be empty"
                )));
            }
            if category.extensions.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{section}.extensions must not be empty"
                )));
            }
            if category
                .extensions
                .iter()
                .any(|e| e.trim_start_matches('.').is_empty())
            {
                return Err(ConfigError::Validation(format!(
                    "{section}.extensions must not contain empty entries"
                )));
            }
        }
        Ok(())
    }
}

/// TOML section holding a category's settings.
fn section_name(kind: AssetKind) -> &'static str {
    match kind {
        AssetKind::Images => "images",
        AssetKind::Pdfs => "pdfs",
        AssetKind::Panoramas => "panoramas",
        AssetKind::Videos => "videos",
    }
}

/// Directory and extension filter for one asset category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryConfig {
    /// Directory relative to the root. Also used verbatim as the path prefix
    /// of generated `src` values, so use forward slashes.
    pub dir: String,
    /// Accepted extensions, matched case-insensitively. A leading dot is optional.
    pub extensions: Vec<String>,
}

impl CategoryConfig {
    fn new(dir: &str, extensions: &[&str]) -> Self {
        Self {
            dir: dir.to_string(),
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Lower-cased `.ext` suffixes for matching against filenames.
    pub fn suffixes(&self) -> Vec<String> {
        self.extensions
            .iter()
            .map(|e| format!(".{}", e.trim_start_matches('.').to_lowercase()))
            .collect()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SyncConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely, so an
///   `extensions` list is replaced, never appended to.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `gallery-sync.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = root.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SyncConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SyncConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config for a root directory, falling back to stock defaults.
pub fn load_config(root: &Path) -> Result<SyncConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(root)?)
}

/// Returns a fully-commented stock `gallery-sync.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# gallery-sync configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Paths are relative to the directory
# holding this file. Unknown keys will cause an error.

# Gallery page containing the galleryImages, pdfFiles, panoImages and
# videoFiles declarations.
document = "index.html"

# ---------------------------------------------------------------------------
# Gallery images -> const galleryImages = [ "assets/images/a.jpg", ... ];
# ---------------------------------------------------------------------------
[images]
dir = "assets/images"
extensions = ["jpg", "jpeg", "png", "gif", "webp", "bmp"]

# ---------------------------------------------------------------------------
# PDFs -> const pdfFiles = [ { name: "Title", file: "a.pdf" }, ... ];
# ---------------------------------------------------------------------------
[pdfs]
dir = "assets/pdf"
extensions = ["pdf"]

# ---------------------------------------------------------------------------
# 360 images -> const panoImages = [ { src: "...", title: "View 1" }, ... ];
# ---------------------------------------------------------------------------
[panoramas]
dir = "assets/360-images"
extensions = ["jpg", "jpeg", "png", "gif", "webp", "bmp"]

# ---------------------------------------------------------------------------
# Videos -> const videoFiles = [ { src: "...", title: "Title" }, ... ];
# ---------------------------------------------------------------------------
[videos]
dir = "assets/videos"
extensions = ["mp4", "webm", "ogg"]
"##
}
