//! Shared types used by the scan, render, and sync stages.

use serde::Serialize;

/// One of the four watched asset categories.
///
/// Each category owns a fixed declaration name in the gallery page and a
/// labelling policy for its entries. The order of [`AssetKind::ALL`] is the
/// order in which blocks are spliced into the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Images,
    Pdfs,
    Panoramas,
    Videos,
}

/// How an entry's display title is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitlePolicy {
    /// Entries carry no title (gallery images are bare paths).
    None,
    /// `final_report-v2.pdf` → "Final Report V2"
    FromFilename,
    /// "View N" by rank in the filtered listing.
    Positional,
}

impl AssetKind {
    pub const ALL: [AssetKind; 4] = [
        AssetKind::Images,
        AssetKind::Pdfs,
        AssetKind::Panoramas,
        AssetKind::Videos,
    ];

    /// Name of the `const <name> = [ ... ];` declaration in the page.
    pub fn declaration(self) -> &'static str {
        match self {
            AssetKind::Images => "galleryImages",
            AssetKind::Pdfs => "pdfFiles",
            AssetKind::Panoramas => "panoImages",
            AssetKind::Videos => "videoFiles",
        }
    }

    /// Plural noun used in console output ("Found 3 images.").
    pub fn noun(self) -> &'static str {
        match self {
            AssetKind::Images => "images",
            AssetKind::Pdfs => "PDFs",
            AssetKind::Panoramas => "360 images",
            AssetKind::Videos => "videos",
        }
    }

    pub fn title_policy(self) -> TitlePolicy {
        match self {
            AssetKind::Images => TitlePolicy::None,
            AssetKind::Pdfs | AssetKind::Videos => TitlePolicy::FromFilename,
            AssetKind::Panoramas => TitlePolicy::Positional,
        }
    }
}

/// A file discovered in one category directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetEntry {
    /// Raw filename as listed on disk.
    pub filename: String,
    /// Page-relative path: `<category dir>/<filename>`.
    pub src: String,
    /// Display title, per the category's [`TitlePolicy`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}
