//! CLI output formatting.
//!
//! Every stage has a `format_*` function returning `Vec<String>` and a
//! `print_*` wrapper that writes the lines to stdout. Format functions are
//! pure, so the exact console text is covered by unit tests.
//!
//! # Output Format
//!
//! ## Sync
//!
//! ```text
//! Scanning assets...
//! Found 3 images.
//! Found 2 PDFs.
//! Found 2 360 images.
//! Found 0 videos.
//! Warning: Could not find declaration 'videoFiles' in index.html.
//! Successfully updated index.html!
//! ```
//!
//! ## Scan
//!
//! Information-first: entries lead with their position and title, the file on
//! disk follows as an indented `Source:` line. Untitled entries (gallery
//! images) show the filename directly.
//!
//! ```text
//! Images (2 files)
//!     Source: assets/images/
//!     001 Beach.PNG
//!     002 sunset.jpg
//!
//! PDFs (1 file)
//!     Source: assets/pdf/
//!     001 Final Report V2
//!         Source: final_report-v2.pdf
//! ```

use crate::scan::{Category, Manifest};
use crate::sync::{SyncError, SyncOutcome, SyncReport};
use crate::types::AssetKind;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn heading(kind: AssetKind) -> &'static str {
    match kind {
        AssetKind::Images => "Images",
        AssetKind::Pdfs => "PDFs",
        AssetKind::Panoramas => "360 Images",
        AssetKind::Videos => "Videos",
    }
}

fn file_count(n: usize) -> String {
    if n == 1 {
        "1 file".to_string()
    } else {
        format!("{n} files")
    }
}

/// Short name of the page for messages (`index.html`, not the full path).
fn document_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// ============================================================================
// Sync
// ============================================================================

/// Progress lines for a completed scan: one count per category.
pub fn format_scan_summary(manifest: &Manifest) -> Vec<String> {
    let mut lines = vec!["Scanning assets...".to_string()];
    for category in &manifest.categories {
        lines.push(format!(
            "Found {} {}.",
            category.entries.len(),
            category.kind.noun()
        ));
    }
    lines
}

pub fn print_scan_summary(manifest: &Manifest) {
    for line in format_scan_summary(manifest) {
        println!("{}", line);
    }
}

/// Warning lines plus the final status line of a sync.
pub fn format_sync_output(report: &SyncReport) -> Vec<String> {
    let name = document_name(&report.document);
    let mut lines: Vec<String> = report
        .warnings
        .iter()
        .map(|w| format!("Warning: {} in {}.", w, name))
        .collect();

    lines.push(match report.outcome {
        SyncOutcome::Updated => format!("Successfully updated {}!", name),
        SyncOutcome::WouldUpdate => format!("{} would be updated (dry run).", name),
        SyncOutcome::UpToDate => format!("{} is already up to date.", name),
    });
    lines
}

pub fn print_sync_output(report: &SyncReport) {
    for line in format_sync_output(report) {
        println!("{}", line);
    }
}

pub fn format_sync_error(err: &SyncError) -> String {
    err.to_string()
}

pub fn print_sync_error(err: &SyncError) {
    println!("{}", format_sync_error(err));
}

// ============================================================================
// Scan listing
// ============================================================================

fn format_category(category: &Category) -> Vec<String> {
    let mut lines = vec![
        format!(
            "{} ({})",
            heading(category.kind),
            file_count(category.entries.len())
        ),
        format!("{}Source: {}/", indent(1), category.dir.trim_end_matches('/')),
    ];

    for (i, entry) in category.entries.iter().enumerate() {
        match &entry.title {
            Some(title) => {
                lines.push(format!("{}{} {}", indent(1), format_index(i + 1), title));
                lines.push(format!("{}Source: {}", indent(2), entry.filename));
            }
            None => {
                lines.push(format!(
                    "{}{} {}",
                    indent(1),
                    format_index(i + 1),
                    entry.filename
                ));
            }
        }
    }
    lines
}

/// Format the `scan` command's listing of every category.
pub fn format_scan_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, category) in manifest.categories.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.extend(format_category(category));
    }
    lines
}

pub fn print_scan_output(manifest: &Manifest) {
    for line in format_scan_output(manifest) {
        println!("{}", line);
    }
}
