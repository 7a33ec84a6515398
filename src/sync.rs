//! Conditional write-back of the gallery page.
//!
//! Stage 2 of a sync run. Reads the page, splices every rendered block into it,
//! and writes it back only when the text actually changed. A no-op run leaves
//! the file (and its modification time) alone, so watchers downstream are not
//! triggered.
//!
//! The new text is assembled completely in memory before the single write, so
//! a failure never leaves a half-updated page behind.

use crate::render::Block;
use crate::splice::{self, SpliceWarning};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Error reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error writing {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Whether a changed page is written or only reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncMode {
    #[default]
    Write,
    DryRun,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The page changed and was written.
    Updated,
    /// The page would change, but this was a dry run.
    WouldUpdate,
    /// Every block already matched; nothing written.
    UpToDate,
}

/// Result of one sync against the page.
#[derive(Debug)]
pub struct SyncReport {
    pub document: PathBuf,
    /// Declarations that were missing or unterminated, in splice order.
    pub warnings: Vec<SpliceWarning>,
    pub outcome: SyncOutcome,
}

/// Splice `blocks` into `document` and write it back if anything changed.
pub fn update_document(
    document: &Path,
    blocks: &[Block],
    mode: SyncMode,
) -> Result<SyncReport, SyncError> {
    let original = fs::read_to_string(document).map_err(|source| SyncError::Read {
        path: document.to_path_buf(),
        source,
    })?;

    let (updated, warnings) = splice::apply_blocks(&original, blocks);

    let outcome = if updated == original {
        SyncOutcome::UpToDate
    } else if mode == SyncMode::DryRun {
        SyncOutcome::WouldUpdate
    } else {
        fs::write(document, &updated).map_err(|source| SyncError::Write {
            path: document.to_path_buf(),
            source,
        })?;
        SyncOutcome::Updated
    };

    Ok(SyncReport {
        document: document.to_path_buf(),
        warnings,
        outcome,
    })
}
