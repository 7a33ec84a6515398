//! # Gallery Sync
//!
//! Keeps a hand-authored gallery page in step with the asset files next to it.
//! The page declares four JavaScript arrays; this crate rebuilds their
//! contents from what is actually on disk:
//!
//! ```text
//! assets/images/      →  const galleryImages = [ "assets/images/a.jpg", ... ];
//! assets/pdf/         →  const pdfFiles = [ { name: "...", file: "..." }, ... ];
//! assets/360-images/  →  const panoImages = [ { src: "...", title: "View 1" }, ... ];
//! assets/videos/      →  const videoFiles = [ { src: "...", title: "..." }, ... ];
//! ```
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan     asset dirs  →  Manifest        (sorted, filtered, titled entries)
//! 2. Render   Manifest    →  four Blocks     (declaration text)
//! 3. Sync     Blocks      →  index.html      (splice, write only if changed)
//! ```
//!
//! Diagnostics are returned as data ([`scan::Manifest`], [`sync::SyncReport`])
//! and turned into console lines by [`output`].
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `gallery-sync.toml` loading, merging onto stock defaults, validation |
//! | [`types`] | Asset kinds and entries shared by every stage |
//! | [`naming`] | Title derivation and quote escaping |
//! | [`scan`] | Directory listing, extension filtering, ordering |
//! | [`render`] | Declaration block serialization |
//! | [`splice`] | Marker-based replacement inside the page text |
//! | [`sync`] | Read, splice, conditional write-back |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Text Splicing, Not Parsing
//!
//! The page is hand-authored and may hold arbitrary markup and script around
//! the four arrays. The only contract is the literal `const <name> = [` opener
//! and the next `];`. Anything else in the page is passed through byte for
//! byte. A missing or unterminated declaration is reported and skipped; the
//! other three are still updated.
//!
//! ## Write Only On Change
//!
//! The rewritten text is compared with what was read. An unchanged page is not
//! written, so its modification time stays put and file watchers (live-reload
//! servers, deploy hooks) are not woken by a no-op run.

pub mod config;
pub mod naming;
pub mod output;
pub mod render;
pub mod scan;
pub mod splice;
pub mod sync;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
