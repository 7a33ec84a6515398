//! Serialization of scanned categories into declaration blocks.
//!
//! Each category becomes one `const` declaration whose entries are indented by
//! four spaces and separated by `,\n`:
//!
//! ```text
//! const galleryImages = [
//!     "assets/images/a.jpg",
//!     "assets/images/b.png"
//! ];
//! const pdfFiles = [
//!     { name: "Final Report V2", file: "final_report-v2.pdf" }
//! ];
//! const panoImages = [
//!     { src: "assets/360-images/a.jpg", title: "View 1" }
//! ];
//! const videoFiles = [
//!     { src: "assets/videos/intro.mp4", title: "Intro" }
//! ];
//! ```
//!
//! An empty category renders as `const <name> = [\n\n];`.

use crate::naming::escape_quotes;
use crate::scan::{Category, Manifest};
use crate::types::{AssetEntry, AssetKind};

/// A rendered declaration, ready to splice into the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub kind: AssetKind,
    pub text: String,
}

/// Render one block per category, in manifest order.
pub fn render_blocks(manifest: &Manifest) -> Vec<Block> {
    manifest.categories.iter().map(render_category).collect()
}

pub fn render_category(category: &Category) -> Block {
    Block {
        kind: category.kind,
        text: render_block(category.kind, &category.entries),
    }
}

/// Render the full `const <name> = [ ... ];` text for `entries`.
pub fn render_block(kind: AssetKind, entries: &[AssetEntry]) -> String {
    let body = entries
        .iter()
        .map(|e| render_entry(kind, e))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("const {} = [\n{}\n];", kind.declaration(), body)
}

fn render_entry(kind: AssetKind, entry: &AssetEntry) -> String {
    let title = escape_quotes(entry.title.as_deref().unwrap_or_default());
    match kind {
        AssetKind::Images => format!("    \"{}\"", escape_quotes(&entry.src)),
        AssetKind::Pdfs => format!(
            "    {{ name: \"{}\", file: \"{}\" }}",
            title,
            escape_quotes(&entry.filename)
        ),
        AssetKind::Panoramas | AssetKind::Videos => format!(
            "    {{ src: \"{}\", title: \"{}\" }}",
            escape_quotes(&entry.src),
            title
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(dir: &str, filename: &str, title: Option<&str>) -> AssetEntry {
        AssetEntry {
            filename: filename.to_string(),
            src: format!("{dir}/{filename}"),
            title: title.map(String::from),
        }
    }

    #[test]
    fn empty_category_is_valid_empty_array() {
        assert_eq!(
            render_block(AssetKind::Videos, &[]),
            "const videoFiles = [\n\n];"
        );
    }

    #[test]
    fn images_render_as_quoted_paths() {
        let entries = vec![
            entry("assets/images", "a.jpg", None),
            entry("assets/images", "b.png", None),
        ];
        assert_eq!(
            render_block(AssetKind::Images, &entries),
            "const galleryImages = [\n    \"assets/images/a.jpg\",\n    \"assets/images/b.png\"\n];"
        );
    }

    #[test]
    fn pdfs_render_name_and_raw_file() {
        let entries = vec![entry(
            "assets/pdf",
            "final_report-v2.pdf",
            Some("Final Report V2"),
        )];
        assert_eq!(
            render_block(AssetKind::Pdfs, &entries),
            "const pdfFiles = [\n    { name: \"Final Report V2\", file: \"final_report-v2.pdf\" }\n];"
        );
    }

    #[test]
    fn panoramas_render_src_and_title() {
        let entries = vec![
            entry("assets/360-images", "a.jpg", Some("View 1")),
            entry("assets/360-images", "b.png", Some("View 2")),
        ];
        let expected = "const panoImages = [\n    \
            { src: \"assets/360-images/a.jpg\", title: \"View 1\" },\n    \
            { src: \"assets/360-images/b.png\", title: \"View 2\" }\n];";
        assert_eq!(render_block(AssetKind::Panoramas, &entries), expected);
    }

    #[test]
    fn videos_render_src_and_title() {
        let entries = vec![entry("assets/videos", "drone_flight.mp4", Some("Drone Flight"))];
        assert_eq!(
            render_block(AssetKind::Videos, &entries),
            "const videoFiles = [\n    { src: \"assets/videos/drone_flight.mp4\", title: \"Drone Flight\" }\n];"
        );
    }

    #[test]
    fn quotes_escaped_in_filename_and_title() {
        let entries = vec![entry("assets/pdf", "the \"big\" one.pdf", Some("The \"Big\" One"))];
        assert_eq!(
            render_block(AssetKind::Pdfs, &entries),
            "const pdfFiles = [\n    { name: \"The \\\"Big\\\" One\", file: \"the \\\"big\\\" one.pdf\" }\n];"
        );
    }

    #[test]
    fn backslashes_pass_through_unescaped() {
        let entries = vec![entry("assets/images", "a\\b.jpg", None)];
        assert_eq!(
            render_block(AssetKind::Images, &entries),
            "const galleryImages = [\n    \"assets/images/a\\b.jpg\"\n];"
        );
    }

    #[test]
    fn render_blocks_follows_manifest_order() {
        let manifest = Manifest {
            categories: AssetKind::ALL
                .iter()
                .map(|&kind| Category {
                    kind,
                    dir: String::new(),
                    entries: Vec::new(),
                })
                .collect(),
        };
        let kinds: Vec<AssetKind> = render_blocks(&manifest).iter().map(|b| b.kind).collect();
        assert_eq!(kinds, AssetKind::ALL.to_vec());
    }
}
