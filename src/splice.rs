//! Textual replacement of declarations inside the gallery page.
//!
//! The page is never parsed. A declaration is located by two literal markers:
//! the first `const <name> = [` in the document, and the first `];` at or
//! after it. Everything from the start of the first marker through the end of
//! the second is replaced by the rendered block.
//!
//! Because the search is purely textual, a `];` inside a string value ahead of
//! the real closing bracket ends the match early. The tail of the old
//! declaration is left behind in that case.

use crate::render::Block;
use thiserror::Error;

const END_MARKER: &str = "];";

/// A declaration that could not be replaced. The document is left untouched
/// for that declaration; other declarations are still processed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpliceWarning {
    #[error("Could not find declaration '{0}'")]
    MissingDeclaration(String),
    #[error("Could not find closing '];' for '{0}'")]
    MissingTerminator(String),
}

/// The `const <name> = [` marker that opens a declaration.
pub fn start_marker(name: &str) -> String {
    format!("const {name} = [")
}

/// Replace the declaration `name` in `text` with `block`.
pub fn replace_declaration(text: &str, name: &str, block: &str) -> Result<String, SpliceWarning> {
    let start = text
        .find(&start_marker(name))
        .ok_or_else(|| SpliceWarning::MissingDeclaration(name.to_string()))?;
    let end = text[start..]
        .find(END_MARKER)
        .map(|offset| start + offset + END_MARKER.len())
        .ok_or_else(|| SpliceWarning::MissingTerminator(name.to_string()))?;

    let mut out = String::with_capacity(text.len() - (end - start) + block.len());
    out.push_str(&text[..start]);
    out.push_str(block);
    out.push_str(&text[end..]);
    Ok(out)
}

/// Apply `blocks` in order, each against the output of the previous pass.
///
/// Returns the final text and one warning per block that could not be placed.
pub fn apply_blocks(text: &str, blocks: &[Block]) -> (String, Vec<SpliceWarning>) {
    let mut current = text.to_string();
    let mut warnings = Vec::new();
    for block in blocks {
        match replace_declaration(&current, block.kind.declaration(), &block.text) {
            Ok(updated) => current = updated,
            Err(warning) => warnings.push(warning),
        }
    }
    (current, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AssetKind;

    const PAGE: &str = "<script>\nconst galleryImages = [\n    \"old.jpg\"\n];\nconst pdfFiles = [];\n</script>";

    #[test]
    fn replaces_span_inclusive_of_markers() {
        let out = replace_declaration(PAGE, "galleryImages", "const galleryImages = [\n\n];").unwrap();
        assert_eq!(
            out,
            "<script>\nconst galleryImages = [\n\n];\nconst pdfFiles = [];\n</script>"
        );
    }

    #[test]
    fn surrounding_text_untouched() {
        let out = replace_declaration(PAGE, "pdfFiles", "const pdfFiles = [X];").unwrap();
        assert!(out.starts_with("<script>\nconst galleryImages = [\n    \"old.jpg\"\n];\n"));
        assert!(out.ends_with("const pdfFiles = [X];\n</script>"));
    }

    #[test]
    fn missing_declaration_warns() {
        assert_eq!(
            replace_declaration(PAGE, "videoFiles", "x"),
            Err(SpliceWarning::MissingDeclaration("videoFiles".into()))
        );
    }

    #[test]
    fn missing_terminator_warns() {
        let page = "const videoFiles = [\n  { src: \"a.mp4\" }\n]\n";
        assert_eq!(
            replace_declaration(page, "videoFiles", "x"),
            Err(SpliceWarning::MissingTerminator("videoFiles".into()))
        );
    }

    #[test]
    fn terminator_before_start_is_ignored() {
        let page = "var a = [];\nconst panoImages = [\n]";
        assert!(matches!(
            replace_declaration(page, "panoImages", "x"),
            Err(SpliceWarning::MissingTerminator(_))
        ));
    }

    #[test]
    fn only_first_occurrence_replaced() {
        let page = "const pdfFiles = [1];\nconst pdfFiles = [2];";
        let out = replace_declaration(page, "pdfFiles", "NEW").unwrap();
        assert_eq!(out, "NEW\nconst pdfFiles = [2];");
    }

    #[test]
    fn embedded_terminator_matches_early() {
        let page = "const pdfFiles = [\n  { name: \"a];b\" }\n];\nrest";
        let out = replace_declaration(page, "pdfFiles", "NEW").unwrap();
        assert_eq!(out, "NEWb\" }\n];\nrest");
    }

    #[test]
    fn marker_requires_exact_spacing() {
        let page = "const pdfFiles=[];";
        assert!(matches!(
            replace_declaration(page, "pdfFiles", "x"),
            Err(SpliceWarning::MissingDeclaration(_))
        ));
    }

    #[test]
    fn apply_blocks_continues_past_missing_declaration() {
        let blocks = vec![
            Block {
                kind: AssetKind::Images,
                text: "const galleryImages = [NEW];".into(),
            },
            Block {
                kind: AssetKind::Videos,
                text: "const videoFiles = [NEW];".into(),
            },
            Block {
                kind: AssetKind::Pdfs,
                text: "const pdfFiles = [NEW];".into(),
            },
        ];
        let (out, warnings) = apply_blocks(PAGE, &blocks);
        assert_eq!(
            out,
            "<script>\nconst galleryImages = [NEW];\nconst pdfFiles = [NEW];\n</script>"
        );
        assert_eq!(
            warnings,
            vec![SpliceWarning::MissingDeclaration("videoFiles".into())]
        );
    }

    #[test]
    fn warning_messages_name_declaration() {
        assert_eq!(
            SpliceWarning::MissingDeclaration("panoImages".into()).to_string(),
            "Could not find declaration 'panoImages'"
        );
        assert_eq!(
            SpliceWarning::MissingTerminator("panoImages".into()).to_string(),
            "Could not find closing '];' for 'panoImages'"
        );
    }
}
