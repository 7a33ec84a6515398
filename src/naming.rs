//! Display labels derived from asset filenames.
//!
//! PDFs and videos get a title built from the filename; panoramas get a
//! positional "View N" label instead:
//!
//! - `final_report-v2.pdf` → "Final Report V2"
//! - `drone__flight.mp4` → "Drone Flight"
//! - third panorama in the listing → "View 3"
//!
//! Everything that ends up inside a generated string literal goes through
//! [`escape_quotes`]. Only double quotes are escaped; backslashes and control
//! characters pass through untouched.

/// Strip the final extension from a filename.
///
/// A run of leading dots is part of the name, not an extension separator:
/// - `"report.pdf"` → `"report"`
/// - `"archive.tar.gz"` → `"archive.tar"`
/// - `".hidden"` → `".hidden"`
/// - `"trailing."` → `"trailing"`
pub fn strip_extension(filename: &str) -> &str {
    let leading_dots = filename.len() - filename.trim_start_matches('.').len();
    match filename.rfind('.') {
        Some(dot) if dot > leading_dots => &filename[..dot],
        _ => filename,
    }
}

/// Capitalize the first cased letter of every word, lower-case the rest.
///
/// A word starts at any cased letter that does not directly follow another
/// cased letter, so digits and punctuation also start new words:
/// `"v2go"` → `"V2Go"`, `"o'neil"` → `"O'Neil"`.
///
/// Word-initial letters get their Unicode *titlecase* mapping, which differs
/// from upper case for digraphs and ligatures: `"ǆemal"` → `"ǅemal"`,
/// `"ßa"` → `"Ssa"`, `"ﬁle"` → `"File"`. A capital sigma inside a word
/// becomes `ς` when no cased letter follows it, `σ` otherwise.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_cased = false;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        let cased = is_cased(c);
        if cased && prev_cased {
            if c == 'Σ' {
                let next_cased = chars.peek().is_some_and(|&n| is_cased(n));
                out.push(if next_cased { 'σ' } else { 'ς' });
            } else {
                out.extend(c.to_lowercase());
            }
        } else if cased {
            push_titlecase(&mut out, c);
        } else {
            out.push(c);
        }
        prev_cased = cased;
    }
    out
}

fn is_cased(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase() || is_titlecase_letter(c)
}

/// Letters of general category Lt, which are neither upper nor lower case.
fn is_titlecase_letter(c: char) -> bool {
    matches!(
        c as u32,
        0x01C5 | 0x01C8 | 0x01CB | 0x01F2
            | 0x1F88..=0x1F8F
            | 0x1F98..=0x1F9F
            | 0x1FA8..=0x1FAF
            | 0x1FBC
            | 0x1FCC
            | 0x1FFC
    )
}

fn push_titlecase(out: &mut String, c: char) {
    if let Some(expanded) = multi_char_titlecase(c) {
        out.push_str(expanded);
    } else if let Some(t) = single_char_titlecase(c) {
        out.push(t);
    } else {
        out.extend(c.to_uppercase());
    }
}

/// Titlecase mappings that expand to several characters and differ from the
/// upper-case expansion.
fn multi_char_titlecase(c: char) -> Option<&'static str> {
    let mapped = match c {
        'ß' => "Ss",
        'ﬀ' => "Ff",
        'ﬁ' => "Fi",
        'ﬂ' => "Fl",
        'ﬃ' => "Ffi",
        'ﬄ' => "Ffl",
        'ﬅ' | 'ﬆ' => "St",
        'և' => "Եւ",
        'ﬓ' => "Մն",
        'ﬔ' => "Մե",
        'ﬕ' => "Մի",
        'ﬖ' => "Վն",
        'ﬗ' => "Մխ",
        '\u{1FB2}' => "\u{1FBA}\u{0345}",
        '\u{1FB4}' => "\u{0386}\u{0345}",
        '\u{1FB7}' => "\u{0391}\u{0342}\u{0345}",
        '\u{1FC2}' => "\u{1FCA}\u{0345}",
        '\u{1FC4}' => "\u{0389}\u{0345}",
        '\u{1FC7}' => "\u{0397}\u{0342}\u{0345}",
        '\u{1FF2}' => "\u{1FFA}\u{0345}",
        '\u{1FF4}' => "\u{038F}\u{0345}",
        '\u{1FF7}' => "\u{03A9}\u{0342}\u{0345}",
        _ => return None,
    };
    Some(mapped)
}

/// Single-character titlecase mappings that differ from upper case.
fn single_char_titlecase(c: char) -> Option<char> {
    let code = c as u32;
    let mapped = match code {
        0x01C4..=0x01C6 => 0x01C5,
        0x01C7..=0x01C9 => 0x01C8,
        0x01CA..=0x01CC => 0x01CB,
        0x01F1..=0x01F3 => 0x01F2,
        // Greek with ypogegrammeni: lower → prosgegrammeni form.
        0x1F80..=0x1F87 | 0x1F90..=0x1F97 | 0x1FA0..=0x1FA7 => code + 8,
        0x1FB3 => 0x1FBC,
        0x1FC3 => 0x1FCC,
        0x1FF3 => 0x1FFC,
        0x1F88..=0x1F8F | 0x1F98..=0x1F9F | 0x1FA8..=0x1FAF | 0x1FBC | 0x1FCC | 0x1FFC => code,
        // Georgian Mkhedruli letters are their own titlecase.
        0x10D0..=0x10FA | 0x10FD..=0x10FF => code,
        _ => return None,
    };
    char::from_u32(mapped)
}

/// Derive a display title from a filename.
///
/// Extension removed, `_` and `-` become spaces, whitespace runs collapse to a
/// single space, then [`title_case`].
pub fn display_title(filename: &str) -> String {
    let spaced = strip_extension(filename).replace(['_', '-'], " ");
    let collapsed = spaced.split_whitespace().collect::<Vec<_>>().join(" ");
    title_case(&collapsed)
}

/// Label for the 1-based `position` in a filtered listing.
pub fn positional_title(position: usize) -> String {
    format!("View {position}")
}

/// Backslash-escape double quotes for embedding in a string literal.
pub fn escape_quotes(text: &str) -> String {
    text.replace('"', "\\\"")
}
