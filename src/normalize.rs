// ABOUTME: Text normalization for exercise descriptions before pattern matching
// ABOUTME: Trims, collapses whitespace, folds typographic glyphs, and lowercases
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Text Normalization
//!
//! Pure cleanup applied before any pattern matching. The original text is
//! always retained separately by the caller: note extraction and
//! human-readable suggestion reasons work on the verbatim input.

/// Normalize an exercise description for pattern matching
///
/// Trims, collapses whitespace runs to a single space, folds curly quotes
/// and en/em dashes to their ASCII forms, and lowercases. Total function;
/// never fails.
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for ch in text.trim().chars() {
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        match fold_glyph(ch) {
            Folded::Char(c) => out.extend(c.to_lowercase()),
            Folded::Ascii(c) => out.push(c),
        }
    }
    out
}

enum Folded {
    /// Unchanged character, still subject to lowercasing
    Char(char),
    /// Replaced by an ASCII equivalent
    Ascii(char),
}

const fn fold_glyph(ch: char) -> Folded {
    match ch {
        '\u{201c}' | '\u{201d}' | '\u{201e}' => Folded::Ascii('"'),
        '\u{2018}' | '\u{2019}' => Folded::Ascii('\''),
        '\u{2013}' | '\u{2014}' => Folded::Ascii('-'),
        other => Folded::Char(other),
    }
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn trims_and_collapses_whitespace() {
        assert_eq!(normalize("  4 sets   x\t8  reps \n"), "4 sets x 8 reps");
    }

    #[test]
    fn folds_typographic_glyphs() {
        assert_eq!(normalize("8\u{2013}12 reps"), "8-12 reps");
        assert_eq!(normalize("\u{201c}tempo\u{201d} work"), "\"tempo\" work");
        assert_eq!(normalize("don\u{2019}t rush"), "don't rush");
    }

    #[test]
    fn lowercases() {
        assert_eq!(normalize("4 Sets X 8 REPS"), "4 sets x 8 reps");
    }

    #[test]
    fn empty_and_blank_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t\n "), "");
    }
}
