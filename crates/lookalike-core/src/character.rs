// Character classification and Unicode utilities
//
// Everything the table builder needs to decide whether a code point is a
// look-alike for plain Latin letters, plus the advisory display helpers used
// by the reporting tools.

use unicode_normalization::UnicodeNormalization;

/// First code point outside the ASCII range.
pub const FIRST_NON_ASCII: u32 = 0x80;

/// Name reported for code points without a registered Unicode name.
pub const UNKNOWN_NAME: &str = "-";

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Check whether a character is one of the 52 ASCII letters (`A-Z`, `a-z`).
#[inline]
pub fn is_ascii_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Check whether a string is a usable letter expansion: non-empty and made
/// only of ASCII letters.
///
/// Digits, punctuation, whitespace and combining marks all disqualify the
/// string.
pub fn is_letter_expansion(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_ascii_letter)
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Compute the NFKC form of a single character.
pub fn nfkc(c: char) -> String {
    let mut buf = [0u8; 4];
    c.encode_utf8(&mut buf).nfkc().collect()
}

/// Compute the NFKC form of a string.
pub fn nfkc_str(s: &str) -> String {
    s.nfkc().collect()
}

/// Return the ASCII-letter expansion of `c`, if it has one.
///
/// ASCII input never qualifies: a character is only a look-alike when it
/// lies outside 0..=127 and folds to letters under NFKC.
pub fn letter_expansion(c: char) -> Option<String> {
    if (c as u32) < FIRST_NON_ASCII {
        return None;
    }
    let norm = nfkc(c);
    if is_letter_expansion(&norm) {
        Some(norm)
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Display helpers
// ---------------------------------------------------------------------------

/// Return the Unicode display name of `c`, or [`UNKNOWN_NAME`] when the
/// character has no registered name.
pub fn char_name(c: char) -> String {
    match unicode_names2::name(c) {
        Some(name) => name.to_string(),
        None => UNKNOWN_NAME.to_string(),
    }
}

/// Format a character's code point as `U+XXXX` (at least four hex digits).
pub fn code_point_label(c: char) -> String {
    format!("U+{:04X}", c as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_letters() {
        assert!(is_ascii_letter('a'));
        assert!(is_ascii_letter('Z'));
        assert!(!is_ascii_letter('0'));
        assert!(!is_ascii_letter('_'));
        assert!(!is_ascii_letter('\u{00E4}')); // ä
    }

    #[test]
    fn letter_expansion_rules() {
        assert!(is_letter_expansion("fl"));
        assert!(is_letter_expansion("TM"));
        assert!(!is_letter_expansion(""));
        assert!(!is_letter_expansion("1"));
        assert!(!is_letter_expansion("a b"));
        assert!(!is_letter_expansion("e\u{0301}"));
    }

    #[test]
    fn nfkc_folds_compatibility_forms() {
        assert_eq!(nfkc('\u{FB02}'), "fl"); // LATIN SMALL LIGATURE FL
        assert_eq!(nfkc('\u{FF21}'), "A"); // FULLWIDTH LATIN CAPITAL LETTER A
        assert_eq!(nfkc('\u{2162}'), "III"); // ROMAN NUMERAL THREE
        assert_eq!(nfkc('a'), "a");
        assert_eq!(nfkc_str("\u{FB03}x"), "ffix");
    }

    #[test]
    fn letter_expansion_of_characters() {
        assert_eq!(letter_expansion('\u{00AA}').as_deref(), Some("a")); // ª
        assert_eq!(letter_expansion('\u{2122}').as_deref(), Some("TM")); // ™
        assert_eq!(letter_expansion('\u{1D400}').as_deref(), Some("A")); // MATHEMATICAL BOLD CAPITAL A
        assert_eq!(letter_expansion('a'), None);
        assert_eq!(letter_expansion('\u{00E4}'), None); // ä keeps its diaeresis
        assert_eq!(letter_expansion('\u{00B2}'), None); // ² folds to a digit
        assert_eq!(letter_expansion('\u{0391}'), None); // Greek capital alpha stays Greek
    }

    #[test]
    fn names() {
        assert_eq!(char_name('\u{FB02}'), "LATIN SMALL LIGATURE FL");
        assert_eq!(char_name('\u{0378}'), UNKNOWN_NAME); // unassigned
    }

    #[test]
    fn code_point_labels() {
        assert_eq!(code_point_label('\u{00AA}'), "U+00AA");
        assert_eq!(code_point_label('\u{1D400}'), "U+1D400");
    }
}
