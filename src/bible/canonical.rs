//! Canonical forms used to decide whether a guess names the same reference.

// Allow unwrap for compile-time constant regex patterns in lazy_static blocks
#![allow(clippy::unwrap_used)]

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::Mode;

lazy_static! {
    static ref RE_SPACES: Regex = Regex::new(r"\s+").unwrap();
    static ref RE_COLON: Regex = Regex::new(r"\s*:\s*").unwrap();
    static ref RE_SEMICOLON: Regex = Regex::new(r"\s*;\s*").unwrap();
    static ref RE_HYPHEN: Regex = Regex::new(r"\s*-\s*").unwrap();
    /// Optional numeral, then the (already lower-cased) book word.
    static ref RE_LEADING_BOOK: Regex = Regex::new(r"^[1-3]?\s*[a-z]+").unwrap();
}

/// Normalize case, spacing, periods and separator padding.
///
/// "  John 3 : 16 " and "john 3:16" both become "john 3:16". Applying it
/// twice gives the same result as applying it once.
pub fn canonicalize_full(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut out = RE_SPACES.replace_all(&lower, " ").trim().replace('.', "");
    out = RE_COLON.replace_all(&out, ":").into_owned();
    out = RE_SEMICOLON.replace_all(&out, ";").into_owned();
    out = RE_HYPHEN.replace_all(&out, "-").into_owned();
    // Removing periods can expose new edge or doubled whitespace
    RE_SPACES.replace_all(&out, " ").trim().to_string()
}

/// Like [`canonicalize_full`], but the leading book token is cut down to its
/// first character: "1 Corinthians 10:13" becomes "1 10:13", "John 3:16"
/// becomes "j 3:16".
pub fn canonicalize_initial(s: &str) -> String {
    let norm = canonicalize_full(s);
    let Some(m) = RE_LEADING_BOOK.find(&norm) else {
        return norm;
    };
    let rest = &norm[m.end()..];
    m.as_str()
        .trim()
        .chars()
        .next()
        .map_or_else(|| rest.to_string(), |initial| format!("{initial}{rest}"))
}

/// Compare a guess with the actual reference under the given mode.
///
/// Exact equality of canonical forms; there is no partial credit.
pub fn references_match(guess: &str, actual: &str, mode: Mode) -> bool {
    let canonicalize: fn(&str) -> String = match mode {
        Mode::Initial => canonicalize_initial,
        Mode::Full => canonicalize_full,
    };
    let g = canonicalize(guess);
    let a = canonicalize(actual);
    let matched = g == a;
    tracing::debug!(guess = %g, actual = %a, %mode, matched, "compared references");
    matched
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_full_normalizes_spacing_and_case() {
        assert_eq!(canonicalize_full("  John   3 : 16 "), "john 3:16");
        assert_eq!(canonicalize_full("John 3:16 - 18"), "john 3:16-18");
        assert_eq!(canonicalize_full("Rom. 8 ; 28"), "rom 8;28");
        assert_eq!(canonicalize_full("1\tCor.\n10:13"), "1 cor 10:13");
    }

    #[test]
    fn test_full_is_idempotent() {
        for r in [
            "John 3:16",
            " . John 3:16 .",
            "1  Corinthians 10 : 13",
            "Psalm 103:8 - 11",
            "a . : . b",
            "",
            "   ",
        ] {
            let once = canonicalize_full(r);
            assert_eq!(canonicalize_full(&once), once, "input {r:?}");
        }
    }

    #[test]
    fn test_initial_reduces_book() {
        assert_eq!(canonicalize_initial("John 3:16"), "j 3:16");
        assert_eq!(canonicalize_initial("1 Corinthians 10:13"), "1 10:13");
        assert_eq!(canonicalize_initial("Song of Solomon 2:4"), "s of solomon 2:4");
    }

    #[test]
    fn test_initial_without_book_is_full_form() {
        assert_eq!(canonicalize_initial("1 10:13"), "1 10:13");
        assert_eq!(canonicalize_initial("3:16"), "3:16");
        assert_eq!(canonicalize_initial(""), "");
    }

    #[test]
    fn test_references_match_initial() {
        assert!(references_match("j 3:16", "John 3:16", Mode::Initial));
        assert!(references_match("1 10:13", "1 Corinthians 10:13", Mode::Initial));
        assert!(references_match("John 3:16", "John 3:16", Mode::Initial));
        assert!(!references_match("j 3:17", "John 3:16", Mode::Initial));
        assert!(!references_match("2 10:13", "1 Corinthians 10:13", Mode::Initial));
    }

    #[test]
    fn test_references_match_full() {
        assert!(references_match("john 3:16", "John 3:16", Mode::Full));
        assert!(references_match("JOHN 3 : 16", "John 3:16", Mode::Full));
        assert!(!references_match("j 3:16", "John 3:16", Mode::Full));
        assert!(!references_match("Jn 3:16", "John 3:16", Mode::Full));
    }

    #[test]
    fn test_empty_guess_never_matches() {
        assert!(!references_match("", "John 3:16", Mode::Initial));
        assert!(!references_match("   ", "John 3:16", Mode::Full));
    }
}
