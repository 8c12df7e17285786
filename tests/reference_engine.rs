//! End-to-end checks of the public reference engine API.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use verseref::{
    autoformat, canonicalize_full, compute_lock_boundary, extract_book_name, parse_target,
    references_match, testament_of, Mode, Testament,
};

/// Feed `keys` one at a time, autoformatting after each, like the answer field does.
fn type_keys(keys: &str, reference: &str, mode: Mode) -> Vec<String> {
    let mut buffer = String::new();
    keys.chars()
        .map(|c| {
            buffer.push(c);
            buffer = autoformat(&buffer, reference, mode, true);
            buffer.clone()
        })
        .collect()
}

#[test]
fn guesses_match_across_modes() {
    assert!(references_match("j 3:16", "John 3:16", Mode::Initial));
    assert!(references_match("john 3:16", "John 3:16", Mode::Full));
    assert!(references_match("1 10:13", "1 Corinthians 10:13", Mode::Initial));
}

#[test]
fn book_names_are_extracted() {
    assert_eq!(extract_book_name("1 Corinthians 10:13"), "1 Corinthians");
    assert_eq!(extract_book_name("John 3:16"), "John");
}

#[test]
fn autoformat_reshapes_answers() {
    assert_eq!(autoformat("j", "John 3:16", Mode::Initial, true), "John ");
    assert_eq!(autoformat("John 3 16", "John 3:16", Mode::Full, true), "John 3:16");
    assert_eq!(autoformat("John 3 16 18", "John 3:16-18", Mode::Full, true), "John 3:16-18");
    assert_eq!(autoformat("1", "1 Corinthians 10:13", Mode::Initial, true), "1 Corinthians ");
    assert_eq!(autoformat("p103", "Psalm 103:8", Mode::Initial, true), "Psalm 103:");
    assert_eq!(autoformat("p102", "Psalm 103:8", Mode::Initial, true), "Psalm 102");
    assert_eq!(autoformat("p1038", "Psalm 103:8-11", Mode::Initial, true), "Psalm 103:8-");
    assert_eq!(autoformat("129", "2 Corinthians 12:9", Mode::Initial, true), "2 Corinthians 12:9");
}

#[test]
fn inactive_quiz_is_identity() {
    for raw in ["", "j", "p1038", "John 3 16", "  x  "] {
        for mode in Mode::all() {
            assert_eq!(autoformat(raw, "Psalm 103:8-11", *mode, false), raw);
        }
    }
}

#[test]
fn testament_lookup() {
    assert_eq!(testament_of("Romans 8:28"), Testament::New);
}

proptest! {
    #[test]
    fn canonical_form_is_idempotent(r in "[ \t\nA-Za-z0-9.:;-]{0,24}") {
        let once = canonicalize_full(&r);
        prop_assert_eq!(canonicalize_full(&once), once);
    }

    #[test]
    fn every_reference_matches_itself(r in "[ A-Za-z0-9.:;-]{0,24}") {
        prop_assert!(references_match(&r, &r, Mode::Full));
        prop_assert!(references_match(&r, &r, Mode::Initial));
    }
}

#[test]
fn typing_a_range_keystroke_by_keystroke() {
    let steps = type_keys("p103811", "Psalm 103:8-11", Mode::Initial);
    assert_eq!(
        steps,
        [
            "Psalm ",
            "Psalm 1",
            "Psalm 10",
            "Psalm 103:",
            "Psalm 103:8-",
            "Psalm 103:8-1",
            "Psalm 103:8-11",
        ]
    );
    assert!(references_match(steps.last().unwrap(), "Psalm 103:8-11", Mode::Initial));
}

#[test]
fn typing_a_numbered_book() {
    let steps = type_keys("2129", "2 Corinthians 12:9", Mode::Initial);
    assert_eq!(
        steps,
        ["2 Corinthians ", "2 Corinthians 1", "2 Corinthians 12:", "2 Corinthians 12:9"]
    );
}

#[test]
fn typing_a_wrong_chapter_is_not_corrected() {
    let steps = type_keys("j4", "John 3:16", Mode::Initial);
    assert_eq!(steps, ["John ", "John 4"]);
    assert!(!references_match("John 4", "John 3:16", Mode::Initial));
}

#[test]
fn lock_boundary_follows_confirmed_segments() {
    let target = parse_target("John 3:16-18");
    let boundaries: Vec<usize> = ["j", "John ", "John 3", "John 3:", "John 3:1", "John 3:16-"]
        .iter()
        .map(|b| compute_lock_boundary(b, &target))
        .collect();
    assert_eq!(boundaries, [0, 5, 6, 7, 7, 9]);
}
