//! As-you-type reshaping of a quiz answer into a well-formed reference.
//!
//! Every keystroke runs the whole buffer through [`format_against`]. The
//! engine expands a book initial into the full book name, then folds a run
//! of digits into `chapter:verse-end`, inserting each separator only once
//! the segment before it exactly equals the target's. Digits that disagree
//! with the target are passed through untouched so the player is never
//! silently corrected.
//!
//! [`compute_lock_boundary`] reports how much of the buffer is already
//! confirmed; the edit guard in [`crate::input`] uses it to keep that prefix
//! from being edited in place.

use crate::bible::{parse_target, ParsedTarget};
use crate::types::Mode;

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Case-insensitive `starts_with`, compared one char at a time so that the
/// matched length in chars equals the needle's length in chars.
fn starts_with_ignore_case(haystack: &str, needle: &str) -> bool {
    let mut rest = haystack.chars();
    needle
        .chars()
        .all(|n| rest.next().is_some_and(|h| chars_eq_ignore_case(h, n)))
}

/// Byte offset of the `n`th char, clamped to the end of the string.
fn char_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Autoformat the answer buffer against the reference the quiz expects.
///
/// Returns `raw` unchanged when the quiz is not `active` or when no book can
/// be read from `current_reference`.
pub fn autoformat(raw: &str, current_reference: &str, mode: Mode, active: bool) -> String {
    if !active {
        return raw.to_string();
    }
    format_against(raw, &parse_target(current_reference), mode)
}

/// Autoformat against an already parsed target.
pub fn format_against(raw: &str, target: &ParsedTarget, mode: Mode) -> String {
    if target.is_empty() {
        return raw.to_string();
    }
    let prefix = target.prefix();

    let stripped = raw.trim_start_matches(' ');
    let lead = &raw[..raw.len() - stripped.len()];

    let mut val = raw.to_string();
    if !starts_with_ignore_case(stripped, &prefix) {
        if let Some(locator) = book_shortcut(stripped, target, mode) {
            val = format!("{lead}{prefix}{locator}");
        }
    }

    if !starts_with_ignore_case(&val, &prefix) {
        return val;
    }
    let after = &val[char_offset(&val, prefix.chars().count())..];
    let formatted = format_locator(&prefix, after, target).unwrap_or(val);
    if formatted != raw {
        tracing::debug!(raw, formatted = %formatted, book = %target.book, "autoformatted answer");
    }
    formatted
}

/// Recognize a book typed as its initial (optionally followed directly by
/// locator digits) and return the locator part to keep.
///
/// In initial mode a numbered book also accepts the bare locator digits,
/// e.g. "129" for "2 Corinthians 12:9", provided there are at least two of
/// them and they agree with the target chapter. A lone digit is left alone,
/// since it is more likely a mistyped book numeral.
fn book_shortcut<'a>(stripped: &'a str, target: &ParsedTarget, mode: Mode) -> Option<&'a str> {
    let mut chars = stripped.chars();
    let first = chars.next()?;
    let rest = chars.as_str();
    let book_initial = target.book.chars().next()?;

    if chars_eq_ignore_case(first, book_initial) && rest.bytes().all(|b| b.is_ascii_digit()) {
        return Some(rest);
    }

    let chapter = target.chapter_digits.as_str();
    let agrees_with_chapter = stripped.starts_with(chapter) || chapter.starts_with(stripped);
    (mode.is_initial()
        && target.is_numbered_book()
        && stripped.len() >= 2
        && is_digits(stripped)
        && !chapter.is_empty()
        && agrees_with_chapter)
        .then_some(stripped)
}

/// Reshape the text after the book prefix, or `None` to keep the buffer.
fn format_locator(prefix: &str, after: &str, target: &ParsedTarget) -> Option<String> {
    if !after.contains([' ', '\t']) {
        let digits: String = after.chars().filter(char::is_ascii_digit).collect();
        if !digits.is_empty() && !target.chapter_digits.is_empty() {
            return Some(fold_digits(prefix, &digits, target));
        }
    }

    // Space-separated numbers are read as chapter, verse and end verse.
    let tokens: Vec<&str> = after.split_whitespace().collect();
    if !tokens.iter().all(|t| is_digits(t)) {
        return None;
    }
    match tokens.as_slice() {
        [chapter, verse] => Some(format!("{prefix}{chapter}:{verse}")),
        [chapter, verse, end] => Some(format!("{prefix}{chapter}:{verse}-{end}")),
        _ => None,
    }
}

/// Fold an unpunctuated digit run into `chapter:verse-end` against the target.
fn fold_digits(prefix: &str, digits: &str, target: &ParsedTarget) -> String {
    let chapter = target.chapter_digits.as_str();
    let verse = target.verse_digits.as_str();
    let end = target.end_verse_digits.as_str();

    // CHAPTER
    if digits.len() <= chapter.len() {
        if digits == chapter && !verse.is_empty() {
            return format!("{prefix}{chapter}:");
        }
        return format!("{prefix}{digits}");
    }
    let (typed_chapter, rest) = digits.split_at(chapter.len());
    if typed_chapter != chapter {
        return format!("{prefix}{digits}");
    }
    if verse.is_empty() {
        return format!("{prefix}{chapter}{rest}");
    }

    // COLON, VERSE
    if rest.len() <= verse.len() {
        if rest == verse && !end.is_empty() {
            return format!("{prefix}{chapter}:{verse}-");
        }
        return format!("{prefix}{chapter}:{rest}");
    }
    let (typed_verse, overflow) = rest.split_at(verse.len());
    if typed_verse != verse || end.is_empty() {
        return format!("{prefix}{chapter}:{rest}");
    }

    // HYPHEN, END_VERSE: kept verbatim, including anything past the end verse
    format!("{prefix}{chapter}:{verse}-{overflow}")
}

/// Number of leading chars of `buffer` that are confirmed against the target.
///
/// The book prefix is confirmed as soon as the buffer starts with it; the
/// boundary then extends over the chapter (and its colon) and over the verse
/// once each matches the target exactly. Returns 0 when the buffer does not
/// start with the book prefix. Recomputed from scratch on every call.
pub fn compute_lock_boundary(buffer: &str, target: &ParsedTarget) -> usize {
    if target.is_empty() {
        return 0;
    }
    let prefix = target.prefix();
    if !starts_with_ignore_case(buffer, &prefix) {
        return 0;
    }

    let mut lock = prefix.chars().count();
    let chapter = target.chapter_digits.as_str();
    if !chapter.is_empty() {
        let with_colon = format!("{prefix}{chapter}:");
        let bare = format!("{prefix}{chapter}");
        if starts_with_ignore_case(buffer, &with_colon) {
            lock = lock.max(with_colon.chars().count());
        } else if starts_with_ignore_case(buffer, &bare) {
            lock = lock.max(bare.chars().count());
        }
    }
    let verse = target.verse_digits.as_str();
    if !verse.is_empty() {
        let verse_done = format!("{prefix}{chapter}:{verse}");
        if starts_with_ignore_case(buffer, &verse_done) {
            lock = lock.max(verse_done.chars().count());
        }
    }
    lock
}
