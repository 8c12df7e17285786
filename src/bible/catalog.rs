//! Canonical book names and their testaments.

// Allow unwrap for compile-time constant regex patterns in lazy_static blocks
#![allow(clippy::unwrap_used)]

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::Testament;

/// One row of the book catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookEntry {
    /// Canonical English name, e.g. "1 Corinthians".
    pub name: &'static str,
    /// Testament the book belongs to.
    pub testament: Testament,
}

const fn ot(name: &'static str) -> BookEntry {
    BookEntry { name, testament: Testament::Old }
}

const fn nt(name: &'static str) -> BookEntry {
    BookEntry { name, testament: Testament::New }
}

/// The 66 books in canonical order. Psalms is listed under both spellings.
static BOOKS: &[BookEntry] = &[
    ot("Genesis"),
    ot("Exodus"),
    ot("Leviticus"),
    ot("Numbers"),
    ot("Deuteronomy"),
    ot("Joshua"),
    ot("Judges"),
    ot("Ruth"),
    ot("1 Samuel"),
    ot("2 Samuel"),
    ot("1 Kings"),
    ot("2 Kings"),
    ot("1 Chronicles"),
    ot("2 Chronicles"),
    ot("Ezra"),
    ot("Nehemiah"),
    ot("Esther"),
    ot("Job"),
    ot("Psalm"),
    ot("Psalms"),
    ot("Proverbs"),
    ot("Ecclesiastes"),
    ot("Song of Solomon"),
    ot("Isaiah"),
    ot("Jeremiah"),
    ot("Lamentations"),
    ot("Ezekiel"),
    ot("Daniel"),
    ot("Hosea"),
    ot("Joel"),
    ot("Amos"),
    ot("Obadiah"),
    ot("Jonah"),
    ot("Micah"),
    ot("Nahum"),
    ot("Habakkuk"),
    ot("Zephaniah"),
    ot("Haggai"),
    ot("Zechariah"),
    ot("Malachi"),
    nt("Matthew"),
    nt("Mark"),
    nt("Luke"),
    nt("John"),
    nt("Acts"),
    nt("Romans"),
    nt("1 Corinthians"),
    nt("2 Corinthians"),
    nt("Galatians"),
    nt("Ephesians"),
    nt("Philippians"),
    nt("Colossians"),
    nt("1 Thessalonians"),
    nt("2 Thessalonians"),
    nt("1 Timothy"),
    nt("2 Timothy"),
    nt("Titus"),
    nt("Philemon"),
    nt("Hebrews"),
    nt("James"),
    nt("1 Peter"),
    nt("2 Peter"),
    nt("1 John"),
    nt("2 John"),
    nt("3 John"),
    nt("Jude"),
    nt("Revelation"),
];

lazy_static! {
    /// Optional numeral, then letters and spaces.
    static ref LEADING_BOOK: Regex = Regex::new(r"^[1-3]?\s*[A-Za-z ]+").unwrap();
    static ref SPACES: Regex = Regex::new(r"\s+").unwrap();

    /// Lower-case book name to testament.
    static ref BOOK_TO_TESTAMENT: HashMap<String, Testament> = BOOKS
        .iter()
        .map(|b| (b.name.to_lowercase(), b.testament))
        .collect();
}

/// The full catalog in canonical order.
pub fn books() -> &'static [BookEntry] {
    BOOKS
}

/// Look up a book by name, ignoring case and surplus whitespace.
pub fn lookup(name: &str) -> Option<Testament> {
    let key = SPACES.replace_all(name, " ").trim().to_lowercase();
    BOOK_TO_TESTAMENT.get(&key).copied()
}

/// Classify a reference by the book it starts with.
///
/// The leading run of an optional numeral followed by letters and spaces is
/// taken as the book name; anything that does not resolve is `Unknown`.
pub fn testament_of(reference: &str) -> Testament {
    LEADING_BOOK
        .find(reference)
        .and_then(|m| lookup(m.as_str()))
        .unwrap_or(Testament::Unknown)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_catalog_size() {
        // 66 books, Psalms spelled two ways
        assert_eq!(books().len(), 67);
        assert_eq!(books().iter().filter(|b| b.testament == Testament::New).count(), 27);
    }

    #[test]
    fn test_testament_of() {
        assert_eq!(testament_of("Romans 8:28"), Testament::New);
        assert_eq!(testament_of("Genesis 1:1"), Testament::Old);
        assert_eq!(testament_of("1 Corinthians 10:13"), Testament::New);
        assert_eq!(testament_of("Song of Solomon 2:4"), Testament::Old);
        assert_eq!(testament_of("psalm 23"), Testament::Old);
        assert_eq!(testament_of("Psalms 23:1"), Testament::Old);
    }

    #[test]
    fn test_testament_of_normalizes_spacing() {
        assert_eq!(testament_of("1   John 4:8"), Testament::New);
        assert_eq!(testament_of("SONG  OF   SOLOMON 1:2"), Testament::Old);
    }

    #[test]
    fn test_testament_of_unknown() {
        assert_eq!(testament_of(""), Testament::Unknown);
        assert_eq!(testament_of("3:16"), Testament::Unknown);
        assert_eq!(testament_of("Hezekiah 1:1"), Testament::Unknown);
        assert_eq!(testament_of("4 John 1:1"), Testament::Unknown);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("revelation"), Some(Testament::New));
        assert_eq!(lookup("Revelations"), None);
    }
}
