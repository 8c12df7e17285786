//! Reference parsing into a book name and locator digit strings.
//!
//! The locator is kept as digit strings rather than numbers: the autoformat
//! engine compares what has been typed so far against these strings
//! character by character, so "10" and "010" must stay distinguishable.

/// The parsed shape of the reference a quiz item expects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTarget {
    /// Book name as written in the reference (e.g. "1 Corinthians").
    pub book: String,
    /// Chapter digits, empty when the reference has no chapter.
    pub chapter_digits: String,
    /// Verse digits, only present when a chapter is.
    pub verse_digits: String,
    /// End-of-range verse digits, only present when a verse is.
    pub end_verse_digits: String,
}

impl ParsedTarget {
    /// True when no book could be found in the reference.
    pub fn is_empty(&self) -> bool {
        self.book.is_empty()
    }

    /// The book name followed by the separating space, e.g. "John ".
    pub fn prefix(&self) -> String {
        format!("{} ", self.book)
    }

    /// Whether the book name starts with a "1"/"2"/"3" numeral token.
    pub fn is_numbered_book(&self) -> bool {
        let mut tokens = self.book.split(' ');
        matches!(tokens.next(), Some("1" | "2" | "3")) && tokens.next().is_some()
    }

    /// Format for display (e.g., "John 3:16-18").
    pub fn display(&self) -> String {
        let mut out = self.book.clone();
        if !self.chapter_digits.is_empty() {
            out.push(' ');
            out.push_str(&self.chapter_digits);
        }
        if !self.verse_digits.is_empty() {
            out.push(':');
            out.push_str(&self.verse_digits);
        }
        if !self.end_verse_digits.is_empty() {
            out.push('-');
            out.push_str(&self.end_verse_digits);
        }
        out
    }
}

fn has_digit(token: &str) -> bool {
    token.bytes().any(|b| b.is_ascii_digit())
}

/// Extract the book name from the front of a reference.
///
/// A leading "1", "2" or "3" token joins the following word when that word
/// has no digits; after that, every token up to the first one containing a
/// digit is part of the name ("Song of Solomon 2:4" → "Song of Solomon").
pub fn extract_book_name(reference: &str) -> String {
    let tokens: Vec<&str> = reference.trim().split(' ').filter(|t| !t.is_empty()).collect();
    let Some(&first) = tokens.first() else {
        return String::new();
    };

    let mut book = vec![first];
    let mut i = 1;
    if matches!(first, "1" | "2" | "3") {
        if let Some(&second) = tokens.get(1) {
            if !has_digit(second) {
                book.push(second);
                i = 2;
            }
        }
    }
    while let Some(&token) = tokens.get(i) {
        if has_digit(token) {
            break;
        }
        book.push(token);
        i += 1;
    }
    book.join(" ")
}

/// End offset of the maximal ASCII digit run starting at `start`.
fn scan_digits(bytes: &[u8], start: usize) -> usize {
    let mut i = start;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    i
}

/// Parse a reference like "Psalm 103:8-11" into its book and locator digits.
///
/// Never fails: a reference with no book gives an empty target, and the
/// locator scan simply stops at the first character outside the expected
/// alphabet, leaving the remaining fields empty.
pub fn parse_target(reference: &str) -> ParsedTarget {
    let book = extract_book_name(reference);
    if book.is_empty() {
        return ParsedTarget::default();
    }

    // ASCII lowercasing keeps byte offsets aligned with the original string.
    let haystack = reference.to_ascii_lowercase();
    let needle = book.to_ascii_lowercase();
    let start = haystack
        .find(&format!("{needle} "))
        .or_else(|| haystack.find(&needle))
        .map_or(0, |pos| pos + book.len());

    let bytes = reference.as_bytes();
    let mut scan = start;
    while scan < bytes.len() && bytes[scan] == b' ' {
        scan += 1;
    }

    // CHAPTER
    let chapter_end = scan_digits(bytes, scan);
    let mut target = ParsedTarget {
        chapter_digits: reference[scan..chapter_end].to_string(),
        book,
        ..ParsedTarget::default()
    };

    // VERSE, only after a chapter
    if !target.chapter_digits.is_empty() && bytes.get(chapter_end) == Some(&b':') {
        let verse_start = chapter_end + 1;
        let verse_end = scan_digits(bytes, verse_start);
        target.verse_digits = reference[verse_start..verse_end].to_string();

        // END_VERSE, only after a verse
        if !target.verse_digits.is_empty() && bytes.get(verse_end) == Some(&b'-') {
            let end_start = verse_end + 1;
            let end_end = scan_digits(bytes, end_start);
            target.end_verse_digits = reference[end_start..end_end].to_string();
        }
    }

    target
}
