//! Scripture reference handling: the book catalog, reference parsing and
//! canonical forms for answer matching.

pub mod canonical;
pub mod catalog;
pub mod parser;

pub use canonical::{canonicalize_full, canonicalize_initial, references_match};
pub use catalog::{books, testament_of, BookEntry};
pub use parser::{extract_book_name, parse_target, ParsedTarget};
