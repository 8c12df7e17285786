//! `verseref` - scripture reference parsing, matching and as-you-type formatting.
//!
//! This crate provides the engine behind a "type the reference while reading
//! the verse" memorization quiz: the book catalog, reference parsing,
//! canonical matching, the autoformat engine with its edit lock, and a small
//! quiz session built on top of them.

// Re-export public modules for use in integration tests and as a library
pub mod autoformat;
pub mod bible;
pub mod config;
pub mod constants;
pub mod deck;
pub mod error;
pub mod input;
pub mod quiz;
pub mod types;

pub use autoformat::{autoformat, compute_lock_boundary, format_against};
pub use bible::{
    canonicalize_full, canonicalize_initial, extract_book_name, parse_target, references_match,
    testament_of, ParsedTarget,
};
pub use types::{Mode, Testament};
