//! The list of references a quiz draws from.
//!
//! A deck keeps references trimmed, non-empty and unique, in insertion
//! order. It is stored on disk as a plain JSON array of strings.

use std::path::Path;

use crate::bible::testament_of;
use crate::error::{Error, Result};
use crate::types::Testament;

/// Built-in references used until the player saves a deck of their own.
const DEFAULT_REFERENCES: &[&str] = &[
    "Deuteronomy 32:4",
    "Psalm 1:1-3",
    "Psalm 5:4",
    "Psalm 14:1-3",
    "Psalm 16:8-11",
    "Psalm 27:1",
    "Psalm 27:4",
    "Psalm 33:5",
    "Psalm 34:1",
    "Psalm 37:8",
    "Psalm 41:12",
    "Psalm 55:22",
    "Psalm 66:7",
    "Psalm 96:4",
    "Psalm 100:5",
    "Psalm 101:3-4",
    "Psalm 102:27",
    "Psalm 103:8",
    "Psalm 103:9-10",
    "Psalm 104:33-34",
    "Psalm 105:4-5",
    "Psalm 117",
    "Proverbs 3:5-7",
    "Proverbs 4:23",
    "Proverbs 8:13",
    "Proverbs 13:20",
    "Proverbs 16:17-18",
    "Isaiah 6:3",
    "Isaiah 64:6",
    "Daniel 4:34",
    "Malachi 3:6",
    "Matthew 4:4",
    "Matthew 5:43-44",
    "Matthew 6:31-34",
    "John 6:44",
    "John 14:6",
    "Romans 11:33",
    "Romans 13:14",
    "Romans 15:4",
    "1 Corinthians 6:17-20",
    "1 Corinthians 10:13",
    "1 Corinthians 10:31",
    "1 Corinthians 13:1-3",
    "1 Corinthians 13:4-7",
    "2 Corinthians 12:9",
    "Galatians 1:9-10",
    "Galatians 2:20",
    "Galatians 5:16-17",
    "Galatians 6:7-9",
    "Ephesians 1:11",
    "Ephesians 2:1-3",
    "Ephesians 2:4-7",
    "Ephesians 2:8-10",
    "Ephesians 4:1-3",
    "Ephesians 4:4-6",
    "Ephesians 5:18",
    "Philippians 1:21",
    "Philippians 4:4-7",
    "Philippians 4:8-9",
    "Colossians 1:13-16",
    "Colossians 1:17-20",
    "Colossians 3:1-3",
    "Colossians 3:4-7",
    "Colossians 3:8-11",
    "Colossians 3:12-14",
    "Colossians 3:15-17",
    "Colossians 4:6",
    "1 Thessalonians 5:16-18",
    "1 Thessalonians 5:19-22",
    "Hebrews 4:15-16",
    "Hebrews 12:1-2",
    "James 1:2-4",
    "James 1:19-20",
    "1 Peter 3:15-16",
    "1 Peter 4:16",
    "1 Peter 5:8",
    "1 John 2:5",
    "1 John 3:23-24",
    "1 John 4:7-8",
];

/// Which references a quiz should draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TestamentFilter {
    /// Every reference in the deck.
    #[default]
    All,
    /// Only references whose book is in the given testament.
    Only(Testament),
}

impl TestamentFilter {
    /// Whether a reference passes this filter.
    pub fn accepts(self, reference: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(testament) => testament_of(reference) == testament,
        }
    }
}

/// An ordered set of references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    references: Vec<String>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new(DEFAULT_REFERENCES.iter().copied())
    }
}

impl Deck {
    /// Build a deck, trimming entries and dropping blanks and repeats.
    pub fn new<I, S>(references: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut deck = Self { references: Vec::new() };
        for reference in references {
            deck.add(reference.as_ref());
        }
        deck
    }

    /// Add a reference. Returns false when it is blank or already present.
    pub fn add(&mut self, reference: &str) -> bool {
        let clean = reference.trim();
        if clean.is_empty() || self.contains(clean) {
            return false;
        }
        self.references.push(clean.to_string());
        true
    }

    /// Remove a reference. Returns false when it was not in the deck.
    pub fn remove(&mut self, reference: &str) -> bool {
        let clean = reference.trim();
        let before = self.references.len();
        self.references.retain(|r| r != clean);
        self.references.len() != before
    }

    /// Whether the exact reference is in the deck.
    pub fn contains(&self, reference: &str) -> bool {
        self.references.iter().any(|r| r == reference)
    }

    /// All references in insertion order.
    pub fn references(&self) -> &[String] {
        &self.references
    }

    /// Number of references.
    pub fn len(&self) -> usize {
        self.references.len()
    }

    /// Whether the deck has no references.
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// References passing the filter, in deck order.
    pub fn filter(&self, filter: TestamentFilter) -> Vec<&str> {
        self.references
            .iter()
            .map(String::as_str)
            .filter(|r| filter.accepts(r))
            .collect()
    }

    /// Load a deck from a JSON array file. A missing file yields the default deck.
    pub fn load(path: &Path) -> Result<Self> {
        let data = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("No deck at {}, using built-in references", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(Error::io(e, path.to_path_buf())),
        };

        let references: Vec<String> = serde_json::from_str(&data)
            .map_err(|e| Error::parse(format!("expected a JSON array of strings: {e}"), path.to_path_buf()))?;
        let deck = Self::new(references);
        tracing::info!("Loaded {} references from {}", deck.len(), path.display());
        Ok(deck)
    }

    /// Save the deck as a JSON array, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::io(e, parent.to_path_buf()))?;
        }
        let json = serde_json::to_string_pretty(&self.references)
            .map_err(|e| Error::Msg(format!("Failed to serialize deck: {e}")))?;
        std::fs::write(path, json).map_err(|e| Error::io(e, path.to_path_buf()))?;
        tracing::info!("Saved {} references to {}", self.len(), path.display());
        Ok(())
    }
}
