//! Application constants.
//!
//! Centralizes quiz defaults and file locations.

/// Quiz behaviour constants.
pub mod quiz {
    /// Attempts a player gets on each reference before it is revealed.
    pub const DEFAULT_ATTEMPTS: u32 = 2;

    /// Fewest attempts a configuration may ask for.
    pub const MIN_ATTEMPTS: u32 = 1;
}

/// Deck storage constants.
pub mod deck {
    /// Directory name under the platform data directory.
    pub const APP_DIR: &str = "verseref";

    /// Deck file name inside the application directory.
    pub const DECK_FILE: &str = "deck.json";
}

/// Environment variable names read by `Config::load`.
pub mod env {
    /// Matching mode (`initial` or `full`).
    pub const MODE: &str = "VERSEREF_MODE";

    /// Attempts per reference.
    pub const ATTEMPTS: &str = "VERSEREF_ATTEMPTS";

    /// Deck file path.
    pub const DECK: &str = "VERSEREF_DECK";
}
