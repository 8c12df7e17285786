//! Core type definitions shared by the reference engine and the quiz.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How much of the book name a quiz answer must spell out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Only the first letter (or numeral) of the book plus the locator.
    #[default]
    Initial,
    /// The complete book name plus the locator.
    Full,
}

impl Mode {
    /// Returns all modes in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Initial, Self::Full]
    }

    /// Returns the lower-case name used in configuration and on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Full => "full",
        }
    }

    /// Whether this is initial-letter mode.
    #[must_use]
    pub const fn is_initial(self) -> bool {
        matches!(self, Self::Initial)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "initial" | "i" => Ok(Self::Initial),
            "full" | "f" => Ok(Self::Full),
            other => Err(format!("unknown mode '{other}'")),
        }
    }
}

/// Which half of the canon a book belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Testament {
    /// Genesis through Malachi.
    #[serde(rename = "OT")]
    Old,
    /// Matthew through Revelation.
    #[serde(rename = "NT")]
    New,
    /// The reference did not start with a known book name.
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl Testament {
    /// Returns the short tag (`OT`, `NT`, `UNKNOWN`).
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Old => "OT",
            Self::New => "NT",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Testament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Testament {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "OT" | "OLD" => Ok(Self::Old),
            "NT" | "NEW" => Ok(Self::New),
            other => Err(format!("unknown testament '{other}'")),
        }
    }
}
