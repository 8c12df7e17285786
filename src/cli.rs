//! Command line arguments.

use clap::{Parser, Subcommand};
use verseref::{Mode, Testament};

#[derive(Parser, Debug)]
#[command(name = "verseref", version)]
#[command(about = "Scripture reference parsing, matching and autoformatting", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the book and locator digits of a reference
    #[command(alias = "p")]
    Parse {
        /// Reference such as "John 3:16-18"
        reference: String,
    },

    /// Show whether a reference is Old or New Testament
    #[command(alias = "t")]
    Testament {
        /// Reference such as "Romans 8:28"
        reference: String,
    },

    /// Check a guess against the actual reference (exit code 1 when wrong)
    #[command(alias = "c")]
    Check {
        /// What the player typed
        guess: String,

        /// The expected reference
        actual: String,

        /// Matching mode (initial or full); defaults to VERSEREF_MODE
        #[arg(short, long)]
        mode: Option<Mode>,
    },

    /// Autoformat a partially typed answer and show its lock boundary
    #[command(alias = "f")]
    Format {
        /// The answer buffer as typed so far
        raw: String,

        /// The expected reference
        reference: String,

        /// Matching mode (initial or full); defaults to VERSEREF_MODE
        #[arg(short, long)]
        mode: Option<Mode>,
    },

    /// Show how many characters of a buffer are locked against editing
    #[command(alias = "l")]
    Lock {
        /// The answer buffer
        buffer: String,

        /// The expected reference
        reference: String,
    },

    /// List the references in the deck, or add and remove them
    #[command(alias = "ls")]
    Deck {
        #[command(subcommand)]
        action: Option<DeckAction>,

        /// Only list references from this testament (OT or NT)
        #[arg(short, long)]
        testament: Option<Testament>,
    },
}

#[derive(Subcommand, Debug)]
pub enum DeckAction {
    /// Add a reference to the deck and save it
    #[command(alias = "a")]
    Add {
        /// Reference such as "Romans 8:28"
        reference: String,
    },

    /// Remove a reference from the deck and save it
    #[command(alias = "rm")]
    Remove {
        /// Reference exactly as listed
        reference: String,
    },
}
