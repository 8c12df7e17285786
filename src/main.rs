//! `verseref` - command line front end for the reference engine.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use verseref::config::Config;
use verseref::deck::{Deck, TestamentFilter};
use verseref::error::Result;
use verseref::{
    autoformat, compute_lock_boundary, parse_target, references_match, testament_of, Mode,
    Testament,
};

mod cli;
use cli::{Cli, Commands, DeckAction};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config() -> Result<Config> {
    let config = Config::load()?;
    tracing::debug!("{} {} mode={}", config.app_name(), config.app_version(), config.mode);
    Ok(config)
}

/// The mode given on the command line, else the configured one.
fn resolve_mode(mode: Option<Mode>) -> Result<Mode> {
    mode.map_or_else(|| load_config().map(|config| config.mode), Ok)
}

/// Run a command, returning the process exit code.
fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Parse { reference } => {
            let target = parse_target(&reference);
            if target.is_empty() {
                println!("no book found");
                return Ok(1);
            }
            println!("book:      {}", target.book);
            println!("chapter:   {}", target.chapter_digits);
            println!("verse:     {}", target.verse_digits);
            println!("end verse: {}", target.end_verse_digits);
        }
        Commands::Testament { reference } => println!("{}", testament_of(&reference)),
        Commands::Check { guess, actual, mode } => {
            if references_match(&guess, &actual, resolve_mode(mode)?) {
                println!("correct");
            } else {
                println!("wrong");
                return Ok(1);
            }
        }
        Commands::Format { raw, reference, mode } => {
            let formatted = autoformat(&raw, &reference, resolve_mode(mode)?, true);
            let lock = compute_lock_boundary(&formatted, &parse_target(&reference));
            println!("{formatted:?} lock={lock}");
        }
        Commands::Lock { buffer, reference } => {
            println!("{}", compute_lock_boundary(&buffer, &parse_target(&reference)));
        }
        Commands::Deck { action, testament } => return run_deck(action, testament),
    }
    Ok(0)
}

fn run_deck(action: Option<DeckAction>, testament: Option<Testament>) -> Result<i32> {
    let path = load_config()?.deck_file()?;
    let mut deck = Deck::load(&path)?;

    match action {
        None => {
            let filter = testament.map_or(TestamentFilter::All, TestamentFilter::Only);
            for reference in deck.filter(filter) {
                println!("{:<3} {reference}", testament_of(reference).tag());
            }
        }
        Some(DeckAction::Add { reference }) => {
            if testament_of(&reference) == Testament::Unknown {
                tracing::warn!("'{}' does not start with a known book", reference.trim());
            }
            if !deck.add(&reference) {
                println!("not added: blank or already in the deck");
                return Ok(1);
            }
            deck.save(&path)?;
            println!("added {}", reference.trim());
        }
        Some(DeckAction::Remove { reference }) => {
            if !deck.remove(&reference) {
                println!("not in the deck: {}", reference.trim());
                return Ok(1);
            }
            deck.save(&path)?;
            println!("removed {}", reference.trim());
        }
    }
    Ok(0)
}
