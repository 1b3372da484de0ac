//! Deckview CLI
//!
//! Thin wrapper around deckview-core for browsing a deck in the terminal.
//!
//! ## Usage
//!
//! ```bash
//! # Show deck title and counts
//! deckview --deck cards.json info
//!
//! # List the tag index
//! deckview tags
//!
//! # Search and filter, same rules as the desktop widget
//! deckview list --query fire --tag spell
//!
//! # Show one card in full
//! deckview show "Fireball"
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use deckview_core::logging::init_logging;
use deckview_core::{
    load_deck, Card, FileSource, FilterController, Session, DEFAULT_DECK_FILE,
    LOAD_FAILURE_MESSAGE,
};

/// Deckview - browse a card deck
#[derive(Parser)]
#[command(name = "deckview")]
#[command(version = "0.1.0")]
#[command(about = "Deckview - search and filter a static card deck")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Deck document to load
    #[arg(short, long, global = true, default_value = DEFAULT_DECK_FILE)]
    deck: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show deck title and counts
    Info,

    /// List every distinct tag, sorted
    Tags,

    /// List cards matching a search and tag filter
    List {
        /// Search text (substring, case-insensitive)
        #[arg(short, long, default_value = "")]
        query: String,

        /// Only cards carrying this exact tag
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Show the full detail of one card
    Show {
        /// Card name (case-insensitive)
        name: String,
    },
}

/// Find the first card whose display name matches, ignoring case
fn find_card<'a>(session: &'a Session, name: &str) -> Option<&'a Card> {
    let wanted = name.to_lowercase();
    session
        .cards()
        .iter()
        .find(|card| card.display_name().to_lowercase() == wanted)
}

fn print_detail(card: &Card) {
    println!("{}", card.display_name());
    if !card.subtitle().is_empty() {
        println!("  {}", card.subtitle());
    }
    if !card.tags.is_empty() {
        println!("  Tags: {}", card.tags.join(", "));
    }
    if let Some(image) = card.image() {
        println!("  Image: {}", image);
    }
    println!();
    println!("Rules / Text");
    println!("{}", card.rules());
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let deck = match load_deck(&FileSource::new(&cli.deck)).await {
        Ok(deck) => deck,
        // Cause already logged by the loader.
        Err(_) => anyhow::bail!(LOAD_FAILURE_MESSAGE),
    };
    let session = Session::init(deck);

    match cli.command {
        Commands::Info => {
            println!("{}", session.title());
            println!();
            println!("  Cards: {}", session.cards().len());
            println!("  Tags: {}", session.tags().len());
        }

        Commands::Tags => {
            if session.tags().is_empty() {
                println!("No tags in this deck.");
            } else {
                for tag in session.tags() {
                    println!("{}", tag);
                }
            }
        }

        Commands::List { query, tag } => {
            let mut controller = FilterController::new(Arc::clone(&session));
            controller.on_query_input(&query);
            let grid = controller.on_tag_change(tag.as_deref().unwrap_or(""));

            println!("{}", grid.status);
            println!();
            if grid.is_empty() {
                println!("{}", deckview_core::EMPTY_GRID_MESSAGE);
            }
            for tile in grid.tiles() {
                let mut line = format!("  {}", tile.name);
                if !tile.subtitle.is_empty() {
                    line.push_str(&format!(" - {}", tile.subtitle));
                }
                if !tile.tags.is_empty() {
                    line.push_str(&format!(" [{}]", tile.tags.join(", ")));
                }
                println!("{}", line);
            }
        }

        Commands::Show { name } => match find_card(&session, &name) {
            Some(card) => print_detail(card),
            None => anyhow::bail!("No card named '{}'", name),
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckview_core::Deck;

    #[test]
    fn test_find_card_ignores_case() {
        let session = Session::init(Deck::new(
            None,
            vec![Card::named("Fireball"), Card::named("fireball")],
        ));
        let found = find_card(&session, "FIREBALL").unwrap();
        assert_eq!(found.name.as_deref(), Some("Fireball"));
        assert!(find_card(&session, "Frost").is_none());
    }

    #[test]
    fn test_find_untitled_card() {
        let session = Session::init(Deck::new(None, vec![Card::default()]));
        assert!(find_card(&session, "untitled").is_some());
    }

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
