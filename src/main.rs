#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use deckview_core::logging::init_logging;
use deckview_core::DEFAULT_DECK_FILE;
use dioxus::desktop::{Config, WindowBuilder};

/// Global configuration, set once from the command line
static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Runtime configuration for the widget
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Deck document to load at startup
    pub deck: PathBuf,
    /// Skip the native dialog and always use the alert fallback
    pub no_dialog: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            deck: PathBuf::from(DEFAULT_DECK_FILE),
            no_dialog: false,
        }
    }
}

/// Get the configuration (set from command line or default)
pub fn get_config() -> AppConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Deckview - searchable card deck viewer
#[derive(Parser, Debug)]
#[command(name = "deckview-desktop")]
#[command(about = "Deckview - browse, search and filter a card deck")]
struct Args {
    /// Deck document to load
    #[arg(short, long, default_value = DEFAULT_DECK_FILE)]
    deck: PathBuf,

    /// Always show card details in a plain alert instead of a dialog
    #[arg(long)]
    no_dialog: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    init_logging(args.verbose);

    let _ = CONFIG.set(AppConfig {
        deck: args.deck.clone(),
        no_dialog: args.no_dialog,
    });

    tracing::info!("Starting with deck: {:?}", args.deck);

    // The real title arrives with the deck.
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Deckview")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 800.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
