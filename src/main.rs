//! Library Catalog - console driver
//!
//! Seeds a small catalog, lends a book and prints the resulting listings.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use library_catalog::{
    config::{AppConfig, LoggingConfig},
    models::{CreateBook, CreateMember, Genre},
    wordfreq, Library,
};

const WORDS: [&str; 15] = [
    "Swift", "is", "a", "powerful", "language", "Swift", "is", "also", "easy", "to", "learn",
    "Python", "is", "also", "powerful",
];

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    init_tracing(&config.logging);

    tracing::info!("Starting library catalog v{}", env!("CARGO_PKG_VERSION"));

    let mut library = Library::new(&config.catalog);

    library.add_item(CreateBook::new("B001", "1984", "George Orwell", Genre::Novel))?;
    library.add_item(CreateBook::new("B002", "The Raven", "Edgar Allan Poe", Genre::Poetry))?;
    library.add_member(CreateMember::new(1, "John Doe"))?;

    match library.checkout(1, "B001") {
        Ok(()) => println!("Book borrowed successfully\n"),
        Err(e) => println!("Error: {}", e),
    }

    println!("All Books:\n\n{}\n", library.display_items());
    println!("Overdue Books:\n\n{}\n", library.display_overdue(library.overdue_days()));
    println!("Poetry Books:\n\n{}\n", library.display_by_category(Genre::Poetry));

    let frequencies = wordfreq::count_word_frequency(WORDS);
    println!("Repeated Words:\n\n{}", wordfreq::display_repeated_words(&frequencies));

    Ok(())
}

/// Install the global subscriber; logs go to stderr
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("library_catalog={}", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
