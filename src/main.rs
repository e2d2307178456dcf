use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use amazon_book_scraper::scrape_book;

/// Fetch an Amazon.com.br product page and print its book metadata as JSON
#[derive(Parser, Debug)]
#[command(name = "amazon-book-scraper", version, about)]
struct Cli {
    /// ISBN-10, ISBN-13 or ASIN of the book
    identifier: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let record = scrape_book(&cli.identifier)?;

    // Pretty-printed; serde_json leaves non-ASCII characters unescaped.
    println!("{}", serde_json::to_string_pretty(&record)?);

    Ok(())
}
