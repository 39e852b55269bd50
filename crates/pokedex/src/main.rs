//! Pokedex CLI binary.
//!
//! Starts the interactive REPL: builds the response cache and the
//! caching PokeAPI client, runs the loop, and tears the cache's
//! reaper down on the way out.

use clap::Parser;
use pokedex::{Cli, Repl, ReplConfigBuilder};
use pokedex_api::PokeApiClient;
use pokedex_cache::ResponseCache;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let mut builder = ReplConfigBuilder::default();
    builder.cache_ttl_secs(cli.cache_ttl_secs);
    if let Some(base_url) = cli.base_url {
        builder.base_url(base_url);
    }
    let config = builder.build()?;

    tracing::debug!(
        base_url = %config.base_url(),
        cache_ttl = ?config.cache_ttl(),
        "Starting pokedex REPL"
    );

    let cache = ResponseCache::new(config.cache_ttl());
    let client = PokeApiClient::with_base_url(cache.clone(), config.base_url().as_str());

    let mut repl = Repl::new(client);
    let result = repl.run().await;

    // Stop the reaper before exiting, even if the loop failed.
    cache.shutdown().await;
    result?;

    Ok(())
}
