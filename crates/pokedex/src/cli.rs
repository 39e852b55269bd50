//! CLI argument definitions.

use clap::Parser;

/// Pokedex - interactive Pokédex REPL backed by the public PokeAPI
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Interactive Pokédex REPL backed by the public PokeAPI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seconds a cached API response stays fresh
    #[arg(long, default_value_t = 5)]
    pub cache_ttl_secs: u64,

    /// Base URL for PokeAPI requests
    #[arg(long)]
    pub base_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
