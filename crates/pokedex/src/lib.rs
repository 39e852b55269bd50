//! Interactive Pokédex REPL.
//!
//! Reads commands from stdin, queries PokeAPI through a caching client,
//! and tracks the Pokémon the user has caught. The heavy lifting lives
//! in the companion crates: `pokedex_cache` for the expiring response
//! cache and `pokedex_api` for the typed client.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod repl;

pub use cli::Cli;
pub use config::{ReplConfig, ReplConfigBuilder};
pub use repl::{Command, Repl, ReplState, clean_input};
