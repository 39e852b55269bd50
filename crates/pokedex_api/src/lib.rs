//! PokeAPI client for the pokedex REPL.
//!
//! This crate provides typed access to the endpoints the REPL needs:
//! paginated location-area listings, the Pokémon encountered in an
//! area, and individual Pokémon records. Raw response bodies pass
//! through a [`pokedex_cache::ResponseCache`] keyed by request URL, so
//! repeated commands within the cache window skip the network.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod models;

pub use client::{DEFAULT_BASE_URL, PokeApiClient};
pub use models::{
    LocationArea, LocationAreaPage, NamedResource, Pokemon, PokemonEncounter, PokemonStat,
    PokemonTypeSlot,
};
