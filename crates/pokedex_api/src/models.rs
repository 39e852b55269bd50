//! Response models for the PokeAPI endpoints the REPL consumes.

use serde::{Deserialize, Serialize};

/// A named API resource with its canonical URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NamedResource {
    /// Resource name (e.g. "canalave-city-area")
    pub name: String,
    /// Canonical URL of the resource
    #[serde(default)]
    pub url: String,
}

/// One page of the location-area listing.
///
/// # Examples
///
/// ```
/// use pokedex_api::LocationAreaPage;
///
/// let json = r#"{"count":1,"next":null,"previous":null,
///                "results":[{"name":"pastoria-city-area","url":"u"}]}"#;
/// let page: LocationAreaPage = serde_json::from_str(json).unwrap();
/// assert_eq!(page.results[0].name, "pastoria-city-area");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LocationAreaPage {
    /// Total number of location areas
    pub count: u64,
    /// URL of the next page, if any
    pub next: Option<String>,
    /// URL of the previous page, if any
    pub previous: Option<String>,
    /// The location areas on this page
    pub results: Vec<NamedResource>,
}

/// A single location area with its Pokémon encounters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LocationArea {
    /// Pokémon that can be encountered in this area
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// One possible encounter within a location area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PokemonEncounter {
    /// The Pokémon that may be encountered
    pub pokemon: NamedResource,
}

/// A Pokémon record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Pokemon {
    /// Pokémon name
    pub name: String,
    /// Base experience granted for defeating this Pokémon (null for
    /// some species, treated as zero)
    #[serde(default)]
    pub base_experience: Option<u32>,
    /// Height in decimetres
    pub height: u32,
    /// Weight in hectograms
    pub weight: u32,
    /// Base stats
    pub stats: Vec<PokemonStat>,
    /// Type slots
    pub types: Vec<PokemonTypeSlot>,
}

impl Pokemon {
    /// Percent chance of catching this Pokémon.
    ///
    /// Base experience reduces the chance slightly, with a floor of 1%.
    ///
    /// # Examples
    ///
    /// ```
    /// use pokedex_api::Pokemon;
    ///
    /// let weedle = Pokemon { base_experience: Some(39), ..Default::default() };
    /// assert_eq!(weedle.catch_chance(), 47);
    ///
    /// let mewtwo = Pokemon { base_experience: Some(340), ..Default::default() };
    /// assert_eq!(mewtwo.catch_chance(), 1);
    /// ```
    pub fn catch_chance(&self) -> u32 {
        let base_experience = self.base_experience.unwrap_or(0);
        50u32.saturating_sub(base_experience / 10).max(1)
    }
}

/// A base stat entry on a Pokémon record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PokemonStat {
    /// The base value of the stat
    pub base_stat: u32,
    /// The stat this value belongs to
    pub stat: NamedResource,
}

/// A type slot on a Pokémon record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PokemonTypeSlot {
    /// The type in this slot
    #[serde(rename = "type")]
    pub pokemon_type: NamedResource,
}
