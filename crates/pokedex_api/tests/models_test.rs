//! Deserialization tests against PokeAPI-shaped payloads.

use pokedex_api::{LocationArea, LocationAreaPage, Pokemon};

#[test]
fn test_location_area_page_deserializes() {
    let json = r#"{
        "count": 1089,
        "next": "https://pokeapi.co/api/v2/location-area?offset=20&limit=20",
        "previous": null,
        "results": [
            {"name": "canalave-city-area", "url": "https://pokeapi.co/api/v2/location-area/1/"},
            {"name": "eterna-city-area", "url": "https://pokeapi.co/api/v2/location-area/2/"}
        ]
    }"#;

    let page: LocationAreaPage = serde_json::from_str(json).unwrap();

    assert_eq!(page.count, 1089);
    assert!(page.next.as_deref().unwrap().contains("offset=20"));
    assert!(page.previous.is_none());
    assert_eq!(page.results.len(), 2);
    assert_eq!(page.results[0].name, "canalave-city-area");
}

#[test]
fn test_location_area_deserializes_encounters() {
    let json = r#"{
        "id": 1,
        "name": "canalave-city-area",
        "pokemon_encounters": [
            {"pokemon": {"name": "tentacool", "url": "https://pokeapi.co/api/v2/pokemon/72/"}},
            {"pokemon": {"name": "magikarp", "url": "https://pokeapi.co/api/v2/pokemon/129/"}}
        ]
    }"#;

    let area: LocationArea = serde_json::from_str(json).unwrap();

    let names: Vec<&str> = area
        .pokemon_encounters
        .iter()
        .map(|e| e.pokemon.name.as_str())
        .collect();
    assert_eq!(names, vec!["tentacool", "magikarp"]);
}

#[test]
fn test_pokemon_deserializes() {
    let json = r#"{
        "name": "pikachu",
        "base_experience": 112,
        "height": 4,
        "weight": 60,
        "stats": [
            {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": ""}},
            {"base_stat": 90, "effort": 2, "stat": {"name": "speed", "url": ""}}
        ],
        "types": [
            {"slot": 1, "type": {"name": "electric", "url": ""}}
        ]
    }"#;

    let pokemon: Pokemon = serde_json::from_str(json).unwrap();

    assert_eq!(pokemon.name, "pikachu");
    assert_eq!(pokemon.base_experience, Some(112));
    assert_eq!(pokemon.height, 4);
    assert_eq!(pokemon.weight, 60);
    assert_eq!(pokemon.stats[1].base_stat, 90);
    assert_eq!(pokemon.stats[1].stat.name, "speed");
    assert_eq!(pokemon.types[0].pokemon_type.name, "electric");
}

#[test]
fn test_pokemon_null_base_experience() {
    // Some species return null here; decoding must not fail.
    let json = r#"{
        "name": "wyrdeer",
        "base_experience": null,
        "height": 18,
        "weight": 951,
        "stats": [],
        "types": []
    }"#;

    let pokemon: Pokemon = serde_json::from_str(json).unwrap();

    assert_eq!(pokemon.base_experience, None);
    assert_eq!(pokemon.catch_chance(), 50);
}

#[test]
fn test_catch_chance_floor() {
    let pokemon = Pokemon {
        base_experience: Some(608),
        ..Default::default()
    };

    // 50 - 60 saturates to zero, then floors at 1.
    assert_eq!(pokemon.catch_chance(), 1);
}
