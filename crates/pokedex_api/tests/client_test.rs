//! Tests for the cached request path of the PokeAPI client.
//!
//! The base URL points at an unroutable port, so any accidental
//! network call fails loudly instead of silently reaching the real API.

use pokedex_api::{LocationAreaPage, NamedResource, PokeApiClient};
use pokedex_cache::ResponseCache;
use pokedex_error::PokedexErrorKind;
use std::time::Duration;

const BASE_URL: &str = "http://127.0.0.1:9/api/v2";

fn sample_page() -> LocationAreaPage {
    LocationAreaPage {
        count: 2,
        next: Some(format!("{}/location-area?offset=20&limit=20", BASE_URL)),
        previous: None,
        results: vec![
            NamedResource {
                name: "canalave-city-area".into(),
                url: format!("{}/location-area/1/", BASE_URL),
            },
            NamedResource {
                name: "eterna-city-area".into(),
                url: format!("{}/location-area/2/", BASE_URL),
            },
        ],
    }
}

#[tokio::test]
async fn test_cache_hit_skips_network() {
    let cache = ResponseCache::new(Duration::from_secs(5));
    let client = PokeApiClient::with_base_url(cache.clone(), BASE_URL);

    let body = serde_json::to_vec(&sample_page()).unwrap();
    cache.set(client.location_areas_url(), body);

    let page = client.location_areas(None).await.unwrap();

    assert_eq!(page, sample_page());

    cache.shutdown().await;
}

#[tokio::test]
async fn test_cache_hit_on_explicit_page_url() {
    let cache = ResponseCache::new(Duration::from_secs(5));
    let client = PokeApiClient::with_base_url(cache.clone(), BASE_URL);

    let url = format!("{}/location-area?offset=20&limit=20", BASE_URL);
    let body = serde_json::to_vec(&sample_page()).unwrap();
    cache.set(url.clone(), body);

    let page = client.location_areas(Some(&url)).await.unwrap();

    assert_eq!(page.results.len(), 2);

    cache.shutdown().await;
}

#[tokio::test]
async fn test_cache_miss_surfaces_transport_error() {
    let cache = ResponseCache::new(Duration::from_secs(5));
    let client = PokeApiClient::with_base_url(cache.clone(), BASE_URL);

    let err = client.pokemon("pikachu").await.unwrap_err();

    assert!(matches!(err.kind(), PokedexErrorKind::Http(_)));
    // Failed requests must not populate the cache.
    assert!(cache.is_empty());

    cache.shutdown().await;
}

#[tokio::test]
async fn test_corrupt_cached_body_is_a_json_error() {
    let cache = ResponseCache::new(Duration::from_secs(5));
    let client = PokeApiClient::with_base_url(cache.clone(), BASE_URL);

    cache.set(client.location_areas_url(), b"not json".to_vec());

    let err = client.location_areas(None).await.unwrap_err();

    assert!(matches!(err.kind(), PokedexErrorKind::Json(_)));

    cache.shutdown().await;
}
