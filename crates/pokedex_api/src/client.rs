//! HTTP client for PokeAPI with response caching.

use crate::{LocationArea, LocationAreaPage, Pokemon};
use pokedex_cache::ResponseCache;
use pokedex_error::{HttpError, JsonError, PokedexResult};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};

/// Base URL of the public PokeAPI.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// PokeAPI client.
///
/// Every request first consults the response cache by full URL; on a
/// hit the cached body is decoded directly and the network is never
/// touched. On a miss the body is fetched and, only on HTTP success,
/// stored unparsed before decoding.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: Client,
    cache: ResponseCache,
    base_url: String,
}

impl PokeApiClient {
    /// Creates a client against the public PokeAPI.
    pub fn new(cache: ResponseCache) -> Self {
        Self::with_base_url(cache, DEFAULT_BASE_URL)
    }

    /// Creates a client against a custom base URL.
    pub fn with_base_url(cache: ResponseCache, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        debug!(base_url = %base_url, "Creating new PokeApiClient");
        Self {
            http: Client::new(),
            cache,
            base_url,
        }
    }

    /// The cache handle shared with this client.
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// URL of the first location-area listing page.
    pub fn location_areas_url(&self) -> String {
        format!("{}/location-area", self.base_url)
    }

    /// Fetches one page of the location-area listing.
    ///
    /// With no `page_url`, fetches the first page; pagination follows
    /// the `next`/`previous` URLs returned on each page.
    #[instrument(skip(self))]
    pub async fn location_areas(&self, page_url: Option<&str>) -> PokedexResult<LocationAreaPage> {
        let url = match page_url {
            Some(url) => url.to_string(),
            None => self.location_areas_url(),
        };
        let body = self.fetch_bytes(&url).await?;
        decode(&body)
    }

    /// Fetches a single location area with its Pokémon encounters.
    #[instrument(skip(self))]
    pub async fn location_area(&self, name: &str) -> PokedexResult<LocationArea> {
        let url = format!("{}/location-area/{}", self.base_url, name);
        let body = self.fetch_bytes(&url).await?;
        decode(&body)
    }

    /// Fetches a Pokémon record by name.
    #[instrument(skip(self))]
    pub async fn pokemon(&self, name: &str) -> PokedexResult<Pokemon> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        let body = self.fetch_bytes(&url).await?;
        decode(&body)
    }

    /// Returns the raw response body for `url`, from cache when possible.
    ///
    /// Only successful responses are cached, always unparsed and keyed
    /// by the full URL.
    async fn fetch_bytes(&self, url: &str) -> PokedexResult<Vec<u8>> {
        if let Some(body) = self.cache.get(url) {
            debug!(url = %url, bytes = body.len(), "Serving response from cache");
            return Ok(body);
        }

        debug!(url = %url, "Cache miss, requesting from PokeAPI");
        let response = self.http.get(url).send().await.map_err(|e| {
            error!(error = ?e, url = %url, "Failed to send request to PokeAPI");
            HttpError::new(format!("request failed: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, url = %url, "PokeAPI returned error");
            return Err(HttpError::new(format!("{} returned status {}: {}", url, status, body)).into());
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| {
                error!(error = ?e, url = %url, "Failed to read response body");
                HttpError::new(format!("failed to read body: {}", e))
            })?
            .to_vec();

        self.cache.set(url, body.clone());
        Ok(body)
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> PokedexResult<T> {
    serde_json::from_slice(body).map_err(|e| {
        error!(error = ?e, "Failed to parse PokeAPI response");
        JsonError::new(format!("failed to parse response: {}", e)).into()
    })
}
