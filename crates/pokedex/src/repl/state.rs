//! Mutable REPL session state.

use pokedex_api::{LocationAreaPage, Pokemon};
use std::collections::HashMap;

/// State carried across REPL commands: the pagination cursors for
/// `map`/`mapb` and the caught-Pokémon pokedex.
#[derive(Debug, Default)]
pub struct ReplState {
    next_url: Option<String>,
    previous_url: Option<String>,
    caught: HashMap<String, Pokemon>,
}

impl ReplState {
    /// Fresh state: no pages seen, nothing caught.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pagination cursor for the `map` command, if a page was fetched.
    pub fn next_url(&self) -> Option<&str> {
        self.next_url.as_deref()
    }

    /// Pagination cursor for the `mapb` command.
    pub fn previous_url(&self) -> Option<&str> {
        self.previous_url.as_deref()
    }

    /// Update both cursors from a freshly fetched page.
    pub fn apply_page(&mut self, page: &LocationAreaPage) {
        self.next_url = page.next.clone();
        self.previous_url = page.previous.clone();
    }

    /// Record a caught Pokémon, keyed by name.
    pub fn record_catch(&mut self, pokemon: Pokemon) {
        self.caught.insert(pokemon.name.clone(), pokemon);
    }

    /// Look up a caught Pokémon by name.
    pub fn caught(&self, name: &str) -> Option<&Pokemon> {
        self.caught.get(name)
    }

    /// Names of all caught Pokémon, sorted for stable output.
    pub fn caught_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.caught.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_api::NamedResource;

    fn page(next: Option<&str>, previous: Option<&str>) -> LocationAreaPage {
        LocationAreaPage {
            count: 0,
            next: next.map(str::to_string),
            previous: previous.map(str::to_string),
            results: vec![NamedResource::default()],
        }
    }

    #[test]
    fn cursors_follow_pages() {
        let mut state = ReplState::new();
        assert!(state.next_url().is_none());
        assert!(state.previous_url().is_none());

        state.apply_page(&page(Some("next-2"), None));
        assert_eq!(state.next_url(), Some("next-2"));
        assert!(state.previous_url().is_none());

        state.apply_page(&page(Some("next-3"), Some("prev-1")));
        assert_eq!(state.next_url(), Some("next-3"));
        assert_eq!(state.previous_url(), Some("prev-1"));
    }

    #[test]
    fn catches_are_recorded_and_listed_sorted() {
        let mut state = ReplState::new();

        state.record_catch(Pokemon {
            name: "pikachu".to_string(),
            ..Default::default()
        });
        state.record_catch(Pokemon {
            name: "bulbasaur".to_string(),
            ..Default::default()
        });

        assert!(state.caught("pikachu").is_some());
        assert!(state.caught("mewtwo").is_none());
        assert_eq!(state.caught_names(), vec!["bulbasaur", "pikachu"]);
    }

    #[test]
    fn recatching_overwrites_the_record() {
        let mut state = ReplState::new();

        state.record_catch(Pokemon {
            name: "pikachu".to_string(),
            height: 4,
            ..Default::default()
        });
        state.record_catch(Pokemon {
            name: "pikachu".to_string(),
            height: 5,
            ..Default::default()
        });

        assert_eq!(state.caught_names().len(), 1);
        assert_eq!(state.caught("pikachu").unwrap().height, 5);
    }
}
