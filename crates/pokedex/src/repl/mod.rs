//! The interactive loop and command handlers.

mod command;
mod state;

pub use command::{Command, USAGE};
pub use state::ReplState;

use pokedex_api::PokeApiClient;
use pokedex_error::{PokedexResult, ReplError};
use rand::Rng;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, instrument};

const GOODBYE: &str = "Closing the Pokedex... Goodbye!";

/// Normalize raw input: trim, lowercase, split on whitespace.
///
/// # Examples
///
/// ```
/// use pokedex::clean_input;
///
/// assert_eq!(clean_input("  Catch  PIKACHU "), vec!["catch", "pikachu"]);
/// assert!(clean_input("   ").is_empty());
/// ```
pub fn clean_input(text: &str) -> Vec<String> {
    text.trim()
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// The interactive Pokédex session.
///
/// Owns the session state and a caching API client; the cache handle
/// itself is constructed by the caller and shared into the client.
pub struct Repl {
    client: PokeApiClient,
    state: ReplState,
}

impl Repl {
    /// Create a session around a caching API client.
    pub fn new(client: PokeApiClient) -> Self {
        Self {
            client,
            state: ReplState::new(),
        }
    }

    /// Run the loop until `exit` or end of input.
    ///
    /// Command failures (network, decoding) print and the loop
    /// continues; only terminal I/O failures abort the session.
    pub async fn run(&mut self) -> PokedexResult<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            prompt()?;

            let line = lines
                .next_line()
                .await
                .map_err(|e| ReplError::new(format!("failed to read input: {}", e)))?;
            let Some(line) = line else {
                // EOF behaves like exit.
                println!();
                println!("{}", GOODBYE);
                break;
            };

            let words = clean_input(&line);
            if words.is_empty() {
                continue;
            }

            match Command::parse(&words) {
                Ok(Command::Exit) => {
                    println!("{}", GOODBYE);
                    break;
                }
                Ok(command) => {
                    if let Err(e) = self.dispatch(command).await {
                        println!("{}", e);
                    }
                }
                Err(message) => println!("{}", message),
            }
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn dispatch(&mut self, command: Command) -> PokedexResult<()> {
        debug!(?command, "Dispatching command");
        match command {
            Command::Help => {
                self.help();
                Ok(())
            }
            // Exit terminates the loop before dispatch.
            Command::Exit => Ok(()),
            Command::Map => self.map_forward().await,
            Command::MapBack => self.map_back().await,
            Command::Explore { area } => self.explore(&area).await,
            Command::Catch { name } => self.catch(&name).await,
            Command::Inspect { name } => {
                self.inspect(&name);
                Ok(())
            }
            Command::Pokedex => {
                self.pokedex();
                Ok(())
            }
        }
    }

    fn help(&self) {
        println!("Welcome to the Pokedex!");
        println!("Usage:");
        println!();
        for (name, description) in USAGE {
            println!("{}: {}", name, description);
        }
    }

    async fn map_forward(&mut self) -> PokedexResult<()> {
        let page = self.client.location_areas(self.state.next_url()).await?;
        self.state.apply_page(&page);
        for area in &page.results {
            println!("{}", area.name);
        }
        Ok(())
    }

    async fn map_back(&mut self) -> PokedexResult<()> {
        let Some(url) = self.state.previous_url().map(str::to_string) else {
            println!("You're on the first page");
            return Ok(());
        };
        let page = self.client.location_areas(Some(&url)).await?;
        self.state.apply_page(&page);
        for area in &page.results {
            println!("{}", area.name);
        }
        Ok(())
    }

    async fn explore(&mut self, area: &str) -> PokedexResult<()> {
        let area = self.client.location_area(area).await?;
        for encounter in &area.pokemon_encounters {
            println!("{}", encounter.pokemon.name);
        }
        Ok(())
    }

    async fn catch(&mut self, name: &str) -> PokedexResult<()> {
        println!("Throwing a Pokeball at {}...", name);

        let pokemon = self.client.pokemon(name).await?;
        let chance = pokemon.catch_chance();
        let roll: u32 = rand::thread_rng().gen_range(0..100);
        debug!(name = %pokemon.name, chance, roll, "Catch attempt");

        if roll < chance {
            println!("{} was caught!", name);
            self.state.record_catch(pokemon);
        } else {
            println!("{} escaped!", name);
        }
        Ok(())
    }

    fn inspect(&self, name: &str) {
        let Some(pokemon) = self.state.caught(name) else {
            println!("you have not caught that pokemon");
            return;
        };

        println!("Name: {}", pokemon.name);
        println!("Height: {}", pokemon.height);
        println!("Weight: {}", pokemon.weight);
        println!("Stats:");
        for stat in &pokemon.stats {
            println!("  -{}: {}", stat.stat.name, stat.base_stat);
        }
        println!("Types:");
        for slot in &pokemon.types {
            println!("  - {}", slot.pokemon_type.name);
        }
    }

    fn pokedex(&self) {
        println!("Your Pokedex");
        for name in self.state.caught_names() {
            println!("- {}", name);
        }
    }
}

fn prompt() -> PokedexResult<()> {
    print!("Pokedex > ");
    std::io::stdout()
        .flush()
        .map_err(|e| ReplError::new(format!("failed to flush prompt: {}", e)))?;
    Ok(())
}
