//! REPL command parsing and usage metadata.

/// Command names and descriptions shown by `help`.
pub const USAGE: &[(&str, &str)] = &[
    ("help", "Displays a help message"),
    ("exit", "Exit the Pokedex"),
    (
        "map",
        "Displays names of 20 location areas in the Pokemon world",
    ),
    (
        "mapb",
        "Displays names of the previous 20 location areas in the Pokemon world",
    ),
    (
        "explore <area>",
        "Displays a list of Pokemon in a given location",
    ),
    ("catch <name>", "Throws a Pokeball at a Pokemon"),
    (
        "inspect <name>",
        "Prints the name, height, weight, stats and type(s) of a caught Pokemon",
    ),
    ("pokedex", "Prints the list of Pokemon you have caught"),
];

/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print usage for every command
    Help,
    /// Leave the REPL
    Exit,
    /// Next page of location areas
    Map,
    /// Previous page of location areas
    MapBack,
    /// List the Pokémon encountered in a location area
    Explore {
        /// Location area name
        area: String,
    },
    /// Throw a Pokeball at a Pokémon
    Catch {
        /// Pokémon name
        name: String,
    },
    /// Show the record of a caught Pokémon
    Inspect {
        /// Pokémon name
        name: String,
    },
    /// List caught Pokémon
    Pokedex,
}

impl Command {
    /// Parse cleaned input words into a command.
    ///
    /// `Err` carries the message to print back to the user, covering
    /// unknown commands and missing arguments.
    pub fn parse(words: &[String]) -> Result<Self, String> {
        let Some(name) = words.first() else {
            return Err("Unknown command".to_string());
        };

        match name.as_str() {
            "help" => Ok(Self::Help),
            "exit" => Ok(Self::Exit),
            "map" => Ok(Self::Map),
            "mapb" => Ok(Self::MapBack),
            "explore" => match words.get(1) {
                Some(area) => Ok(Self::Explore { area: area.clone() }),
                None => Err("Please provide a location name".to_string()),
            },
            "catch" => match words.get(1) {
                Some(name) => Ok(Self::Catch { name: name.clone() }),
                None => Err("Please provide a pokemon name".to_string()),
            },
            "inspect" => match words.get(1) {
                Some(name) => Ok(Self::Inspect { name: name.clone() }),
                None => Err("Please provide a pokemon name".to_string()),
            },
            "pokedex" => Ok(Self::Pokedex),
            _ => Err("Unknown command".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(input: &[&str]) -> Vec<String> {
        input.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_bare_commands() {
        assert_eq!(Command::parse(&words(&["help"])), Ok(Command::Help));
        assert_eq!(Command::parse(&words(&["exit"])), Ok(Command::Exit));
        assert_eq!(Command::parse(&words(&["map"])), Ok(Command::Map));
        assert_eq!(Command::parse(&words(&["mapb"])), Ok(Command::MapBack));
        assert_eq!(Command::parse(&words(&["pokedex"])), Ok(Command::Pokedex));
    }

    #[test]
    fn parses_commands_with_argument() {
        assert_eq!(
            Command::parse(&words(&["explore", "canalave-city-area"])),
            Ok(Command::Explore {
                area: "canalave-city-area".to_string()
            })
        );
        assert_eq!(
            Command::parse(&words(&["catch", "pikachu"])),
            Ok(Command::Catch {
                name: "pikachu".to_string()
            })
        );
        assert_eq!(
            Command::parse(&words(&["inspect", "pikachu"])),
            Ok(Command::Inspect {
                name: "pikachu".to_string()
            })
        );
    }

    #[test]
    fn missing_argument_is_a_user_message() {
        assert_eq!(
            Command::parse(&words(&["explore"])),
            Err("Please provide a location name".to_string())
        );
        assert_eq!(
            Command::parse(&words(&["catch"])),
            Err("Please provide a pokemon name".to_string())
        );
        assert_eq!(
            Command::parse(&words(&["inspect"])),
            Err("Please provide a pokemon name".to_string())
        );
    }

    #[test]
    fn unknown_command() {
        assert_eq!(
            Command::parse(&words(&["dance"])),
            Err("Unknown command".to_string())
        );
        assert_eq!(Command::parse(&[]), Err("Unknown command".to_string()));
    }

    #[test]
    fn usage_covers_every_command() {
        for name in ["help", "exit", "map", "mapb", "explore", "catch", "inspect", "pokedex"] {
            assert!(
                USAGE.iter().any(|(entry, _)| entry.starts_with(name)),
                "no usage entry for {}",
                name
            );
        }
    }
}
