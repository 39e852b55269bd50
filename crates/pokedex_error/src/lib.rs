//! Error types for the pokedex REPL.
//!
//! This crate provides the foundation error types used throughout the
//! pokedex workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean
//! error handling:
//! - concern-specific structs (`HttpError`, `JsonError`, `ReplError`)
//!   capture a message plus the source location of the failure
//! - `PokedexErrorKind` discriminates between them
//! - `PokedexError` boxes the kind and is what fallible APIs return
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use pokedex_error::{HttpError, PokedexResult};
//!
//! fn fetch_data() -> PokedexResult<String> {
//!     Err(HttpError::new("connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("got: {}", data),
//!     Err(e) => eprintln!("error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod http;
mod json;
mod repl;

pub use error::{PokedexError, PokedexErrorKind, PokedexResult};
pub use http::HttpError;
pub use json::JsonError;
pub use repl::ReplError;
