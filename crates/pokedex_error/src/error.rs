//! Top-level error wrapper types.

use crate::{HttpError, JsonError, ReplError};

/// Workspace-level error variants.
///
/// # Examples
///
/// ```
/// use pokedex_error::{PokedexError, HttpError};
///
/// let http_err = HttpError::new("connection failed");
/// let err: PokedexError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum PokedexErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Terminal input/output error
    #[from(ReplError)]
    Repl(ReplError),
}

/// Pokedex error with kind discrimination.
///
/// # Examples
///
/// ```
/// use pokedex_error::{PokedexResult, JsonError};
///
/// fn might_fail() -> PokedexResult<()> {
///     Err(JsonError::new("missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("success"),
///     Err(e) => println!("error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Pokedex Error: {}", _0)]
pub struct PokedexError(Box<PokedexErrorKind>);

impl PokedexError {
    /// Create a new error from a kind.
    pub fn new(kind: PokedexErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PokedexErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to PokedexErrorKind
impl<T> From<T> for PokedexError
where
    T: Into<PokedexErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for pokedex operations.
pub type PokedexResult<T> = std::result::Result<T, PokedexError>;
