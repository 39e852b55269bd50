//! REPL error types.

/// Error reading from or writing to the interactive terminal.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("REPL Error: {} at line {} in {}", message, line, file)]
pub struct ReplError {
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ReplError {
    /// Create a new ReplError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
