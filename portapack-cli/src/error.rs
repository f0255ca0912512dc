// ============================================================================
// portapack-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Error types for the CLI
//
// Wraps the core error type and adds the failures that only exist at the
// terminal: the input stream closing and logger setup.
//
// AI-ASSISTANT-INFO: CLI error handling utilities

use portapack_core::CoreError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Standard input reached end-of-file while a prompt was waiting.
    #[error("Input closed")]
    InputClosed,

    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to initialize logging: {0}")]
    Logging(#[from] fern::InitError),

    #[error("Missing tools: {}", .0.join(", "))]
    MissingTools(Vec<String>),
}

/// Type alias for CLI results.
pub type CliResult<T> = std::result::Result<T, CliError>;

/// Shorthand for a user input problem reported through the core error type.
pub fn invalid_input(message: impl Into<String>) -> CliError {
    CliError::Core(CoreError::InvalidInput(message.into()))
}
