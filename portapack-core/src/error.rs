// ============================================================================
// portapack-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Core Error Types
//
// Every fallible operation in portapack-core returns `CoreResult<T>`. The
// variants follow the taxonomy the CLI reports to the user: invalid input,
// missing tools, tools that ran and failed, and filesystem failures.
//
// AI-ASSISTANT-INFO: Error types for the portapack-core library

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by portapack-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Bad path, wrong extension or an empty required field.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Source path '{}' does not exist", .0.display())]
    SourceNotFound(PathBuf),

    /// A directory would be copied into a location inside itself.
    #[error("Cannot copy '{}' into '{}': destination lies inside the source", .path.display(), .destination.display())]
    NestedDestination {
        path: PathBuf,
        destination: PathBuf,
    },

    #[error("{tool} not found in PATH. {hint}")]
    ToolMissing { tool: String, hint: String },

    #[error("{tool} exited with {}{}", describe_exit(.exit_code), format_tool_output(.output))]
    ToolFailed {
        tool: String,
        exit_code: Option<i32>,
        output: String,
    },

    #[error("Failed to start {tool}: {source}")]
    CommandStart {
        tool: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to copy '{}' to '{}': {source}", .from.display(), .to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Directory traversal error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for portapack-core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

fn describe_exit(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("status {code}"),
        None => "a signal".to_string(),
    }
}

fn format_tool_output(output: &str) -> String {
    if output.trim().is_empty() {
        String::new()
    } else {
        format!(":\n{}", output.trim_end())
    }
}

/// Builds an `InvalidInput` error from anything displayable.
pub(crate) fn invalid_input(message: impl Into<String>) -> CoreError {
    CoreError::InvalidInput(message.into())
}
