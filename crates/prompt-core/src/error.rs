//! Error types for prompt runs

use thiserror::Error;

/// Errors that end a prompt run.
///
/// Rejected user input is never an error: it is answered with a notice and
/// the same prompt is asked again. Everything here is fatal to the current
/// [`Cli::prompt`](crate::Cli::prompt) call.
#[derive(Debug, Error)]
pub enum PromptError {
    /// A descriptor is malformed (bad choice keys, bad pattern, duplicate branch)
    #[error("Invalid prompt configuration: {0}")]
    Config(String),

    /// A user-supplied message, predicate, validator, transform, selector or
    /// acknowledgement callback failed
    #[error("Prompt callback failed: {0}")]
    Callback(#[source] anyhow::Error),

    /// Reading from or writing to the terminal failed
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The configured attempt limit was reached for an input prompt
    #[error("No valid response for '{name}' after {attempts} attempts")]
    AttemptsExhausted { name: String, attempts: u32 },

    /// A prompt manifest could not be decoded
    #[error("Failed to parse prompt manifest: {0}")]
    Manifest(#[from] serde_yaml::Error),
}

impl PromptError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

pub type Result<T, E = PromptError> = std::result::Result<T, E>;
