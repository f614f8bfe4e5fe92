use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
///
/// Collaborator and filesystem failures are fatal to the current invocation:
/// they propagate out of the handler and through `main` with no retry and no
/// fallback text. Unrecognized menu selections are not errors and never
/// reach this type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
