//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors describe input that cannot be turned into a tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid tree source '{input}': {message}")]
    InvalidSource { input: String, message: String },

    #[error("tree is {depth} levels deep, drawing is limited to {max}")]
    TooDeepToDisplay { depth: usize, max: usize },
}
