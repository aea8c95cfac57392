use thiserror::Error;

use crate::direction::Direction;

/// Errors the translation boundary reports to its caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// Input was empty or whitespace only.
    #[error("input text must not be empty ({direction})")]
    EmptyInput { direction: Direction },
}
