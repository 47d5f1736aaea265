//! Parse error type shared by the tokenizer, escape codec, and builder.

use thiserror::Error;

/// First-error result of a parse. The partial tree built before the failure
/// is dropped; callers never observe a half-built value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonError {
    #[error("unexpected character at byte {0}")]
    UnexpectedCharacter(usize),
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("invalid escape sequence")]
    InvalidEscape,
    #[error("invalid unicode escape")]
    InvalidUnicode,
}

impl JsonError {
    /// Numeric status code reported by the command-line drivers.
    /// Success is 0; the variants follow in declaration order.
    pub fn code(&self) -> i32 {
        match self {
            JsonError::UnexpectedCharacter(_) => 1,
            JsonError::UnexpectedEnd => 2,
            JsonError::InvalidEscape => 3,
            JsonError::InvalidUnicode => 4,
        }
    }
}
