use thiserror::Error;

/// The two failure kinds exposed to callers: type errors for non-text input,
/// value errors for text that violates the length bound or the alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Type,
    Value,
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("expected a text value, got {found}")]
    NotText { found: &'static str },

    #[error("input is {length} characters, maximum is {max}")]
    InputTooLong { length: usize, max: usize },

    #[error("character {found:?} at position {position} is outside the cipher alphabet")]
    UnsupportedChar { found: char, position: usize },
}

impl Error {
    /// Collapse the diagnostic variants to the raw failure kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotText { .. } => ErrorKind::Type,
            Error::InputTooLong { .. } | Error::UnsupportedChar { .. } => ErrorKind::Value,
        }
    }
}
