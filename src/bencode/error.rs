use thiserror::Error;

use super::value::ValueKind;

/// Errors produced while decoding bencode data.
///
/// Every variant records the byte offset at which the problem was detected.
/// A failed decode never hands back a partially built list or dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BencodeError {
    /// No bytes were available where a value was expected.
    #[error("empty input at offset {offset}")]
    EmptyInput { offset: usize },

    /// Input ended in the middle of a token.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEof { offset: usize },

    /// A token was present but malformed.
    #[error("invalid format at offset {offset}: {reason}")]
    InvalidFormat { offset: usize, reason: &'static str },

    /// A byte string declared more bytes than remain in the buffer.
    #[error("invalid string length at offset {offset}")]
    InvalidLength { offset: usize },

    /// The leading byte does not start any bencode value.
    #[error("unsupported type byte {byte:#04x} at offset {offset}")]
    UnsupportedType { offset: usize, byte: u8 },

    /// Containers are nested deeper than the configured limit.
    #[error("nesting deeper than {max_depth} at offset {offset}")]
    NestingTooDeep { offset: usize, max_depth: usize },

    /// Bytes remain after the top-level value.
    #[error("trailing data after value at offset {offset}")]
    TrailingData { offset: usize },
}

impl BencodeError {
    /// Returns the byte offset at which decoding failed.
    pub fn offset(&self) -> usize {
        match self {
            BencodeError::EmptyInput { offset }
            | BencodeError::UnexpectedEof { offset }
            | BencodeError::InvalidFormat { offset, .. }
            | BencodeError::InvalidLength { offset }
            | BencodeError::UnsupportedType { offset, .. }
            | BencodeError::NestingTooDeep { offset, .. }
            | BencodeError::TrailingData { offset } => *offset,
        }
    }
}

/// Errors produced while encoding into a writer.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced while navigating or editing a decoded [`Value`](super::Value) tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The dictionary has no entry for the key.
    #[error("missing key: {0}")]
    MissingKey(String),

    /// The list is shorter than the requested index.
    #[error("index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// The value is a different variant than the caller asked for.
    #[error("expected {expected}, found {found}")]
    WrongType {
        expected: ValueKind,
        found: ValueKind,
    },

    /// The byte string is not valid UTF-8.
    #[error("byte string is not valid utf-8")]
    InvalidUtf8,
}
