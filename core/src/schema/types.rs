use std::fmt;

use bincode::error::{DecodeError, EncodeError};

#[derive(Debug)]
pub enum SchemaError {
    /// The codec refused to encode the value.
    Encode(EncodeError),

    /// The codec could not decode the input.
    Decode(DecodeError),

    /// Decoding succeeded but left bytes behind.
    TrailingBytes { consumed: usize, total: usize },

    /// An erased value did not have the type its entry was built for.
    TypeMismatch { expected: &'static str, actual: &'static str },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use SchemaError::*;
        match self {
            Encode(e) =>
                write!(f, "schema encode failed: {}", e),
            Decode(e) =>
                write!(f, "schema decode failed: {}", e),
            TrailingBytes { consumed, total } =>
                write!(f, "trailing bytes after decode: consumed {} of {}", consumed, total),
            TypeMismatch { expected, actual } =>
                write!(f, "value type mismatch: expected {}, got {}", expected, actual),
        }
    }
}

impl std::error::Error for SchemaError {}

impl From<EncodeError> for SchemaError {
    fn from(e: EncodeError) -> Self {
        SchemaError::Encode(e)
    }
}

impl From<DecodeError> for SchemaError {
    fn from(e: DecodeError) -> Self {
        SchemaError::Decode(e)
    }
}
