use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{builtin_contracts, CONTENT_OFFSET_RESERVED, ENVELOPE_PREFIX_LEN};
use crate::registry::DataContract;
use crate::schema::SchemaError;

/// Envelope header: which contract the content belongs to and how long it is.
///
/// Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractDescriptor {
    pub contract_name: String,
    pub content_size: i64,
    /// Reserved; always `0`.
    pub content_offset: i64,
}

impl ContractDescriptor {
    pub fn new(contract_name: impl Into<String>, content_size: i64) -> Self {
        Self {
            contract_name: contract_name.into(),
            content_size,
            content_offset: CONTENT_OFFSET_RESERVED,
        }
    }
}

impl DataContract for ContractDescriptor {
    const NAMESPACE: &'static str = builtin_contracts::DESCRIPTOR_NAMESPACE;
    const NAME: &'static str = builtin_contracts::DESCRIPTOR_NAME;
}

/// Borrowed view over a parsed envelope. No content decode has happened yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvelopeView<'a> {
    pub descriptor: ContractDescriptor,
    pub header_len: usize,
    pub content: &'a [u8],
}

impl EnvelopeView<'_> {
    /// `8 + header_length + content_size`.
    pub fn total_len(&self) -> usize {
        ENVELOPE_PREFIX_LEN + self.header_len + self.content.len()
    }
}

#[derive(Debug)]
pub enum EnvelopeError {
    /// Encode asked for a runtime type the registry does not know.
    UnknownType { type_name: &'static str },

    /// Decode met a contract name the registry does not know.
    UnknownContract { contract_name: String },

    /// Input ends before a field it announced.
    Truncated { need: usize, have: usize },

    /// Input is longer than the frame it announces.
    LengthMismatch { expected: usize, actual: usize },

    /// Header length prefix is negative or unaddressable.
    InvalidHeaderLength(i64),

    /// Reserved content offset is not zero.
    InvalidContentOffset(i64),

    /// Descriptor could not be decoded or carries impossible values.
    Malformed(String),

    /// Content bytes do not decode as the named contract.
    Content { contract_name: String, source: SchemaError },

    /// Schema codec failed while encoding.
    Schema(SchemaError),
}

impl EnvelopeError {
    /// True for every corrupt/truncated framing outcome.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            EnvelopeError::Truncated { .. }
                | EnvelopeError::LengthMismatch { .. }
                | EnvelopeError::InvalidHeaderLength(_)
                | EnvelopeError::InvalidContentOffset(_)
                | EnvelopeError::Malformed(_)
                | EnvelopeError::Content { .. }
        )
    }
}

impl fmt::Display for EnvelopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use EnvelopeError::*;
        match self {
            UnknownType { type_name } =>
                write!(f, "can't find a serializer for unknown type '{}'; was it passed as a known type?", type_name),
            UnknownContract { contract_name } =>
                write!(f, "unknown contract name '{}'", contract_name),
            Truncated { need, have } =>
                write!(f, "truncated envelope: need {} bytes, have {}", need, have),
            LengthMismatch { expected, actual } =>
                write!(f, "envelope length mismatch: expected {}, got {}", expected, actual),
            InvalidHeaderLength(len) =>
                write!(f, "invalid envelope header length: {}", len),
            InvalidContentOffset(off) =>
                write!(f, "invalid content offset: {} (reserved, must be 0)", off),
            Malformed(msg) =>
                write!(f, "malformed envelope: {}", msg),
            Content { contract_name, source } =>
                write!(f, "content of '{}' failed to decode: {}", contract_name, source),
            Schema(e) =>
                write!(f, "envelope schema error: {}", e),
        }
    }
}

impl std::error::Error for EnvelopeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EnvelopeError::Content { source, .. } => Some(source),
            EnvelopeError::Schema(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SchemaError> for EnvelopeError {
    fn from(e: SchemaError) -> Self {
        EnvelopeError::Schema(e)
    }
}
