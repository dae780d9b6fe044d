use std::io;

use thiserror::Error;

use crate::crypto::CryptoError;
use crate::envelope::EnvelopeError;
use crate::registry::RegistryError;
use crate::schema::SchemaError;

/// Unified serializer error covering registration, framing, schema, crypto and I/O.
/// - `From<T>` impls let `?` cross layer boundaries.
/// - Every variant is local to one call; nothing is retried internally.
#[derive(Debug, Error)]
pub enum SerializerError {
    /// Known-type set could not be registered.
    #[error("registration error: {0}")]
    Registration(#[from] RegistryError),

    /// Unknown type/contract or malformed envelope.
    #[error("envelope error: {0}")]
    Envelope(#[from] EnvelopeError),

    /// Top-level schema encode/decode failure.
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Key, IV or ciphertext problem.
    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),

    /// Configuration could not be parsed or applied.
    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl SerializerError {
    /// `UnknownTypeError` in the error taxonomy.
    pub fn is_unknown_type(&self) -> bool {
        matches!(self, SerializerError::Envelope(EnvelopeError::UnknownType { .. }))
    }

    /// `UnknownContractError` in the error taxonomy.
    pub fn is_unknown_contract(&self) -> bool {
        matches!(self, SerializerError::Envelope(EnvelopeError::UnknownContract { .. }))
    }

    /// `MalformedEnvelopeError` in the error taxonomy.
    pub fn is_malformed(&self) -> bool {
        matches!(self, SerializerError::Envelope(e) if e.is_malformed())
    }

    /// `DecryptionError` in the error taxonomy.
    pub fn is_decryption(&self) -> bool {
        matches!(self, SerializerError::Crypto(e) if e.is_decryption())
    }
}
