//! Serializer configuration.
//!
//! ```json
//! { "duplicate_contracts": "reject", "encryption_key": "000102030405060708090a0b0c0d0e0f" }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::crypto::EncryptionKey;
use crate::registry::DuplicateContractPolicy;
use crate::types::SerializerError;

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SerializerConfig {
    /// How the registry treats two registrations of one name or type.
    pub duplicate_contracts: DuplicateContractPolicy,
    /// Hex AES-128 key; when set, output is encrypted.
    pub encryption_key: Option<String>,
}

impl SerializerConfig {
    pub fn from_json_str(json: &str) -> Result<Self, SerializerError> {
        serde_json::from_str(json).map_err(|e| SerializerError::Config(e.to_string()))
    }

    pub fn with_encryption_key(mut self, key: &EncryptionKey) -> Self {
        self.encryption_key = Some(hex::encode(key.as_bytes()));
        self
    }

    /// Parsed key, if one is configured.
    pub fn encryption_key(&self) -> Result<Option<EncryptionKey>, SerializerError> {
        match &self.encryption_key {
            None => Ok(None),
            Some(hex_key) => Ok(Some(EncryptionKey::from_hex(hex_key)?)),
        }
    }
}

impl fmt::Debug for SerializerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerializerConfig")
            .field("duplicate_contracts", &self.duplicate_contracts)
            .field("encryption_key", &self.encryption_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
