//! 128-bit encryption key.

use std::fmt;

use crate::constants::KEY_LEN_16;
use crate::crypto::types::CryptoError;

/// A validated 16-byte key. `Debug` never prints the material.
#[derive(Clone, PartialEq, Eq)]
pub struct EncryptionKey([u8; KEY_LEN_16]);

impl EncryptionKey {
    /// Fail fast on anything but exactly 16 bytes.
    pub fn from_slice(key: &[u8]) -> Result<Self, CryptoError> {
        let bytes: [u8; KEY_LEN_16] = key.try_into().map_err(|_| CryptoError::InvalidKeyLen {
            expected: KEY_LEN_16,
            actual: key.len(),
        })?;
        Ok(Self(bytes))
    }

    /// Parse 32 hex characters.
    pub fn from_hex(hex_key: &str) -> Result<Self, CryptoError> {
        let raw = hex::decode(hex_key.trim()).map_err(|e| CryptoError::InvalidKeyFormat(e.to_string()))?;
        Self::from_slice(&raw)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN_16] {
        &self.0
    }
}

impl From<[u8; KEY_LEN_16]> for EncryptionKey {
    fn from(bytes: [u8; KEY_LEN_16]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for EncryptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EncryptionKey(<redacted>)")
    }
}
