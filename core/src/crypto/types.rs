// ## 📂 File: `src/crypto/types.rs`

use std::fmt;

#[derive(Debug)]
pub enum CryptoError {
    /// Key is not exactly 16 bytes.
    InvalidKeyLen { expected: usize, actual: usize },

    /// Key material could not be parsed (e.g. bad hex).
    InvalidKeyFormat(String),

    /// Input ends inside the IV prefix.
    TruncatedIv { expected: usize, actual: usize },

    /// Wrong key, corrupted ciphertext or bad padding.
    Decryption(String),
}

impl CryptoError {
    /// Decrypt-side failure, as opposed to a construction error.
    pub fn is_decryption(&self) -> bool {
        matches!(self, CryptoError::Decryption(_) | CryptoError::TruncatedIv { .. })
    }
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CryptoError::*;
        match self {
            InvalidKeyLen { expected, actual } =>
                write!(f, "invalid key length: expected={}, actual={}", expected, actual),
            InvalidKeyFormat(msg) =>
                write!(f, "invalid key format: {}", msg),
            TruncatedIv { expected, actual } =>
                write!(f, "truncated IV: expected={}, actual={}", expected, actual),
            Decryption(msg) =>
                write!(f, "decryption failed: {}", msg),
        }
    }
}

impl std::error::Error for CryptoError {}
