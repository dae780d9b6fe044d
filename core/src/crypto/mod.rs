//! crypto/mod.rs
//! Confidentiality layer for any `GraphSerializer`.
//!
//! Security notes:
//! - AES-128-CBC with PKCS#7 padding and a fresh random IV per call.
//! - No integrity tag. Tampered ciphertext either fails to unpad or decrypts
//!   to garbage that fails further down; successful decryption is not proof
//!   of authenticity.

pub mod types;
pub mod key;
pub mod cbc;
pub mod serializer;

pub use types::*;
pub use key::*;
pub use cbc::*;
pub use serializer::*;
