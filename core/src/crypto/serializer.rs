//! crypto/serializer.rs
//! Encrypting decorator over any `GraphSerializer`.
//!
//! Wire layout:
//!
//! ```text
//! [ iv (16) ][ AES-128-CBC( inner serializer output, PKCS#7 ) ]
//! ```
//!
//! Holds no per-call state, so it is as reentrant as the serializer it wraps.

use std::any::TypeId;
use std::io::{ErrorKind, Read, Write};

use tracing::trace;

use crate::constants::IV_LEN_16;
use crate::crypto::cbc::{decrypt_cbc, encrypt_cbc, generate_iv, open, seal};
use crate::crypto::key::EncryptionKey;
use crate::crypto::types::CryptoError;
use crate::serializer::{GraphSerializer, Wire};
use crate::types::SerializerError;
use crate::value::DynValue;

#[derive(Debug, Clone)]
pub struct EncryptingSerializer<S> {
    inner: S,
    key: EncryptionKey,
}

impl<S: GraphSerializer> EncryptingSerializer<S> {
    /// Wrap `inner`. Any key that is not exactly 16 bytes is rejected.
    pub fn new(inner: S, key: &[u8]) -> Result<Self, CryptoError> {
        Ok(Self::with_key(inner, EncryptionKey::from_slice(key)?))
    }

    pub fn with_key(inner: S, key: EncryptionKey) -> Self {
        Self { inner, key }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    fn write_sealed<W: Write>(&self, output: &mut W, plaintext: &[u8]) -> Result<(), SerializerError> {
        let iv = generate_iv();
        let ciphertext = encrypt_cbc(&self.key, &iv, plaintext)?;

        output.write_all(&iv)?;
        output.write_all(&ciphertext)?;
        output.flush()?;
        Ok(())
    }

    fn read_opened<R: Read>(&self, input: &mut R) -> Result<Vec<u8>, SerializerError> {
        let mut iv = [0u8; IV_LEN_16];
        let mut filled = 0;
        while filled < IV_LEN_16 {
            match input.read(&mut iv[filled..]) {
                Ok(0) => {
                    return Err(CryptoError::TruncatedIv { expected: IV_LEN_16, actual: filled }.into());
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        let mut ciphertext = Vec::new();
        input.read_to_end(&mut ciphertext)?;
        Ok(decrypt_cbc(&self.key, &iv, &ciphertext)?)
    }
}

impl<S: GraphSerializer> GraphSerializer for EncryptingSerializer<S> {
    fn serialize_into<T, W>(&self, output: &mut W, value: &T) -> Result<(), SerializerError>
    where
        T: Wire,
        W: Write,
    {
        trace!(type_name = std::any::type_name::<T>(), "encrypting graph");

        let plaintext = self.inner.serialize(value)?;
        self.write_sealed(output, &plaintext)
    }

    fn deserialize_from<T, R>(&self, input: &mut R) -> Result<T, SerializerError>
    where
        T: Wire,
        R: Read,
    {
        trace!(type_name = std::any::type_name::<T>(), "decrypting stream");

        let plaintext = self.read_opened(input)?;
        self.inner.deserialize(&plaintext)
    }

    fn serialize_dynamic(&self, value: &DynValue) -> Result<Vec<u8>, SerializerError> {
        let plaintext = self.inner.serialize_dynamic(value)?;
        Ok(seal(&self.key, &plaintext)?)
    }

    fn deserialize_dynamic(&self, bytes: &[u8], content_type: TypeId) -> Result<DynValue, SerializerError> {
        let plaintext = open(&self.key, bytes)?;
        self.inner.deserialize_dynamic(&plaintext, content_type)
    }

    fn content_type(&self, contract_name: &str) -> Result<TypeId, SerializerError> {
        self.inner.content_type(contract_name)
    }
}
