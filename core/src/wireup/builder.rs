//! Serializer wireup.

use std::any::TypeId;
use std::io::{Read, Write};

use crate::crypto::{EncryptingSerializer, EncryptionKey};
use crate::registry::{DataContract, DuplicateContractPolicy, KnownType, KnownTypesProvider};
use crate::serializer::{EnvelopeSerializer, GraphSerializer, Wire};
use crate::types::SerializerError;
use crate::value::DynValue;
use crate::wireup::config::SerializerConfig;

/// Collects known types, then builds a serializer.
///
/// Nothing is registered until `build*` runs; the registry is complete
/// before any serializer can observe it.
#[derive(Debug, Default)]
pub struct SerializerBuilder {
    known_types: Vec<KnownType>,
    config: SerializerConfig,
}

impl SerializerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: SerializerConfig) -> Self {
        Self { known_types: Vec::new(), config }
    }

    pub fn register<T: DataContract>(mut self) -> Self {
        self.known_types.push(KnownType::of::<T>());
        self
    }

    pub fn known_types<I>(mut self, known_types: I) -> Self
    where
        I: IntoIterator<Item = KnownType>,
    {
        self.known_types.extend(known_types);
        self
    }

    /// Pull known types from a host discovery hook.
    pub fn provider<P: KnownTypesProvider + ?Sized>(mut self, provider: &P) -> Self {
        self.known_types.extend(provider.known_types());
        self
    }

    pub fn duplicate_policy(mut self, policy: DuplicateContractPolicy) -> Self {
        self.config.duplicate_contracts = policy;
        self
    }

    pub fn encryption_key(mut self, key: &EncryptionKey) -> Self {
        self.config = self.config.with_encryption_key(key);
        self
    }

    /// Plain serializer. Fails when a key is configured.
    pub fn build(self) -> Result<EnvelopeSerializer, SerializerError> {
        if self.config.encryption_key.is_some() {
            return Err(SerializerError::Config(
                "encryption key configured; use build_configured or build_encrypted".to_string(),
            ));
        }
        self.build_plain()
    }

    /// Encrypting serializer with an explicit key, which overrides any configured one.
    pub fn build_encrypted(self, key: &[u8]) -> Result<EncryptingSerializer<EnvelopeSerializer>, SerializerError> {
        let key = EncryptionKey::from_slice(key)?;
        Ok(EncryptingSerializer::with_key(self.build_plain()?, key))
    }

    /// Plain or encrypting, as the config says.
    pub fn build_configured(self) -> Result<ConfiguredSerializer, SerializerError> {
        let key = self.config.encryption_key()?;
        let plain = self.build_plain()?;
        Ok(match key {
            None => ConfiguredSerializer::Plain(plain),
            Some(key) => ConfiguredSerializer::Encrypted(EncryptingSerializer::with_key(plain, key)),
        })
    }

    fn build_plain(self) -> Result<EnvelopeSerializer, SerializerError> {
        EnvelopeSerializer::with_policy(self.known_types, self.config.duplicate_contracts)
    }
}

/// Serializer selected at runtime from configuration.
#[derive(Debug, Clone)]
pub enum ConfiguredSerializer {
    Plain(EnvelopeSerializer),
    Encrypted(EncryptingSerializer<EnvelopeSerializer>),
}

impl ConfiguredSerializer {
    pub fn is_encrypted(&self) -> bool {
        matches!(self, ConfiguredSerializer::Encrypted(_))
    }

    /// The envelope layer, whichever variant this is.
    pub fn envelope(&self) -> &EnvelopeSerializer {
        match self {
            ConfiguredSerializer::Plain(s) => s,
            ConfiguredSerializer::Encrypted(s) => s.inner(),
        }
    }
}

impl GraphSerializer for ConfiguredSerializer {
    fn serialize_into<T, W>(&self, output: &mut W, value: &T) -> Result<(), SerializerError>
    where
        T: Wire,
        W: Write,
    {
        match self {
            ConfiguredSerializer::Plain(s) => s.serialize_into(output, value),
            ConfiguredSerializer::Encrypted(s) => s.serialize_into(output, value),
        }
    }

    fn deserialize_from<T, R>(&self, input: &mut R) -> Result<T, SerializerError>
    where
        T: Wire,
        R: Read,
    {
        match self {
            ConfiguredSerializer::Plain(s) => s.deserialize_from(input),
            ConfiguredSerializer::Encrypted(s) => s.deserialize_from(input),
        }
    }

    fn serialize_dynamic(&self, value: &DynValue) -> Result<Vec<u8>, SerializerError> {
        match self {
            ConfiguredSerializer::Plain(s) => s.serialize_dynamic(value),
            ConfiguredSerializer::Encrypted(s) => s.serialize_dynamic(value),
        }
    }

    fn deserialize_dynamic(&self, bytes: &[u8], content_type: TypeId) -> Result<DynValue, SerializerError> {
        match self {
            ConfiguredSerializer::Plain(s) => s.deserialize_dynamic(bytes, content_type),
            ConfiguredSerializer::Encrypted(s) => s.deserialize_dynamic(bytes, content_type),
        }
    }

    fn content_type(&self, contract_name: &str) -> Result<TypeId, SerializerError> {
        self.envelope().content_type(contract_name)
    }
}
