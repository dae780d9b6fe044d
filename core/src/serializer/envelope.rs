//! serializer/envelope.rs
//! Registry-backed serializer: schema codec + envelopes + surrogates.

use std::any::TypeId;
use std::io::{Read, Write};
use std::sync::Arc;

use tracing::trace;

use crate::envelope::{EnvelopeCodec, EnvelopeError};
use crate::registry::{ContractRegistry, DuplicateContractPolicy, KnownType};
use crate::schema;
use crate::serializer::types::{GraphSerializer, Wire};
use crate::types::SerializerError;
use crate::value::DynValue;

/// The plain (unencrypted) serializer.
///
/// Owns one registry for its whole life; nested envelope calls made while
/// converting surrogates reuse that same registry through `codec()`.
#[derive(Debug, Clone)]
pub struct EnvelopeSerializer {
    codec: EnvelopeCodec,
}

impl EnvelopeSerializer {
    /// Build a registry from `known_types`, rejecting duplicate contracts.
    pub fn new<I>(known_types: I) -> Result<Self, SerializerError>
    where
        I: IntoIterator<Item = KnownType>,
    {
        Self::with_policy(known_types, DuplicateContractPolicy::default())
    }

    pub fn with_policy<I>(known_types: I, policy: DuplicateContractPolicy) -> Result<Self, SerializerError>
    where
        I: IntoIterator<Item = KnownType>,
    {
        let registry = ContractRegistry::with_policy(known_types, policy)?;
        Ok(Self::with_registry(Arc::new(registry)))
    }

    /// Wrap an existing registry.
    pub fn with_registry(registry: Arc<ContractRegistry>) -> Self {
        Self { codec: EnvelopeCodec::new(registry) }
    }

    pub fn codec(&self) -> &EnvelopeCodec {
        &self.codec
    }

    pub fn registry(&self) -> &ContractRegistry {
        self.codec.registry()
    }

    /// Envelope-encode a single dynamically typed value (`None` → empty).
    pub fn serialize_event(&self, value: Option<&DynValue>) -> Result<Vec<u8>, SerializerError> {
        Ok(self.codec.encode(value)?)
    }

    /// Decode an envelope produced by `serialize_event`.
    pub fn deserialize_event(&self, bytes: &[u8]) -> Result<Option<DynValue>, SerializerError> {
        Ok(self.codec.decode(bytes)?)
    }
}

impl GraphSerializer for EnvelopeSerializer {
    fn serialize_into<T, W>(&self, output: &mut W, value: &T) -> Result<(), SerializerError>
    where
        T: Wire,
        W: Write,
    {
        trace!(type_name = std::any::type_name::<T>(), "serializing graph");

        let repr = value.to_repr(&self.codec)?;
        let bytes = schema::encode(&repr)?;
        output.write_all(&bytes)?;
        Ok(())
    }

    fn deserialize_from<T, R>(&self, input: &mut R) -> Result<T, SerializerError>
    where
        T: Wire,
        R: Read,
    {
        trace!(type_name = std::any::type_name::<T>(), "deserializing stream");

        let mut bytes = Vec::new();
        input.read_to_end(&mut bytes)?;
        let repr: T::Repr = schema::decode(&bytes)?;
        T::from_repr(repr, &self.codec)
    }

    fn serialize_dynamic(&self, value: &DynValue) -> Result<Vec<u8>, SerializerError> {
        let entry = self
            .registry()
            .by_type(value.type_id())
            .ok_or(EnvelopeError::UnknownType { type_name: value.type_name() })?;

        trace!(type_name = value.type_name(), contract = entry.contract_name(), "serializing dynamic");
        Ok(entry.encode(value.as_any())?)
    }

    fn deserialize_dynamic(&self, bytes: &[u8], content_type: TypeId) -> Result<DynValue, SerializerError> {
        let entry = self
            .registry()
            .by_type(content_type)
            .ok_or(EnvelopeError::UnknownType { type_name: "<unregistered TypeId>" })?;

        trace!(contract = entry.contract_name(), "deserializing dynamic");
        Ok(entry.decode(bytes)?)
    }

    fn content_type(&self, contract_name: &str) -> Result<TypeId, SerializerError> {
        self.registry().content_type(contract_name).ok_or_else(|| {
            EnvelopeError::UnknownContract { contract_name: contract_name.to_string() }.into()
        })
    }
}
