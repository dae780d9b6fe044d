//! envelope/codec.rs
//! Registry-driven envelope encode/decode of type-erased values.

use std::any::{Any, TypeId};
use std::sync::Arc;

use tracing::trace;

use crate::envelope::decode::parse_envelope;
use crate::envelope::encode::encode_envelope;
use crate::envelope::types::{EnvelopeError, EnvelopeView};
use crate::registry::ContractRegistry;
use crate::schema::SchemaError;
use crate::value::DynValue;

/// Envelope codec bound to one registry instance.
///
/// Cheap to clone; clones share the registry. Every nested encode/decode
/// (surrogate fields) must go through the same codec as the outer call.
#[derive(Debug, Clone)]
pub struct EnvelopeCodec {
    registry: Arc<ContractRegistry>,
}

impl EnvelopeCodec {
    pub fn new(registry: Arc<ContractRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ContractRegistry {
        &self.registry
    }

    /// Shared handle to the registry.
    pub fn registry_handle(&self) -> Arc<ContractRegistry> {
        Arc::clone(&self.registry)
    }

    /// Envelope-encode an optional value.
    ///
    /// `None` encodes to an empty buffer; it never gets a descriptor.
    pub fn encode(&self, value: Option<&DynValue>) -> Result<Vec<u8>, EnvelopeError> {
        match value {
            None => Ok(Vec::new()),
            Some(v) => self.encode_erased(v.type_id(), v.type_name(), v.as_any()),
        }
    }

    /// Envelope-encode a concrete value.
    pub fn encode_value<T>(&self, value: &T) -> Result<Vec<u8>, EnvelopeError>
    where
        T: Any + Send + Sync,
    {
        self.encode_erased(TypeId::of::<T>(), std::any::type_name::<T>(), value)
    }

    fn encode_erased(
        &self,
        type_id: TypeId,
        type_name: &'static str,
        value: &(dyn Any + Send + Sync),
    ) -> Result<Vec<u8>, EnvelopeError> {
        let entry = self
            .registry
            .by_type(type_id)
            .ok_or(EnvelopeError::UnknownType { type_name })?;

        trace!(type_name, contract = entry.contract_name(), "envelope encode");

        let content = entry.encode(value)?;
        encode_envelope(entry.contract_name(), &content)
    }

    /// Decode an envelope back into its dynamically typed value.
    ///
    /// Empty input is the null value.
    pub fn decode(&self, wire: &[u8]) -> Result<Option<DynValue>, EnvelopeError> {
        if wire.is_empty() {
            return Ok(None);
        }

        let view = parse_envelope(wire)?;
        let contract_name = view.descriptor.contract_name.as_str();

        let entry = self
            .registry
            .by_name(contract_name)
            .ok_or_else(|| EnvelopeError::UnknownContract { contract_name: contract_name.to_string() })?;

        trace!(contract = contract_name, type_name = entry.type_name(), "envelope decode");

        let value = entry.decode(view.content).map_err(|source| EnvelopeError::Content {
            contract_name: contract_name.to_string(),
            source,
        })?;
        Ok(Some(value))
    }

    /// Decode and unbox as `T`.
    pub fn decode_as<T: Any>(&self, wire: &[u8]) -> Result<Option<T>, EnvelopeError> {
        match self.decode(wire)? {
            None => Ok(None),
            Some(value) => value.downcast::<T>().map(Some).map_err(|other| {
                EnvelopeError::Schema(SchemaError::TypeMismatch {
                    expected: std::any::type_name::<T>(),
                    actual: other.type_name(),
                })
            }),
        }
    }

    /// Parse the framing only, leaving the content undecoded.
    ///
    /// Lets hosts route on contract name without knowing the type.
    pub fn read_descriptor<'a>(&self, wire: &'a [u8]) -> Result<Option<EnvelopeView<'a>>, EnvelopeError> {
        if wire.is_empty() {
            return Ok(None);
        }
        parse_envelope(wire).map(Some)
    }
}
