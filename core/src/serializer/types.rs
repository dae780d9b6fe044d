use std::any::TypeId;
use std::io::{Read, Write};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::envelope::EnvelopeCodec;
use crate::types::SerializerError;
use crate::value::DynValue;

/// A value that can be written at the top level of a serialized graph.
///
/// `Repr` is what the schema codec actually sees. Records with dynamically
/// typed fields map to their surrogate; plain contracts are their own repr.
pub trait Wire: Sized {
    type Repr: Serialize + DeserializeOwned;

    fn to_repr(&self, codec: &EnvelopeCodec) -> Result<Self::Repr, SerializerError>;

    fn from_repr(repr: Self::Repr, codec: &EnvelopeCodec) -> Result<Self, SerializerError>;
}

/// Serializer contract.
///
/// Implementations are reentrant: all state is fixed at construction, so one
/// instance may serve concurrent calls from many threads.
pub trait GraphSerializer: Send + Sync {
    /// Write `value` to `output`.
    fn serialize_into<T, W>(&self, output: &mut W, value: &T) -> Result<(), SerializerError>
    where
        T: Wire,
        W: Write;

    /// Read a `T` from the whole of `input`.
    fn deserialize_from<T, R>(&self, input: &mut R) -> Result<T, SerializerError>
    where
        T: Wire,
        R: Read;

    /// Schema-encode a boxed value with its registered type.
    fn serialize_dynamic(&self, value: &DynValue) -> Result<Vec<u8>, SerializerError>;

    /// Schema-decode `bytes` as the registered `content_type`.
    fn deserialize_dynamic(&self, bytes: &[u8], content_type: TypeId) -> Result<DynValue, SerializerError>;

    /// Runtime type registered under `contract_name`.
    fn content_type(&self, contract_name: &str) -> Result<TypeId, SerializerError>;

    fn serialize<T: Wire>(&self, value: &T) -> Result<Vec<u8>, SerializerError> {
        let mut out = Vec::new();
        self.serialize_into(&mut out, value)?;
        Ok(out)
    }

    fn deserialize<T: Wire>(&self, bytes: &[u8]) -> Result<T, SerializerError> {
        let mut input = bytes;
        self.deserialize_from(&mut input)
    }
}
