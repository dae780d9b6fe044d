//! envelope-core
//!
//! Polymorphic envelope serialization over a static schema codec.
//! Values of any registered type travel as self-describing envelopes;
//! domain records with dynamic fields travel as surrogates; output can be
//! wrapped in AES-128-CBC.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;
pub mod value;

// Codec layers
pub mod schema;
pub mod registry;
pub mod envelope;
pub mod surrogate;

// Serializers
pub mod serializer;
pub mod crypto;
pub mod wireup;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::crypto::{CryptoError, EncryptingSerializer, EncryptionKey};
    pub use crate::envelope::{ContractDescriptor, EnvelopeCodec, EnvelopeError, EnvelopeView};
    pub use crate::registry::{
        ContractRegistry, DataContract, DuplicateContractPolicy, KnownType, KnownTypesProvider, RegistryError,
    };
    pub use crate::serializer::{EnvelopeSerializer, GraphSerializer, Wire};
    pub use crate::surrogate::{EventMessage, Snapshot};
    pub use crate::types::SerializerError;
    pub use crate::value::DynValue;
    pub use crate::wireup::{ConfiguredSerializer, SerializerBuilder, SerializerConfig};
}
