//! Fixed contract codes for primitive/value types and the builtin records.

use uuid::Uuid;

use crate::constants::primitive_codes as codes;
use crate::envelope::ContractDescriptor;
use crate::registry::types::KnownType;
use crate::surrogate::{EventMessageSurrogate, SnapshotSurrogate};

/// Primitive types with their short codes, in registration order.
pub fn primitive_known_types() -> Vec<KnownType> {
    vec![
        KnownType::named::<String>(codes::STRING),
        KnownType::named::<char>(codes::CHAR),
        KnownType::named::<i16>(codes::I16),
        KnownType::named::<i32>(codes::I32),
        KnownType::named::<i64>(codes::I64),
        KnownType::named::<u16>(codes::U16),
        KnownType::named::<u32>(codes::U32),
        KnownType::named::<u64>(codes::U64),
        KnownType::named::<f64>(codes::F64),
        KnownType::named::<f32>(codes::F32),
        KnownType::named::<bool>(codes::BOOL),
        KnownType::named::<Uuid>(codes::UUID),
    ]
}

/// Records defined by this crate that every registry knows.
pub fn builtin_known_types() -> Vec<KnownType> {
    vec![
        KnownType::of::<ContractDescriptor>(),
        KnownType::of::<EventMessageSurrogate>(),
        KnownType::of::<SnapshotSurrogate>(),
    ]
}
