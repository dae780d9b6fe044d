//! schema/codec.rs
//!
//! Design notes:
//! - Standard bincode configuration: little-endian, varint integers.
//! - A hard size limit keeps corrupt length fields from driving allocations.
//! - `decode` is exact: the whole slice must be consumed.

use bincode::config::{self, Config};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::constants::MAX_SCHEMA_LEN;
use crate::schema::types::SchemaError;

/// The one codec configuration used for descriptors, content and surrogates.
#[inline]
pub fn schema_config() -> impl Config {
    config::standard().with_limit::<MAX_SCHEMA_LEN>()
}

/// Encode `value` with the schema codec.
pub fn encode<T>(value: &T) -> Result<Vec<u8>, SchemaError>
where
    T: Serialize + ?Sized,
{
    Ok(bincode::serde::encode_to_vec(value, schema_config())?)
}

/// Decode a `T` that must span all of `bytes`.
pub fn decode<T>(bytes: &[u8]) -> Result<T, SchemaError>
where
    T: DeserializeOwned,
{
    let (value, consumed) = bincode::serde::decode_from_slice::<T, _>(bytes, schema_config())?;
    if consumed != bytes.len() {
        return Err(SchemaError::TrailingBytes { consumed, total: bytes.len() });
    }
    Ok(value)
}
