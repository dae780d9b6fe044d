//! Stable wire constants shared by the envelope, registry and crypto layers.

/// Length of the fixed prefix carrying the encoded descriptor length.
/// Little-endian `i64`.
pub const ENVELOPE_PREFIX_LEN: usize = 8;

/// Reserved descriptor field; always written as zero.
pub const CONTENT_OFFSET_RESERVED: i64 = 0;

/// Upper bound the schema codec accepts for a single encode/decode call (64 MiB).
/// Guards against allocation blowups from corrupt length fields.
pub const MAX_SCHEMA_LEN: usize = 64 * 1024 * 1024;

/// AES-128 key length in bytes.
pub const KEY_LEN_16: usize = 16;

/// CBC initialization vector length (one AES block).
pub const IV_LEN_16: usize = 16;

/// Bucket used when a snapshot is created without an explicit one.
pub const DEFAULT_BUCKET_ID: &str = "default";

/// Fixed short contract codes for primitive/value types.
///
/// These show up once per header value, so they stay as short as possible.
pub mod primitive_codes {
    pub const STRING: &str = "s";
    pub const CHAR: &str = "c";
    pub const I16: &str = "i16";
    pub const I32: &str = "i32";
    pub const I64: &str = "i64";
    pub const U16: &str = "u16";
    pub const U32: &str = "u32";
    pub const U64: &str = "u64";
    pub const F64: &str = "dbl";
    pub const F32: &str = "sng";
    pub const BOOL: &str = "b";
    pub const UUID: &str = "g";
}

/// Contract naming for the records this crate defines itself.
pub mod builtin_contracts {
    /// Envelope descriptor: `nes.proto.mc`.
    pub const DESCRIPTOR_NAMESPACE: &str = "nes.proto";
    pub const DESCRIPTOR_NAME: &str = "mc";

    /// Event message surrogate: `nes.em`.
    pub const EVENT_MESSAGE_NAMESPACE: &str = "nes";
    pub const EVENT_MESSAGE_NAME: &str = "em";

    /// Snapshot surrogate: `nes.sh`.
    pub const SNAPSHOT_NAMESPACE: &str = "nes";
    pub const SNAPSHOT_NAME: &str = "sh";
}
