//! registry/mod.rs
//! Bidirectional map between runtime types and contract names.
//!
//! Notes:
//! - Built once, immutable afterwards; lookups are lock-free shared reads.
//! - Primitives get fixed short codes, builtin records get `nes.*` names,
//!   everything else is named through `DataContract` or an explicit name.
//! - Each entry carries an erased encode/decode pair, so dispatch by runtime
//!   type is a table lookup instead of a class hierarchy.

pub mod types;
pub mod primitives;
pub mod provider;
pub mod registry;

pub use types::*;
pub use provider::*;
pub use registry::*;
