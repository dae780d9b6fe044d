//! surrogate/mod.rs
//! Domain records with dynamically typed fields, and their uniform stand-ins.
//!
//! Every dynamic field is envelope-encoded into an opaque byte blob, which
//! leaves surrogates made only of strings, integers and byte vectors: shapes
//! the schema codec handles natively.
//!
//! Conversions are explicit (`to_surrogate` / `from_surrogate`) and take the
//! `EnvelopeCodec` to use as an argument.

pub mod types;
pub mod event;
pub mod snapshot;

pub use types::*;
