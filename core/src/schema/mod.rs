//! schema/mod.rs
//! Thin wrapper over the static schema codec (bincode + serde).
//!
//! Every encode/decode in the crate goes through here so the codec
//! configuration is defined exactly once.
//!
//! Non-responsibilities:
//! - Type erasure (see `registry`)
//! - Framing (see `envelope`)

pub mod types;
pub mod codec;

pub use types::*;
pub use codec::*;
