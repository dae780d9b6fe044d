//! serializer/mod.rs
//! The narrow contract persistence and dispatch layers consume.
//!
//! - `GraphSerializer`: serialize/deserialize top-level values, plus the
//!   dynamic-type entry points.
//! - `Wire`: how a top-level value maps onto a schema-codec representation.
//! - `EnvelopeSerializer`: the registry-backed implementation.

pub mod types;
pub mod wire;
pub mod envelope;

pub use types::*;
pub use envelope::*;
