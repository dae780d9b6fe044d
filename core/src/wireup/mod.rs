//! wireup/mod.rs
//! Host-facing assembly: configuration plus a builder that turns known-type
//! lists and discovery hooks into a ready serializer.

pub mod config;
pub mod builder;

pub use config::*;
pub use builder::*;
