//! envelope/mod.rs
//! Self-describing binary frames for values of any registered type.
//!
//! Layout:
//!
//! ```text
//! [ header_length (8, i64 LE) ]
//! [ header (header_length)    ]  schema-encoded ContractDescriptor
//! [ content (content_size)    ]  schema-encoded value
//! ```
//!
//! Responsibilities:
//! - Frame and unframe with strict length accounting
//! - Resolve types through contract names only
//!
//! Non-responsibilities:
//! - Encryption
//! - Surrogate mapping of domain records

pub mod types;
pub mod encode;
pub mod decode;
pub mod codec;

pub use types::*;
pub use encode::*;
pub use decode::*;
pub use codec::*;
