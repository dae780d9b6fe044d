//! Known-type discovery hook.
//!
//! The crate never scans the host application for types. Hosts that want
//! discovery implement `KnownTypesProvider` and hand it to the builder.

use crate::registry::types::KnownType;

pub trait KnownTypesProvider {
    fn known_types(&self) -> Vec<KnownType>;
}

impl<F> KnownTypesProvider for F
where
    F: Fn() -> Vec<KnownType>,
{
    fn known_types(&self) -> Vec<KnownType> {
        self()
    }
}
