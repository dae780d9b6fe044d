//! registry/registry.rs
//! Contract registry construction and lookup.

use std::any::TypeId;
use std::collections::HashMap;

use tracing::{debug, warn};

use crate::registry::primitives::{builtin_known_types, primitive_known_types};
use crate::registry::types::{ContractEntry, DuplicateContractPolicy, KnownType, RegistryError};
use crate::utils::is_blank;

/// Immutable `type ⇄ contract name` table.
///
/// Construction either yields a registry where every entry resolves in both
/// directions, or fails with `RegistryError`.
#[derive(Debug, Clone)]
pub struct ContractRegistry {
    by_type: HashMap<TypeId, ContractEntry>,
    by_name: HashMap<String, TypeId>,
    policy: DuplicateContractPolicy,
}

impl ContractRegistry {
    /// Build with the default policy (reject duplicates).
    pub fn new<I>(known_types: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = KnownType>,
    {
        Self::with_policy(known_types, DuplicateContractPolicy::default())
    }

    /// Build from primitives, builtins and `known_types`, in that order.
    pub fn with_policy<I>(
        known_types: I,
        policy: DuplicateContractPolicy,
    ) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = KnownType>,
    {
        let mut registry = Self {
            by_type: HashMap::new(),
            by_name: HashMap::new(),
            policy,
        };

        let candidates = primitive_known_types()
            .into_iter()
            .chain(builtin_known_types())
            .chain(known_types);

        for known in candidates {
            debug!(
                type_name = known.type_name(),
                contract = known.contract_name(),
                "registering known type"
            );
            registry.insert(known)?;
        }

        Ok(registry)
    }

    fn insert(&mut self, known: KnownType) -> Result<(), RegistryError> {
        if is_blank(known.contract_name()) {
            return Err(RegistryError::MissingContractName { type_name: known.type_name() });
        }

        // Same type already present.
        if let Some(existing) = self.by_type.get(&known.type_id()) {
            if existing.contract_name() == known.contract_name() {
                return Ok(());
            }
            match self.policy {
                DuplicateContractPolicy::Reject => {
                    return Err(RegistryError::DuplicateType {
                        type_name: known.type_name(),
                        existing: existing.contract_name().to_string(),
                        incoming: known.contract_name().to_string(),
                    });
                }
                DuplicateContractPolicy::LastWriteWins => {
                    warn!(
                        type_name = known.type_name(),
                        replaced = existing.contract_name(),
                        contract = known.contract_name(),
                        "known type re-registered under a new contract name"
                    );
                    let stale = existing.contract_name().to_string();
                    self.by_name.remove(&stale);
                }
            }
        }

        // Same name already taken by another type.
        if let Some(owner) = self.by_name.get(known.contract_name()).copied() {
            if owner != known.type_id() {
                let existing = self
                    .by_type
                    .get(&owner)
                    .map(ContractEntry::type_name)
                    .unwrap_or("<unknown>");
                match self.policy {
                    DuplicateContractPolicy::Reject => {
                        return Err(RegistryError::DuplicateContract {
                            contract_name: known.contract_name().to_string(),
                            existing,
                            incoming: known.type_name(),
                        });
                    }
                    DuplicateContractPolicy::LastWriteWins => {
                        warn!(
                            contract = known.contract_name(),
                            replaced = existing,
                            type_name = known.type_name(),
                            "contract name taken over by a later registration"
                        );
                        self.by_type.remove(&owner);
                    }
                }
            }
        }

        self.by_name.insert(known.contract_name().to_string(), known.type_id());
        self.by_type.insert(known.type_id(), ContractEntry::from_known(known));
        Ok(())
    }

    /// Entry for a runtime type.
    #[inline]
    pub fn by_type(&self, type_id: TypeId) -> Option<&ContractEntry> {
        self.by_type.get(&type_id)
    }

    /// Entry for a contract name.
    #[inline]
    pub fn by_name(&self, contract_name: &str) -> Option<&ContractEntry> {
        self.by_name
            .get(contract_name)
            .and_then(|type_id| self.by_type.get(type_id))
    }

    /// Runtime type registered under `contract_name`.
    pub fn content_type(&self, contract_name: &str) -> Option<TypeId> {
        self.by_name.get(contract_name).copied()
    }

    /// Contract name registered for `type_id`.
    pub fn contract_name(&self, type_id: TypeId) -> Option<&str> {
        self.by_type.get(&type_id).map(ContractEntry::contract_name)
    }

    pub fn contains_type(&self, type_id: TypeId) -> bool {
        self.by_type.contains_key(&type_id)
    }

    pub fn policy(&self) -> DuplicateContractPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.by_type.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }

    /// Registered contract names, sorted.
    pub fn contract_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_name.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Every name resolves to a type whose entry carries that same name.
    pub fn is_consistent(&self) -> bool {
        self.by_name.len() == self.by_type.len()
            && self.by_name.iter().all(|(name, type_id)| {
                self.by_type
                    .get(type_id)
                    .is_some_and(|entry| entry.contract_name() == name)
            })
    }
}
