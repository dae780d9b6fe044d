// ## 📂 File: `src/registry/types.rs`

use std::any::{Any, TypeId};
use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::schema::{self, SchemaError};
use crate::utils::compose_contract_name;
use crate::value::DynValue;

/// Encodes an erased value with the schema codec of its registered type.
pub type EncodeFn = fn(&(dyn Any + Send + Sync)) -> Result<Vec<u8>, SchemaError>;

/// Decodes content bytes into an erased value of the registered type.
pub type DecodeFn = fn(&[u8]) -> Result<DynValue, SchemaError>;

/// Naming attribute for a registrable type.
///
/// The contract name is `NAMESPACE.NAME`, or just `NAME` when the namespace
/// is blank. A blank `NAME` is rejected when the registry is built.
pub trait DataContract: Serialize + DeserializeOwned + Send + Sync + 'static {
    const NAMESPACE: &'static str = "";
    const NAME: &'static str;

    fn contract_name() -> String {
        compose_contract_name(Self::NAMESPACE, Self::NAME)
    }
}

/// What to do when two registrations claim the same contract name or type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateContractPolicy {
    /// Fail construction.
    #[default]
    Reject,
    /// Later registration replaces the earlier one.
    LastWriteWins,
}

/// A candidate type handed to the registry at construction.
#[derive(Clone)]
pub struct KnownType {
    pub(crate) type_id: TypeId,
    pub(crate) type_name: &'static str,
    pub(crate) contract_name: String,
    pub(crate) encode: EncodeFn,
    pub(crate) decode: DecodeFn,
}

impl KnownType {
    /// Register `T` under the name its `DataContract` impl declares.
    pub fn of<T: DataContract>() -> Self {
        Self::named::<T>(T::contract_name())
    }

    /// Register `T` under an explicit contract name.
    pub fn named<T>(contract_name: impl Into<String>) -> Self
    where
        T: Serialize + DeserializeOwned + Send + Sync + 'static,
    {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            contract_name: contract_name.into(),
            encode: encode_erased::<T>,
            decode: decode_erased::<T>,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn contract_name(&self) -> &str {
        &self.contract_name
    }
}

impl fmt::Debug for KnownType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KnownType")
            .field("type", &self.type_name)
            .field("contract", &self.contract_name)
            .finish()
    }
}

/// One validated registry row: `(type_id, contract_name, encode, decode)`.
#[derive(Clone)]
pub struct ContractEntry {
    type_id: TypeId,
    type_name: &'static str,
    contract_name: String,
    encode: EncodeFn,
    decode: DecodeFn,
}

impl ContractEntry {
    pub(crate) fn from_known(known: KnownType) -> Self {
        Self {
            type_id: known.type_id,
            type_name: known.type_name,
            contract_name: known.contract_name,
            encode: known.encode,
            decode: known.decode,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn contract_name(&self) -> &str {
        &self.contract_name
    }

    /// Schema-encode a value of this entry's type.
    #[inline]
    pub fn encode(&self, value: &(dyn Any + Send + Sync)) -> Result<Vec<u8>, SchemaError> {
        (self.encode)(value)
    }

    /// Schema-decode content bytes into this entry's type.
    #[inline]
    pub fn decode(&self, content: &[u8]) -> Result<DynValue, SchemaError> {
        (self.decode)(content)
    }
}

impl fmt::Debug for ContractEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContractEntry")
            .field("type", &self.type_name)
            .field("contract", &self.contract_name)
            .finish()
    }
}

fn encode_erased<T>(value: &(dyn Any + Send + Sync)) -> Result<Vec<u8>, SchemaError>
where
    T: Serialize + Send + Sync + 'static,
{
    let typed = value.downcast_ref::<T>().ok_or(SchemaError::TypeMismatch {
        expected: std::any::type_name::<T>(),
        actual: "<erased>",
    })?;
    schema::encode(typed)
}

fn decode_erased<T>(content: &[u8]) -> Result<DynValue, SchemaError>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    schema::decode::<T>(content).map(DynValue::new)
}

#[derive(Debug)]
pub enum RegistryError {
    /// The type's naming attribute produced an empty/whitespace name.
    MissingContractName { type_name: &'static str },

    /// Two distinct types derive the same contract name.
    DuplicateContract {
        contract_name: String,
        existing: &'static str,
        incoming: &'static str,
    },

    /// The same type was registered under two names.
    DuplicateType {
        type_name: &'static str,
        existing: String,
        incoming: String,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use RegistryError::*;
        match self {
            MissingContractName { type_name } =>
                write!(f, "type '{}' has no usable contract name; give it a non-blank NAME", type_name),
            DuplicateContract { contract_name, existing, incoming } =>
                write!(f, "contract name '{}' claimed by both '{}' and '{}'", contract_name, existing, incoming),
            DuplicateType { type_name, existing, incoming } =>
                write!(f, "type '{}' registered as both '{}' and '{}'", type_name, existing, incoming),
        }
    }
}

impl std::error::Error for RegistryError {}
