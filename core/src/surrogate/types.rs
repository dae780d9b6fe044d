use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{builtin_contracts, DEFAULT_BUCKET_ID};
use crate::registry::DataContract;
use crate::value::DynValue;

/// An event with free-form headers and a body of any registered type.
#[derive(Debug, Default)]
pub struct EventMessage {
    /// Unstructured metadata; values may be of any registered type or null.
    pub headers: BTreeMap<String, Option<DynValue>>,
    /// The event itself. `None` is the absent body.
    pub body: Option<DynValue>,
}

impl EventMessage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(body: DynValue) -> Self {
        Self { headers: BTreeMap::new(), body: Some(body) }
    }

    pub fn with_header(mut self, key: impl Into<String>, value: DynValue) -> Self {
        self.headers.insert(key.into(), Some(value));
        self
    }

    /// Header present with a null value.
    pub fn with_null_header(mut self, key: impl Into<String>) -> Self {
        self.headers.insert(key.into(), None);
        self
    }

    /// Value of header `key`; `None` when missing or null.
    pub fn header(&self, key: &str) -> Option<&DynValue> {
        self.headers.get(key).and_then(Option::as_ref)
    }
}

/// Materialized view of a stream at a given revision.
#[derive(Debug)]
pub struct Snapshot {
    pub bucket_id: String,
    pub stream_id: String,
    pub stream_revision: i32,
    pub payload: Option<DynValue>,
}

impl Snapshot {
    /// Snapshot in the default bucket.
    pub fn new(stream_id: impl Into<String>, stream_revision: i32, payload: Option<DynValue>) -> Self {
        Self::with_bucket(DEFAULT_BUCKET_ID, stream_id, stream_revision, payload)
    }

    pub fn with_bucket(
        bucket_id: impl Into<String>,
        stream_id: impl Into<String>,
        stream_revision: i32,
        payload: Option<DynValue>,
    ) -> Self {
        Self {
            bucket_id: bucket_id.into(),
            stream_id: stream_id.into(),
            stream_revision,
            payload,
        }
    }
}

/// One header: key plus envelope-encoded value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderEntry {
    pub key: String,
    pub value: Vec<u8>,
}

/// Wire stand-in for `EventMessage`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMessageSurrogate {
    pub headers: Vec<HeaderEntry>,
    /// Envelope bytes; empty when the body is absent.
    pub body: Vec<u8>,
}

impl DataContract for EventMessageSurrogate {
    const NAMESPACE: &'static str = builtin_contracts::EVENT_MESSAGE_NAMESPACE;
    const NAME: &'static str = builtin_contracts::EVENT_MESSAGE_NAME;
}

/// Wire stand-in for `Snapshot`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotSurrogate {
    pub bucket_id: String,
    pub stream_id: String,
    pub stream_revision: i32,
    /// Envelope bytes; empty when the payload is absent.
    pub payload: Vec<u8>,
}

impl DataContract for SnapshotSurrogate {
    const NAMESPACE: &'static str = builtin_contracts::SNAPSHOT_NAMESPACE;
    const NAME: &'static str = builtin_contracts::SNAPSHOT_NAME;
}
