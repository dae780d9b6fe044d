//! EventMessage ⇄ EventMessageSurrogate.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::envelope::{EnvelopeCodec, EnvelopeError};
use crate::surrogate::types::{EventMessage, EventMessageSurrogate, HeaderEntry};

impl EventMessage {
    /// Envelope-encode every header value and the body.
    pub fn to_surrogate(&self, codec: &EnvelopeCodec) -> Result<EventMessageSurrogate, EnvelopeError> {
        let headers = self
            .headers
            .iter()
            .map(|(key, value)| -> Result<HeaderEntry, EnvelopeError> {
                Ok(HeaderEntry {
                    key: key.clone(),
                    value: codec.encode(value.as_ref())?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(EventMessageSurrogate {
            headers,
            body: codec.encode(self.body.as_ref())?,
        })
    }

    /// Rebuild the message, decoding each blob through `codec`.
    ///
    /// An empty header blob is a null value. Keys must be unique.
    pub fn from_surrogate(surrogate: EventMessageSurrogate, codec: &EnvelopeCodec) -> Result<Self, EnvelopeError> {
        let mut headers = BTreeMap::new();

        for HeaderEntry { key, value } in surrogate.headers {
            let decoded = codec.decode(&value)?;

            match headers.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(decoded);
                }
                Entry::Occupied(slot) => {
                    return Err(EnvelopeError::Malformed(format!("duplicate header '{}'", slot.key())));
                }
            }
        }

        Ok(EventMessage {
            headers,
            body: codec.decode(&surrogate.body)?,
        })
    }
}
