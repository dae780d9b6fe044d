//! Snapshot ⇄ SnapshotSurrogate.

use crate::envelope::{EnvelopeCodec, EnvelopeError};
use crate::surrogate::types::{Snapshot, SnapshotSurrogate};

impl Snapshot {
    /// Plain fields pass through; the payload is envelope-encoded.
    pub fn to_surrogate(&self, codec: &EnvelopeCodec) -> Result<SnapshotSurrogate, EnvelopeError> {
        Ok(SnapshotSurrogate {
            bucket_id: self.bucket_id.clone(),
            stream_id: self.stream_id.clone(),
            stream_revision: self.stream_revision,
            payload: codec.encode(self.payload.as_ref())?,
        })
    }

    pub fn from_surrogate(surrogate: SnapshotSurrogate, codec: &EnvelopeCodec) -> Result<Self, EnvelopeError> {
        let payload = codec.decode(&surrogate.payload)?;
        Ok(Snapshot {
            bucket_id: surrogate.bucket_id,
            stream_id: surrogate.stream_id,
            stream_revision: surrogate.stream_revision,
            payload,
        })
    }
}
