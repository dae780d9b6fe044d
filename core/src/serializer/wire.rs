//! `Wire` impls for plain contracts, domain records and record lists.

use crate::envelope::EnvelopeCodec;
use crate::registry::DataContract;
use crate::serializer::types::Wire;
use crate::surrogate::{EventMessage, EventMessageSurrogate, Snapshot, SnapshotSurrogate};
use crate::types::SerializerError;

impl<T> Wire for T
where
    T: DataContract + Clone,
{
    type Repr = T;

    fn to_repr(&self, _codec: &EnvelopeCodec) -> Result<T, SerializerError> {
        Ok(self.clone())
    }

    fn from_repr(repr: T, _codec: &EnvelopeCodec) -> Result<T, SerializerError> {
        Ok(repr)
    }
}

impl Wire for EventMessage {
    type Repr = EventMessageSurrogate;

    fn to_repr(&self, codec: &EnvelopeCodec) -> Result<EventMessageSurrogate, SerializerError> {
        Ok(self.to_surrogate(codec)?)
    }

    fn from_repr(repr: EventMessageSurrogate, codec: &EnvelopeCodec) -> Result<Self, SerializerError> {
        Ok(EventMessage::from_surrogate(repr, codec)?)
    }
}

impl Wire for Snapshot {
    type Repr = SnapshotSurrogate;

    fn to_repr(&self, codec: &EnvelopeCodec) -> Result<SnapshotSurrogate, SerializerError> {
        Ok(self.to_surrogate(codec)?)
    }

    fn from_repr(repr: SnapshotSurrogate, codec: &EnvelopeCodec) -> Result<Self, SerializerError> {
        Ok(Snapshot::from_surrogate(repr, codec)?)
    }
}

// Lists of domain records. Concrete so they cannot overlap the blanket
// contract impl above.
macro_rules! wire_list {
    ($($item:ty),* $(,)?) => {
        $(
            impl Wire for Vec<$item> {
                type Repr = Vec<<$item as Wire>::Repr>;

                fn to_repr(&self, codec: &EnvelopeCodec) -> Result<Self::Repr, SerializerError> {
                    self.iter().map(|item| item.to_repr(codec)).collect()
                }

                fn from_repr(repr: Self::Repr, codec: &EnvelopeCodec) -> Result<Self, SerializerError> {
                    repr.into_iter().map(|item| <$item>::from_repr(item, codec)).collect()
                }
            }
        )*
    };
}

wire_list!(EventMessage, Snapshot);
