// ## 📂 File: `src/envelope/decode.rs`
//! Envelope framing (read side).
//!
//! Design notes:
//! - Zero-copy: the returned view borrows the content from the input.
//! - Exact: the frame must account for every input byte, so a truncated
//!   prefix of a valid envelope can never parse.

use byteorder::{ByteOrder, LittleEndian};

use crate::constants::{CONTENT_OFFSET_RESERVED, ENVELOPE_PREFIX_LEN};
use crate::envelope::types::{ContractDescriptor, EnvelopeError, EnvelopeView};
use crate::schema;
use crate::utils::fmt_bytes;

/// Parse framing and descriptor of a non-empty envelope.
pub fn parse_envelope(wire: &[u8]) -> Result<EnvelopeView<'_>, EnvelopeError> {
    if wire.len() < ENVELOPE_PREFIX_LEN {
        return Err(EnvelopeError::Truncated { need: ENVELOPE_PREFIX_LEN, have: wire.len() });
    }

    let raw_header_len = LittleEndian::read_i64(&wire[..ENVELOPE_PREFIX_LEN]);
    let header_len = usize::try_from(raw_header_len)
        .map_err(|_| EnvelopeError::InvalidHeaderLength(raw_header_len))?;
    let header_end = ENVELOPE_PREFIX_LEN
        .checked_add(header_len)
        .ok_or(EnvelopeError::InvalidHeaderLength(raw_header_len))?;

    if wire.len() < header_end {
        return Err(EnvelopeError::Truncated { need: header_end, have: wire.len() });
    }

    let descriptor: ContractDescriptor = schema::decode(&wire[ENVELOPE_PREFIX_LEN..header_end])
        .map_err(|e| {
            EnvelopeError::Malformed(format!(
                "contract descriptor {}: {}",
                fmt_bytes(&wire[ENVELOPE_PREFIX_LEN..header_end], 32),
                e
            ))
        })?;

    if descriptor.content_offset != CONTENT_OFFSET_RESERVED {
        return Err(EnvelopeError::InvalidContentOffset(descriptor.content_offset));
    }
    let content_size = usize::try_from(descriptor.content_size)
        .map_err(|_| EnvelopeError::Malformed(format!("negative content size {}", descriptor.content_size)))?;

    let expected = header_end
        .checked_add(content_size)
        .ok_or_else(|| EnvelopeError::Malformed(format!("content size {} overflows", content_size)))?;

    if wire.len() < expected {
        return Err(EnvelopeError::Truncated { need: expected, have: wire.len() });
    }
    if wire.len() > expected {
        return Err(EnvelopeError::LengthMismatch { expected, actual: wire.len() });
    }

    Ok(EnvelopeView {
        descriptor,
        header_len,
        content: &wire[header_end..expected],
    })
}
