// ## 📂 File: `src/envelope/encode.rs`
//! Envelope framing (write side).

use byteorder::{LittleEndian, WriteBytesExt};

use crate::constants::ENVELOPE_PREFIX_LEN;
use crate::envelope::types::{ContractDescriptor, EnvelopeError};
use crate::schema;

/// Frame already-encoded `content` under `contract_name`.
///
/// Layout:
///
/// ```text
/// [ header_length (8) ]
/// [ header (N)        ]
/// [ content (M)       ]
/// ```
pub fn encode_envelope(contract_name: &str, content: &[u8]) -> Result<Vec<u8>, EnvelopeError> {
    let content_size = i64::try_from(content.len())
        .map_err(|_| EnvelopeError::Malformed(format!("content too large: {} bytes", content.len())))?;

    let descriptor = ContractDescriptor::new(contract_name, content_size);
    let header = schema::encode(&descriptor)?;
    let header_len = i64::try_from(header.len())
        .map_err(|_| EnvelopeError::InvalidHeaderLength(i64::MAX))?;

    let expected = ENVELOPE_PREFIX_LEN + header.len() + content.len();
    let mut out = Vec::with_capacity(expected);

    out.write_i64::<LittleEndian>(header_len)
        .map_err(|e| EnvelopeError::Malformed(e.to_string()))?;
    out.extend_from_slice(&header);
    out.extend_from_slice(content);

    if out.len() != expected {
        return Err(EnvelopeError::LengthMismatch { expected, actual: out.len() });
    }

    Ok(out)
}
