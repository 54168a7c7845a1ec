//! Vendor-prefixed TLV framing
//!
//! Some embeddings carry each parameter with a vendor identifier and wider
//! type and length fields:
//!
//! ```text
//! [vendor_id: u16 LE][type: u16 LE][length: u32 LE][value: length bytes]
//! ```
//!
//! This framing is separate from the compact one handled by
//! [`crate::parse_buffer`] and [`crate::create_buffer`]; the two are never
//! mixed in one buffer. Decoding here is strict: the first problem aborts
//! and no partial set is returned.

use alloc::vec::Vec;
use tracing::debug;

use crate::error::{TlvError, TlvResult};
use crate::parameter::{ParameterType, TlvParameter};
use crate::INTEL_VENDOR_ID;

/// Header size: vendor ID (2) + type (2) + length (4).
pub const VENDOR_HEADER_SIZE: usize = 8;

/// Encode `params` with the vendor-prefixed framing.
pub fn encode_vendor_buffer(params: &[TlvParameter]) -> TlvResult<Vec<u8>> {
    let mut encoded = Vec::with_capacity(
        params
            .iter()
            .map(|param| VENDOR_HEADER_SIZE + param.value.len())
            .sum(),
    );
    for param in params {
        param.check_framing()?;

        encoded.extend_from_slice(&INTEL_VENDOR_ID.to_le_bytes());
        encoded.extend_from_slice(&u16::from(param.parameter_type.code()).to_le_bytes());
        encoded.extend_from_slice(&u32::from(param.length).to_le_bytes());
        encoded.extend_from_slice(&param.value);
    }
    Ok(encoded)
}

/// Decode a vendor-framed buffer into parameters without validating them.
pub fn decode_vendor_buffer(data: &[u8]) -> TlvResult<Vec<TlvParameter>> {
    let mut params = Vec::new();
    let mut offset = 0;

    while offset < data.len() {
        let (param, consumed) = decode_entry(data, offset).inspect_err(|error| {
            debug!(offset, %error, "vendor TLV buffer rejected");
        })?;
        params.push(param);
        offset += consumed;
    }

    Ok(params)
}

fn decode_entry(data: &[u8], offset: usize) -> TlvResult<(TlvParameter, usize)> {
    let rest = &data[offset..];
    if rest.len() < VENDOR_HEADER_SIZE {
        return Err(TlvError::IncompleteFraming { offset });
    }

    let vendor_id = u16::from_le_bytes([rest[0], rest[1]]);
    if vendor_id != INTEL_VENDOR_ID {
        return Err(TlvError::UnexpectedVendorId(vendor_id));
    }

    let raw_type = u16::from_le_bytes([rest[2], rest[3]]);
    let code = u8::try_from(raw_type).map_err(|_| TlvError::TypeOutOfRange(raw_type))?;
    let parameter_type = ParameterType::from(code);

    let raw_length = u32::from_le_bytes([rest[4], rest[5], rest[6], rest[7]]);
    let length = u8::try_from(raw_length).map_err(|_| TlvError::ValueTooLong {
        parameter_type,
        length: usize::try_from(raw_length).unwrap_or(usize::MAX),
    })?;
    let declared = usize::from(length);

    let available = rest.len() - VENDOR_HEADER_SIZE;
    if available < declared {
        return Err(TlvError::InsufficientValueBytes {
            offset,
            declared,
            available,
        });
    }

    let value = rest[VENDOR_HEADER_SIZE..VENDOR_HEADER_SIZE + declared].to_vec();
    Ok((
        TlvParameter {
            parameter_type,
            length,
            value,
        },
        VENDOR_HEADER_SIZE + declared,
    ))
}
