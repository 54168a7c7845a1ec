//! Compact TLV encoding

use alloc::vec::Vec;

use crate::error::TlvResult;
use crate::parameter::TlvParameter;

/// Serialize `params` as `[type][length][value]` entries.
///
/// Only framing is checked; semantic validation is the caller's job (see
/// [`crate::validate_parameters`]).
pub fn create_buffer(params: &[TlvParameter]) -> TlvResult<Vec<u8>> {
    let mut buffer = Vec::with_capacity(params.iter().map(TlvParameter::encoded_len).sum());
    append_to_buffer(&mut buffer, params)?;
    Ok(buffer)
}

/// Append encoded `params` to an existing buffer.
///
/// On error `buffer` is left as it was.
pub fn append_to_buffer(buffer: &mut Vec<u8>, params: &[TlvParameter]) -> TlvResult<()> {
    for param in params {
        param.check_framing()?;
    }
    for param in params {
        buffer.push(param.parameter_type.code());
        buffer.push(param.length);
        buffer.extend_from_slice(&param.value);
    }
    Ok(())
}

impl TlvParameter {
    /// Encode this entry on its own.
    pub fn encode(&self) -> TlvResult<Vec<u8>> {
        create_buffer(core::slice::from_ref(self))
    }
}
