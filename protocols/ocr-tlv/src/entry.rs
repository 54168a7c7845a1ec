//! Per-entry validation against the catalog

use crate::catalog::{Catalog, ValueKind, OCR_CATALOG};
use crate::error::{TlvError, TlvResult};
use crate::parameter::{ParameterType, VerifyMethod};
use crate::uri::is_valid_uri;

/// Validate one entry against the built-in catalog.
pub fn validate_entry(parameter_type: ParameterType, length: u8, value: &[u8]) -> TlvResult<()> {
    OCR_CATALOG.validate_entry(parameter_type, length, value)
}

impl Catalog {
    /// Check a single `(type, length, value)` triple.
    ///
    /// Checks run in order (catalog membership, size limit, length
    /// consistency, then the kind-specific rule) and the first failure is
    /// returned.
    pub fn validate_entry(
        &self,
        parameter_type: ParameterType,
        length: u8,
        value: &[u8],
    ) -> TlvResult<()> {
        let code = parameter_type.code();
        let entry = self
            .lookup(code)
            .ok_or(TlvError::UnknownParameterType(code))?;

        let length = usize::from(length);
        if length > entry.max_size {
            return Err(TlvError::ParameterTooLarge {
                parameter_type,
                length,
                max_size: entry.max_size,
            });
        }
        if length != value.len() {
            return Err(TlvError::LengthMismatch {
                parameter_type,
                declared: length,
                actual: value.len(),
            });
        }

        match entry.kind {
            ValueKind::Boolean => match value {
                [0] | [1] => Ok(()),
                _ => Err(TlvError::InvalidBooleanValue(parameter_type)),
            },
            ValueKind::VerifyMethod => match value {
                [lo, hi] if VerifyMethod::try_from(u16::from_le_bytes([*lo, *hi])).is_ok() => {
                    Ok(())
                }
                _ => Err(TlvError::InvalidVerifyMethod(parameter_type)),
            },
            ValueKind::FixedU16 if length != 2 => Err(TlvError::WrongFieldSize {
                parameter_type,
                expected: 2,
                actual: length,
            }),
            ValueKind::FixedU16 | ValueKind::GenericString => Ok(()),
            ValueKind::Uri if !is_valid_uri(value) => Err(TlvError::InvalidUri(parameter_type)),
            ValueKind::Uri => Ok(()),
            ValueKind::Unimplemented => Err(TlvError::NotImplemented(parameter_type)),
        }
    }
}
