//! Tolerant buffer parser
//!
//! Framing is strict: a truncated header or value stops the scan and the
//! whole buffer is rejected. Semantics are tolerant: an entry that fails
//! validation is still decoded, its error recorded, and the scan goes on so
//! that callers can inspect everything the buffer carried.

use alloc::vec::Vec;
use tracing::{debug, trace};

use crate::catalog::{Catalog, OCR_CATALOG};
use crate::error::{ErrorKind, TlvError};
use crate::parameter::{ParameterType, TlvParameter};
use crate::COMPACT_HEADER_SIZE;

/// Outcome of parsing one buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseResult {
    pub valid: bool,
    pub parameters: Vec<TlvParameter>,
    pub errors: Vec<TlvError>,
}

impl ParseResult {
    /// First parameter of the given type.
    pub fn get(&self, parameter_type: ParameterType) -> Option<&TlvParameter> {
        self.parameters
            .iter()
            .find(|param| param.parameter_type == parameter_type)
    }

    pub fn has_error(&self, kind: ErrorKind) -> bool {
        self.errors.iter().any(|err| err.kind() == kind)
    }

    fn framing_failure(mut self, error: TlvError) -> Self {
        debug!(%error, decoded = self.parameters.len(), "TLV framing error, buffer rejected");
        self.valid = false;
        self.parameters.clear();
        self.errors.push(error);
        self
    }
}

/// Parse a compact TLV buffer against the built-in catalog.
pub fn parse_buffer(buffer: &[u8]) -> ParseResult {
    OCR_CATALOG.parse_buffer(buffer)
}

impl Catalog {
    pub fn parse_buffer(&self, buffer: &[u8]) -> ParseResult {
        let mut result = ParseResult {
            valid: true,
            ..Default::default()
        };
        let mut offset = 0;

        while offset < buffer.len() {
            let header = offset;
            if buffer.len() - offset < COMPACT_HEADER_SIZE {
                return result.framing_failure(TlvError::IncompleteFraming { offset: header });
            }

            let parameter_type = ParameterType::from(buffer[offset]);
            let length = buffer[offset + 1];
            offset += COMPACT_HEADER_SIZE;

            let declared = usize::from(length);
            let available = buffer.len() - offset;
            if available < declared {
                return result.framing_failure(TlvError::InsufficientValueBytes {
                    offset: header,
                    declared,
                    available,
                });
            }

            let value = buffer[offset..offset + declared].to_vec();
            offset += declared;
            trace!(offset = header, %parameter_type, length, "decoded TLV entry");

            if let Err(error) = self.validate_entry(parameter_type, length, &value) {
                debug!(offset = header, %error, "TLV entry failed validation");
                result.valid = false;
                result.errors.push(error);
            }
            result.parameters.push(TlvParameter {
                parameter_type,
                length,
                value,
            });
        }

        if !result.parameters.is_empty() {
            let missing = self.check_presence(&result.parameters);
            if !missing.is_empty() {
                debug!(count = missing.len(), "TLV buffer fails presence rules");
                result.valid = false;
                result.errors.extend(missing);
            }
        }

        result
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
