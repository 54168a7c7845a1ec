//! Typed readers and constructors for parameter values

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::{TlvError, TlvResult};
use crate::parameter::{ParameterType, TlvParameter, VerifyMethod};

/// Decode a little-endian u16 value. The value must be exactly two bytes.
pub fn get_u16(param: &TlvParameter) -> TlvResult<u16> {
    match param.value.as_slice() {
        [lo, hi] => Ok(u16::from_le_bytes([*lo, *hi])),
        other => Err(TlvError::WrongFieldSize {
            parameter_type: param.parameter_type,
            expected: 2,
            actual: other.len(),
        }),
    }
}

pub fn get_bool(param: &TlvParameter) -> TlvResult<bool> {
    match param.value.as_slice() {
        [0] => Ok(false),
        [1] => Ok(true),
        [_] => Err(TlvError::InvalidBooleanValue(param.parameter_type)),
        other => Err(TlvError::WrongFieldSize {
            parameter_type: param.parameter_type,
            expected: 1,
            actual: other.len(),
        }),
    }
}

pub fn get_verify_method(param: &TlvParameter) -> TlvResult<VerifyMethod> {
    let raw = get_u16(param)?;
    VerifyMethod::try_from(raw).map_err(|_| TlvError::InvalidVerifyMethod(param.parameter_type))
}

/// Value as text, with one trailing NUL terminator removed. Invalid UTF-8 is
/// replaced rather than reported.
pub fn get_string(param: &TlvParameter) -> String {
    let bytes = param
        .value
        .strip_suffix(&[0])
        .unwrap_or(param.value.as_slice());
    String::from_utf8_lossy(bytes).into_owned()
}

impl TlvParameter {
    /// Build a parameter whose length is taken from `value`.
    pub fn new(parameter_type: ParameterType, value: Vec<u8>) -> TlvResult<Self> {
        let length = u8::try_from(value.len()).map_err(|_| TlvError::ValueTooLong {
            parameter_type,
            length: value.len(),
        })?;
        Ok(Self {
            parameter_type,
            length,
            value,
        })
    }

    pub fn from_code(code: u8, value: Vec<u8>) -> TlvResult<Self> {
        Self::new(ParameterType::from(code), value)
    }

    pub fn new_u16(parameter_type: ParameterType, value: u16) -> Self {
        Self {
            parameter_type,
            length: 2,
            value: value.to_le_bytes().to_vec(),
        }
    }

    pub fn new_bool(parameter_type: ParameterType, flag: bool) -> Self {
        Self {
            parameter_type,
            length: 1,
            value: alloc::vec![u8::from(flag)],
        }
    }

    /// Text value without a terminator.
    pub fn new_string(parameter_type: ParameterType, text: &str) -> TlvResult<Self> {
        Self::new(parameter_type, text.as_bytes().to_vec())
    }

    pub fn new_verify_method(method: VerifyMethod) -> Self {
        Self::new_u16(ParameterType::HttpsServerNameVerifyMethod, method.into())
    }
}
