//! Error types for TLV operations

use derive_more::Display;

use crate::parameter::ParameterType;

/// Errors reported while parsing, validating or encoding OCR buffers.
///
/// None of these abort the process. Framing errors stop the current parse,
/// every other kind is collected into the [`crate::ParseResult`] while the
/// scan continues.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TlvError {
    #[display("Unknown parameter type 0x{_0:02x}")]
    UnknownParameterType(u8),
    #[display("{parameter_type} is {length} bytes, limit is {max_size}")]
    ParameterTooLarge {
        parameter_type: ParameterType,
        length: usize,
        max_size: usize,
    },
    #[display("{_0} must be a single 0x00 or 0x01 byte")]
    InvalidBooleanValue(ParameterType),
    #[display("{_0} does not hold a supported verify method")]
    InvalidVerifyMethod(ParameterType),
    #[display("{parameter_type} must be {expected} bytes, got {actual}")]
    WrongFieldSize {
        parameter_type: ParameterType,
        expected: usize,
        actual: usize,
    },
    #[display("{_0} is not a valid URI")]
    InvalidUri(ParameterType),
    #[display("{_0} is not supported")]
    NotImplemented(ParameterType),
    #[display("Incomplete TLV header at offset {offset}")]
    IncompleteFraming { offset: usize },
    #[display("Entry at offset {offset} declares {declared} value bytes, {available} remain")]
    InsufficientValueBytes {
        offset: usize,
        declared: usize,
        available: usize,
    },
    #[display("Missing mandatory parameter {_0}")]
    MissingMandatoryParameter(ParameterType),
    #[display("{parameter_type} requires {depends_on}")]
    MissingDependentParameter {
        parameter_type: ParameterType,
        depends_on: ParameterType,
    },
    #[display("{parameter_type} declares {declared} bytes but carries {actual}")]
    LengthMismatch {
        parameter_type: ParameterType,
        declared: usize,
        actual: usize,
    },
    #[display("{parameter_type} value of {length} bytes does not fit a TLV entry")]
    ValueTooLong {
        parameter_type: ParameterType,
        length: usize,
    },
    #[display("Unexpected vendor ID 0x{_0:04x}")]
    UnexpectedVendorId(u16),
    #[display("Parameter type 0x{_0:04x} is out of range")]
    TypeOutOfRange(u16),
}

/// Field-less discriminant of [`TlvError`], handy for matching and counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    UnknownParameterType,
    ParameterTooLarge,
    InvalidBooleanValue,
    InvalidVerifyMethod,
    WrongFieldSize,
    InvalidUri,
    NotImplemented,
    IncompleteFraming,
    InsufficientValueBytes,
    MissingMandatoryParameter,
    MissingDependentParameter,
    LengthMismatch,
    ValueTooLong,
    UnexpectedVendorId,
    TypeOutOfRange,
}

impl TlvError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownParameterType(_) => ErrorKind::UnknownParameterType,
            Self::ParameterTooLarge { .. } => ErrorKind::ParameterTooLarge,
            Self::InvalidBooleanValue(_) => ErrorKind::InvalidBooleanValue,
            Self::InvalidVerifyMethod(_) => ErrorKind::InvalidVerifyMethod,
            Self::WrongFieldSize { .. } => ErrorKind::WrongFieldSize,
            Self::InvalidUri(_) => ErrorKind::InvalidUri,
            Self::NotImplemented(_) => ErrorKind::NotImplemented,
            Self::IncompleteFraming { .. } => ErrorKind::IncompleteFraming,
            Self::InsufficientValueBytes { .. } => ErrorKind::InsufficientValueBytes,
            Self::MissingMandatoryParameter(_) => ErrorKind::MissingMandatoryParameter,
            Self::MissingDependentParameter { .. } => ErrorKind::MissingDependentParameter,
            Self::LengthMismatch { .. } => ErrorKind::LengthMismatch,
            Self::ValueTooLong { .. } => ErrorKind::ValueTooLong,
            Self::UnexpectedVendorId(_) => ErrorKind::UnexpectedVendorId,
            Self::TypeOutOfRange(_) => ErrorKind::TypeOutOfRange,
        }
    }

    /// Whether the error stopped the scan rather than rejecting one entry.
    pub fn is_framing(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::IncompleteFraming | ErrorKind::InsufficientValueBytes
        )
    }
}

impl core::error::Error for TlvError {}

/// Result type for TLV operations
pub type TlvResult<T> = Result<T, TlvError>;
