//! OCR parameter types and the decoded TLV entry

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::catalog::OCR_CATALOG;
use crate::error::{TlvError, TlvResult};
use crate::*;

/// Identifier of an OCR boot parameter.
///
/// Codes outside the built-in set decode to [`ParameterType::Unrecognized`]
/// so that untrusted buffers never fail to convert.
///
/// Identity is the wire code: equality, hashing and ordering compare
/// [`ParameterType::code`], so a hand-built `Unrecognized(1)` is the same
/// type as `EfiNetworkDevicePath`. Use [`ParameterType::canonical`] before
/// matching on variants. Serialized as the bare code.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(
    feature = "with_serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "u8", into = "u8")
)]
pub enum ParameterType {
    EfiNetworkDevicePath,
    EfiFileDevicePath,
    EfiFullDevicePath,
    EfiDevicePathLength,
    EfiBootOptionalData,
    EfiBootOptionalDataLength,
    HttpsCertSyncRootCa,
    HttpsCertServerName,
    HttpsServerNameVerifyMethod,
    HttpsServerCertHashSha256,
    HttpsServerCertHashSha384,
    HttpsServerCertHashSha512,
    HttpsRequestTimeout,
    HttpsUserName,
    HttpsPassword,
    Unrecognized(u8),
}

impl ParameterType {
    /// Wire code of this parameter type.
    pub const fn code(self) -> u8 {
        match self {
            Self::EfiNetworkDevicePath => OCR_EFI_NETWORK_DEVICE_PATH,
            Self::EfiFileDevicePath => OCR_EFI_FILE_DEVICE_PATH,
            Self::EfiFullDevicePath => OCR_EFI_FULL_DEVICE_PATH,
            Self::EfiDevicePathLength => OCR_EFI_DEVICE_PATH_LEN,
            Self::EfiBootOptionalData => OCR_EFI_BOOT_OPTIONAL_DATA,
            Self::EfiBootOptionalDataLength => OCR_EFI_BOOT_OPTIONAL_DATA_LEN,
            Self::HttpsCertSyncRootCa => OCR_HTTPS_CERT_SYNC_ROOT_CA,
            Self::HttpsCertServerName => OCR_HTTPS_CERT_SERVER_NAME,
            Self::HttpsServerNameVerifyMethod => OCR_HTTPS_SERVER_NAME_VERIFY_METHOD,
            Self::HttpsServerCertHashSha256 => OCR_HTTPS_SERVER_CERT_HASH_SHA256,
            Self::HttpsServerCertHashSha384 => OCR_HTTPS_SERVER_CERT_HASH_SHA384,
            Self::HttpsServerCertHashSha512 => OCR_HTTPS_SERVER_CERT_HASH_SHA512,
            Self::HttpsRequestTimeout => OCR_HTTPS_REQUEST_TIMEOUT,
            Self::HttpsUserName => OCR_HTTPS_USER_NAME,
            Self::HttpsPassword => OCR_HTTPS_PASSWORD,
            Self::Unrecognized(code) => code,
        }
    }

    pub const fn from_code(code: u8) -> Self {
        match code {
            OCR_EFI_NETWORK_DEVICE_PATH => Self::EfiNetworkDevicePath,
            OCR_EFI_FILE_DEVICE_PATH => Self::EfiFileDevicePath,
            OCR_EFI_FULL_DEVICE_PATH => Self::EfiFullDevicePath,
            OCR_EFI_DEVICE_PATH_LEN => Self::EfiDevicePathLength,
            OCR_EFI_BOOT_OPTIONAL_DATA => Self::EfiBootOptionalData,
            OCR_EFI_BOOT_OPTIONAL_DATA_LEN => Self::EfiBootOptionalDataLength,
            OCR_HTTPS_CERT_SYNC_ROOT_CA => Self::HttpsCertSyncRootCa,
            OCR_HTTPS_CERT_SERVER_NAME => Self::HttpsCertServerName,
            OCR_HTTPS_SERVER_NAME_VERIFY_METHOD => Self::HttpsServerNameVerifyMethod,
            OCR_HTTPS_SERVER_CERT_HASH_SHA256 => Self::HttpsServerCertHashSha256,
            OCR_HTTPS_SERVER_CERT_HASH_SHA384 => Self::HttpsServerCertHashSha384,
            OCR_HTTPS_SERVER_CERT_HASH_SHA512 => Self::HttpsServerCertHashSha512,
            OCR_HTTPS_REQUEST_TIMEOUT => Self::HttpsRequestTimeout,
            OCR_HTTPS_USER_NAME => Self::HttpsUserName,
            OCR_HTTPS_PASSWORD => Self::HttpsPassword,
            other => Self::Unrecognized(other),
        }
    }

    /// Named variant for known codes, `Unrecognized` only for the rest.
    pub const fn canonical(self) -> Self {
        Self::from_code(self.code())
    }

    pub const fn is_recognized(self) -> bool {
        !matches!(self.canonical(), Self::Unrecognized(_))
    }
}

impl PartialEq for ParameterType {
    fn eq(&self, other: &Self) -> bool {
        self.code() == other.code()
    }
}

impl Eq for ParameterType {}

impl Hash for ParameterType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code().hash(state);
    }
}

impl PartialOrd for ParameterType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ParameterType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code().cmp(&other.code())
    }
}

impl From<u8> for ParameterType {
    fn from(code: u8) -> Self {
        Self::from_code(code)
    }
}

impl From<ParameterType> for u8 {
    fn from(parameter_type: ParameterType) -> Self {
        parameter_type.code()
    }
}

/// Renders the built-in catalog name, or the hex code when the built-in
/// catalog has no row for it. Extended catalogs label their own codes with
/// [`crate::Catalog::name_of`].
impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match OCR_CATALOG.lookup(self.code()) {
            Some(entry) => f.write_str(entry.name),
            None => write!(f, "parameter type 0x{:02x}", self.code()),
        }
    }
}

/// HTTPS server name verification method (parameter type 22).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum VerifyMethod {
    FullName = 1,
    DomainSuffix = 2,
    Other = 3,
}

impl TryFrom<u16> for VerifyMethod {
    type Error = u16;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::FullName),
            2 => Ok(Self::DomainSuffix),
            3 => Ok(Self::Other),
            other => Err(other),
        }
    }
}

impl From<VerifyMethod> for u16 {
    fn from(method: VerifyMethod) -> Self {
        method as u16
    }
}

/// A single decoded TLV entry.
///
/// `length` is the Length octet as read from (or to be written to) the wire.
/// The parser never re-derives it from `value`, so a caller-built parameter
/// whose `length` disagrees with `value.len()` is reported by the validator
/// and refused by the encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TlvParameter {
    pub parameter_type: ParameterType,
    pub length: u8,
    pub value: Vec<u8>,
}

impl TlvParameter {
    /// Number of bytes this entry occupies in compact framing.
    pub fn encoded_len(&self) -> usize {
        COMPACT_HEADER_SIZE + self.value.len()
    }

    /// Ensure the entry can be framed: the value fits a Length octet and the
    /// declared length matches it.
    pub(crate) fn check_framing(&self) -> TlvResult<()> {
        if self.value.len() > MAX_VALUE_LEN {
            return Err(TlvError::ValueTooLong {
                parameter_type: self.parameter_type,
                length: self.value.len(),
            });
        }
        if usize::from(self.length) != self.value.len() {
            return Err(TlvError::LengthMismatch {
                parameter_type: self.parameter_type,
                declared: usize::from(self.length),
                actual: self.value.len(),
            });
        }
        Ok(())
    }
}
