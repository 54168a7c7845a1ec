//! One-time Configuration Request (OCR) boot parameter codec
//!
//! OCR boot options are carried to a manageability endpoint as a packed
//! sequence of TLV (Type-Length-Value) entries:
//!
//! ```text
//! [type: u8][length: u8][value: length bytes][type: u8][length: u8]...
//! ```
//!
//! This crate decodes such buffers into [`TlvParameter`]s, validates every
//! entry against the static [`catalog`], checks the cross-parameter rules
//! (mandatory and dependent parameters) and encodes parameter sets back into
//! wire bytes. The envelope that carries the buffer is the caller's concern.

#![no_std]

extern crate alloc;

pub mod accessors;
pub mod catalog;
pub mod encoder;
pub mod entry;
pub mod error;
pub mod parameter;
pub mod parser;
pub mod rules;
mod uri;
pub mod vendor;

pub use accessors::{get_bool, get_string, get_u16, get_verify_method};
pub use catalog::{Catalog, CatalogEntry, ValueKind, CATALOG_VERSION, OCR_CATALOG};
pub use encoder::{append_to_buffer, create_buffer};
pub use entry::validate_entry;
pub use error::{ErrorKind, TlvError, TlvResult};
pub use parameter::{ParameterType, TlvParameter, VerifyMethod};
pub use parser::{parse_buffer, ParseResult};
pub use rules::validate_parameters;
pub use vendor::{decode_vendor_buffer, encode_vendor_buffer};

/// Size of the compact entry header: one type octet and one length octet.
pub const COMPACT_HEADER_SIZE: usize = 2;

/// Largest value a compact entry can carry.
pub const MAX_VALUE_LEN: usize = u8::MAX as usize;

/// Vendor identifier prefixed to every vendor-framed entry.
pub const INTEL_VENDOR_ID: u16 = 0x8086;

// OCR parameter type codes.
pub const OCR_EFI_NETWORK_DEVICE_PATH: u8 = 1;
pub const OCR_EFI_FILE_DEVICE_PATH: u8 = 2;
pub const OCR_EFI_FULL_DEVICE_PATH: u8 = 3;
pub const OCR_EFI_DEVICE_PATH_LEN: u8 = 4;
pub const OCR_EFI_BOOT_OPTIONAL_DATA: u8 = 5;
pub const OCR_EFI_BOOT_OPTIONAL_DATA_LEN: u8 = 6;
pub const OCR_HTTPS_CERT_SYNC_ROOT_CA: u8 = 20;
pub const OCR_HTTPS_CERT_SERVER_NAME: u8 = 21;
pub const OCR_HTTPS_SERVER_NAME_VERIFY_METHOD: u8 = 22;
pub const OCR_HTTPS_SERVER_CERT_HASH_SHA256: u8 = 23;
pub const OCR_HTTPS_SERVER_CERT_HASH_SHA384: u8 = 24;
pub const OCR_HTTPS_SERVER_CERT_HASH_SHA512: u8 = 25;
pub const OCR_HTTPS_REQUEST_TIMEOUT: u8 = 26;
pub const OCR_HTTPS_USER_NAME: u8 = 27;
pub const OCR_HTTPS_PASSWORD: u8 = 28;
