//! Static parameter catalog
//!
//! One [`CatalogEntry`] per known parameter code describes how the value is
//! validated, how large it may be and how it relates to other parameters.
//! The table is built at compile time and indexed by code, so lookups are a
//! single array access and the catalog can be shared freely across threads.
//!
//! Integrators that need extra codes build their own table in a `const`
//! context and use the [`Catalog`] methods instead of the crate-level
//! functions:
//!
//! ```
//! use ocr_tlv::{Catalog, CatalogEntry, ValueKind, OCR_CATALOG};
//!
//! const ENTRIES: &[CatalogEntry] = &[
//!     CatalogEntry::new(40, "VENDOR_BOOT_TOKEN", 64, ValueKind::GenericString),
//! ];
//! static EXTENDED: Catalog = OCR_CATALOG.extend(2, ENTRIES);
//!
//! assert!(EXTENDED.lookup(40).is_some());
//! assert!(EXTENDED.lookup(1).is_some());
//! ```

use crate::parameter::ParameterType;
use crate::*;

/// Version of the built-in table, bumped whenever a row changes.
pub const CATALOG_VERSION: u16 = 1;

/// How a parameter value is checked by the entry validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueKind {
    /// One byte, `0x00` or `0x01`.
    Boolean,
    /// Little-endian u16 holding a [`crate::VerifyMethod`].
    VerifyMethod,
    /// Exactly two bytes, little-endian.
    FixedU16,
    /// Absolute URI with a scheme and a host.
    Uri,
    /// Opaque text, accepted as is.
    GenericString,
    /// Known code that this codec refuses until it is supported.
    Unimplemented,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub code: u8,
    pub name: &'static str,
    pub max_size: usize,
    pub kind: ValueKind,
    pub mandatory: bool,
    pub depends_on: Option<u8>,
}

impl CatalogEntry {
    pub const fn new(code: u8, name: &'static str, max_size: usize, kind: ValueKind) -> Self {
        Self {
            code,
            name,
            max_size,
            kind,
            mandatory: false,
            depends_on: None,
        }
    }

    pub const fn mandatory(mut self) -> Self {
        self.mandatory = true;
        self
    }

    pub const fn depends_on(mut self, code: u8) -> Self {
        self.depends_on = Some(code);
        self
    }

    pub const fn parameter_type(&self) -> ParameterType {
        ParameterType::from_code(self.code)
    }
}

/// Built-in OCR rows.
pub const OCR_ENTRIES: &[CatalogEntry] = &[
    CatalogEntry::new(
        OCR_EFI_NETWORK_DEVICE_PATH,
        "OCR_EFI_NETWORK_DEVICE_PATH",
        255,
        ValueKind::Uri,
    )
    .mandatory(),
    CatalogEntry::new(
        OCR_EFI_FILE_DEVICE_PATH,
        "OCR_EFI_FILE_DEVICE_PATH",
        255,
        ValueKind::GenericString,
    )
    .depends_on(OCR_EFI_DEVICE_PATH_LEN),
    CatalogEntry::new(
        OCR_EFI_FULL_DEVICE_PATH,
        "OCR_EFI_FULL_DEVICE_PATH",
        255,
        ValueKind::Unimplemented,
    ),
    CatalogEntry::new(
        OCR_EFI_DEVICE_PATH_LEN,
        "OCR_EFI_DEVICE_PATH_LEN",
        2,
        ValueKind::FixedU16,
    ),
    CatalogEntry::new(
        OCR_EFI_BOOT_OPTIONAL_DATA,
        "OCR_EFI_BOOT_OPTIONAL_DATA",
        255,
        ValueKind::Unimplemented,
    )
    .depends_on(OCR_EFI_BOOT_OPTIONAL_DATA_LEN),
    CatalogEntry::new(
        OCR_EFI_BOOT_OPTIONAL_DATA_LEN,
        "OCR_EFI_BOOT_OPTIONAL_DATA_LEN",
        2,
        ValueKind::FixedU16,
    ),
    CatalogEntry::new(
        OCR_HTTPS_CERT_SYNC_ROOT_CA,
        "OCR_HTTPS_CERT_SYNC_ROOT_CA",
        1,
        ValueKind::Boolean,
    ),
    CatalogEntry::new(
        OCR_HTTPS_CERT_SERVER_NAME,
        "OCR_HTTPS_CERT_SERVER_NAME",
        255,
        ValueKind::GenericString,
    ),
    CatalogEntry::new(
        OCR_HTTPS_SERVER_NAME_VERIFY_METHOD,
        "OCR_HTTPS_SERVER_NAME_VERIFY_METHOD",
        2,
        ValueKind::VerifyMethod,
    ),
    CatalogEntry::new(
        OCR_HTTPS_SERVER_CERT_HASH_SHA256,
        "OCR_HTTPS_SERVER_CERT_HASH_SHA256",
        32,
        ValueKind::Unimplemented,
    ),
    CatalogEntry::new(
        OCR_HTTPS_SERVER_CERT_HASH_SHA384,
        "OCR_HTTPS_SERVER_CERT_HASH_SHA384",
        48,
        ValueKind::Unimplemented,
    ),
    CatalogEntry::new(
        OCR_HTTPS_SERVER_CERT_HASH_SHA512,
        "OCR_HTTPS_SERVER_CERT_HASH_SHA512",
        64,
        ValueKind::Unimplemented,
    ),
    CatalogEntry::new(
        OCR_HTTPS_REQUEST_TIMEOUT,
        "OCR_HTTPS_REQUEST_TIMEOUT",
        2,
        ValueKind::FixedU16,
    ),
    CatalogEntry::new(
        OCR_HTTPS_USER_NAME,
        "OCR_HTTPS_USER_NAME",
        128,
        ValueKind::Unimplemented,
    ),
    CatalogEntry::new(
        OCR_HTTPS_PASSWORD,
        "OCR_HTTPS_PASSWORD",
        128,
        ValueKind::Unimplemented,
    ),
];

/// The built-in catalog used by the crate-level functions.
pub static OCR_CATALOG: Catalog = Catalog::from_entries(CATALOG_VERSION, OCR_ENTRIES);

/// Parameter metadata indexed by type code.
#[derive(Debug, Clone)]
pub struct Catalog {
    version: u16,
    slots: [Option<CatalogEntry>; 256],
}

impl Catalog {
    /// Build a catalog from `entries`. A later entry replaces an earlier one
    /// with the same code.
    pub const fn from_entries(version: u16, entries: &[CatalogEntry]) -> Self {
        Self::empty(version).with_entries(entries)
    }

    /// Copy of this catalog with `entries` added on top.
    pub const fn extend(&self, version: u16, entries: &[CatalogEntry]) -> Self {
        let base = Self {
            version,
            slots: self.slots,
        };
        base.with_entries(entries)
    }

    const fn empty(version: u16) -> Self {
        Self {
            version,
            slots: [None; 256],
        }
    }

    const fn with_entries(mut self, entries: &[CatalogEntry]) -> Self {
        let mut i = 0;
        while i < entries.len() {
            self.slots[entries[i].code as usize] = Some(entries[i]);
            i += 1;
        }
        self
    }

    pub const fn version(&self) -> u16 {
        self.version
    }

    pub const fn lookup(&self, code: u8) -> Option<&CatalogEntry> {
        self.slots[code as usize].as_ref()
    }

    /// Row name for `parameter_type` in this catalog.
    ///
    /// `Display` on [`ParameterType`] and [`crate::TlvError`] only knows the
    /// built-in names; use this to label codes an extended catalog adds.
    pub const fn name_of(&self, parameter_type: ParameterType) -> Option<&'static str> {
        match self.lookup(parameter_type.code()) {
            Some(entry) => Some(entry.name),
            None => None,
        }
    }

    /// Rows in ascending code order.
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.slots.iter().flatten()
    }

    pub fn mandatory_entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries().filter(|entry| entry.mandatory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn builtin_catalog_covers_every_named_type() {
        for code in 0..=u8::MAX {
            let parameter_type = ParameterType::from(code);
            assert_eq!(
                OCR_CATALOG.lookup(code).is_some(),
                parameter_type.is_recognized(),
                "code {code}"
            );
        }
        assert_eq!(OCR_CATALOG.entries().count(), OCR_ENTRIES.len());
        assert_eq!(OCR_CATALOG.version(), CATALOG_VERSION);
    }

    #[test]
    fn network_device_path_is_the_only_mandatory_row() {
        let mandatory: alloc::vec::Vec<_> = OCR_CATALOG
            .mandatory_entries()
            .map(|entry| entry.parameter_type())
            .collect();
        assert_eq!(mandatory, [ParameterType::EfiNetworkDevicePath]);
    }

    #[test]
    fn dependency_rows() {
        let file_path = OCR_CATALOG.lookup(OCR_EFI_FILE_DEVICE_PATH).unwrap();
        assert_eq!(file_path.kind, ValueKind::GenericString);
        assert_eq!(file_path.depends_on, Some(OCR_EFI_DEVICE_PATH_LEN));

        let path_len = OCR_CATALOG.lookup(OCR_EFI_DEVICE_PATH_LEN).unwrap();
        assert_eq!(path_len.kind, ValueKind::FixedU16);
        assert_eq!(path_len.max_size, 2);
        assert_eq!(path_len.depends_on, None);
    }

    #[test]
    fn https_rows() {
        let sync = OCR_CATALOG.lookup(OCR_HTTPS_CERT_SYNC_ROOT_CA).unwrap();
        assert_eq!((sync.kind, sync.max_size), (ValueKind::Boolean, 1));

        let verify = OCR_CATALOG
            .lookup(OCR_HTTPS_SERVER_NAME_VERIFY_METHOD)
            .unwrap();
        assert_eq!((verify.kind, verify.max_size), (ValueKind::VerifyMethod, 2));

        for code in [OCR_HTTPS_SERVER_CERT_HASH_SHA256, OCR_HTTPS_USER_NAME] {
            assert_eq!(
                OCR_CATALOG.lookup(code).unwrap().kind,
                ValueKind::Unimplemented
            );
        }
    }

    #[test]
    fn extended_catalog_keeps_builtin_rows() {
        const EXTRA: &[CatalogEntry] = &[
            CatalogEntry::new(40, "VENDOR_TOKEN", 16, ValueKind::GenericString),
            CatalogEntry::new(
                OCR_HTTPS_USER_NAME,
                "OCR_HTTPS_USER_NAME",
                128,
                ValueKind::GenericString,
            ),
        ];
        static EXTENDED: Catalog = OCR_CATALOG.extend(2, EXTRA);

        assert_eq!(EXTENDED.version(), 2);
        assert_eq!(EXTENDED.lookup(40).unwrap().name, "VENDOR_TOKEN");
        assert_eq!(
            EXTENDED.lookup(OCR_HTTPS_USER_NAME).unwrap().kind,
            ValueKind::GenericString
        );
        assert!(EXTENDED.lookup(OCR_EFI_NETWORK_DEVICE_PATH).unwrap().mandatory);
        assert!(OCR_CATALOG.lookup(40).is_none());
    }

    #[test]
    fn extended_names_come_from_the_catalog_not_display() {
        const EXTRA: &[CatalogEntry] =
            &[CatalogEntry::new(40, "VENDOR_TOKEN", 16, ValueKind::GenericString)];
        static EXTENDED: Catalog = OCR_CATALOG.extend(2, EXTRA);

        let token = ParameterType::from(40);
        assert_eq!(EXTENDED.name_of(token), Some("VENDOR_TOKEN"));
        assert_eq!(OCR_CATALOG.name_of(token), None);
        assert_eq!(token.to_string(), "parameter type 0x28");
        assert_eq!(
            EXTENDED.name_of(ParameterType::HttpsCertSyncRootCa),
            Some("OCR_HTTPS_CERT_SYNC_ROOT_CA")
        );
    }
}
