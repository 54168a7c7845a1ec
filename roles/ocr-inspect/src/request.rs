//! TOML boot requests turned into OCR parameter sets
//!
//! ```toml
//! network_device_path = "https://boot.example.com/efi/bootx64.efi"
//! sync_root_ca = true
//! server_name = "boot.example.com"
//! verify_method = "full_name"
//! request_timeout_secs = 60
//! ```

use ocr_tlv::{
    create_buffer, encode_vendor_buffer, validate_parameters, ParameterType, TlvParameter,
    VerifyMethod,
};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::Framing;
use crate::error::{Error, InspectResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerifyMethodName {
    FullName,
    DomainSuffix,
    Other,
}

impl From<VerifyMethodName> for VerifyMethod {
    fn from(name: VerifyMethodName) -> Self {
        match name {
            VerifyMethodName::FullName => VerifyMethod::FullName,
            VerifyMethodName::DomainSuffix => VerifyMethod::DomainSuffix,
            VerifyMethodName::Other => VerifyMethod::Other,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BootRequest {
    pub network_device_path: Option<String>,
    pub file_device_path: Option<String>,
    pub device_path_length: Option<u16>,
    pub sync_root_ca: Option<bool>,
    pub server_name: Option<String>,
    pub verify_method: Option<VerifyMethodName>,
    pub request_timeout_secs: Option<u16>,
}

impl BootRequest {
    pub fn from_toml(text: &str) -> InspectResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Parameters in catalog order. Fields left out produce no parameter.
    pub fn to_parameters(&self) -> InspectResult<Vec<TlvParameter>> {
        let mut params = Vec::new();
        if let Some(path) = &self.network_device_path {
            params.push(TlvParameter::new_string(ParameterType::EfiNetworkDevicePath, path)?);
        }
        if let Some(path) = &self.file_device_path {
            params.push(TlvParameter::new_string(ParameterType::EfiFileDevicePath, path)?);
        }
        if let Some(len) = self.device_path_length {
            params.push(TlvParameter::new_u16(ParameterType::EfiDevicePathLength, len));
        }
        if let Some(flag) = self.sync_root_ca {
            params.push(TlvParameter::new_bool(ParameterType::HttpsCertSyncRootCa, flag));
        }
        if let Some(name) = &self.server_name {
            params.push(TlvParameter::new_string(ParameterType::HttpsCertServerName, name)?);
        }
        if let Some(method) = self.verify_method {
            params.push(TlvParameter::new_verify_method(method.into()));
        }
        if let Some(secs) = self.request_timeout_secs {
            params.push(TlvParameter::new_u16(ParameterType::HttpsRequestTimeout, secs));
        }
        Ok(params)
    }

    /// Validate the parameter set and encode it with `framing`.
    pub fn encode(&self, framing: Framing) -> InspectResult<Vec<u8>> {
        let params = self.to_parameters()?;
        let (valid, errors) = validate_parameters(&params);
        if !valid {
            warn!("Refusing to encode boot request with {} error(s)", errors.len());
            return Err(Error::Rejected(errors));
        }

        let buffer = match framing {
            Framing::Compact => create_buffer(&params)?,
            Framing::Vendor => encode_vendor_buffer(&params)?,
        };
        debug!("Encoded {} parameters into {} bytes", params.len(), buffer.len());
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocr_tlv::{parse_buffer, TlvError};

    const FULL_REQUEST: &str = r#"
        network_device_path = "https://example.com/boot"
        file_device_path = "\\EFI\\BOOT\\BOOTX64.EFI"
        device_path_length = 21
        sync_root_ca = true
        server_name = "example.com"
        verify_method = "domain_suffix"
        request_timeout_secs = 30
    "#;

    #[test]
    fn test_full_request_deserialization() {
        let request = BootRequest::from_toml(FULL_REQUEST).unwrap();
        assert_eq!(request.device_path_length, Some(21));
        assert_eq!(request.verify_method, Some(VerifyMethodName::DomainSuffix));
        assert_eq!(request.file_device_path.as_deref(), Some("\\EFI\\BOOT\\BOOTX64.EFI"));
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        assert!(matches!(
            BootRequest::from_toml("boot_order = 3"),
            Err(Error::Request(_))
        ));
    }

    #[test]
    fn full_request_encodes_to_a_valid_buffer() {
        let request = BootRequest::from_toml(FULL_REQUEST).unwrap();
        let buffer = request.encode(Framing::Compact).unwrap();

        let result = parse_buffer(&buffer);
        assert!(result.valid, "{:?}", result.errors);
        assert_eq!(result.parameters, request.to_parameters().unwrap());
    }

    #[test]
    fn minimal_request_is_a_single_entry() {
        let request = BootRequest::from_toml(r#"network_device_path = "http://a""#).unwrap();
        let buffer = request.encode(Framing::Compact).unwrap();
        let mut expected = vec![1, 8];
        expected.extend_from_slice(b"http://a");
        assert_eq!(buffer, expected);
    }

    #[test]
    fn vendor_framing_is_selectable() {
        let request = BootRequest::from_toml(r#"network_device_path = "http://a""#).unwrap();
        let buffer = request.encode(Framing::Vendor).unwrap();
        assert_eq!(&buffer[..8], &[0x86, 0x80, 0x01, 0x00, 0x08, 0x00, 0x00, 0x00]);
        assert_eq!(&buffer[8..], b"http://a");
    }

    #[test]
    fn request_without_network_path_is_refused() {
        let request = BootRequest {
            sync_root_ca: Some(false),
            ..Default::default()
        };
        match request.encode(Framing::Compact) {
            Err(Error::Rejected(errors)) => assert_eq!(
                errors,
                vec![TlvError::MissingMandatoryParameter(
                    ParameterType::EfiNetworkDevicePath
                )]
            ),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn file_path_requires_its_length() {
        let request = BootRequest {
            network_device_path: Some("https://example.com/boot".into()),
            file_device_path: Some("boot.efi".into()),
            ..Default::default()
        };
        let err = request.encode(Framing::Compact).unwrap_err();
        assert!(err
            .to_string()
            .contains("OCR_EFI_FILE_DEVICE_PATH requires OCR_EFI_DEVICE_PATH_LEN"));
    }

    #[test]
    fn invalid_uri_is_refused() {
        let request = BootRequest {
            network_device_path: Some("boot.example.com/efi".into()),
            ..Default::default()
        };
        let expected = vec![TlvError::InvalidUri(ParameterType::EfiNetworkDevicePath)];
        assert!(matches!(
            request.encode(Framing::Compact),
            Err(Error::Rejected(errors)) if errors == expected
        ));
    }

    #[test]
    fn overlong_strings_fail_before_validation() {
        let request = BootRequest {
            network_device_path: Some(format!("https://{}.com", "a".repeat(300))),
            ..Default::default()
        };
        assert!(matches!(
            request.to_parameters(),
            Err(Error::Tlv(TlvError::ValueTooLong { .. }))
        ));
    }
}
