//! Human and machine readable parse reports

use std::fmt::Write;

use ocr_tlv::{
    get_bool, get_string, get_u16, get_verify_method, ParseResult, TlvParameter, ValueKind,
    OCR_CATALOG,
};

use crate::config::OutputFormat;
use crate::error::InspectResult;

pub fn render(result: &ParseResult, output: OutputFormat) -> InspectResult<String> {
    match output {
        OutputFormat::Text => Ok(render_text(result)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
    }
}

pub fn render_text(result: &ParseResult) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "valid: {}", result.valid);
    let _ = writeln!(out, "parameters: {}", result.parameters.len());
    for (index, param) in result.parameters.iter().enumerate() {
        let _ = writeln!(
            out,
            "  [{index}] {} (0x{:02x}) len={} {}",
            param.parameter_type,
            param.parameter_type.code(),
            param.length,
            describe_value(param)
        );
    }
    let _ = writeln!(out, "errors: {}", result.errors.len());
    for error in &result.errors {
        let _ = writeln!(out, "  - {error}");
    }
    out
}

/// Render a value the way its catalog kind reads it, falling back to hex.
fn describe_value(param: &TlvParameter) -> String {
    let as_hex = || format!("0x{}", hex::encode(&param.value));
    let Some(entry) = OCR_CATALOG.lookup(param.parameter_type.code()) else {
        return as_hex();
    };
    match entry.kind {
        ValueKind::Boolean => get_bool(param)
            .map(|flag| flag.to_string())
            .unwrap_or_else(|_| as_hex()),
        ValueKind::FixedU16 => get_u16(param).map(|v| v.to_string()).unwrap_or_else(|_| as_hex()),
        ValueKind::VerifyMethod => get_verify_method(param)
            .map(|method| format!("{method:?}"))
            .unwrap_or_else(|_| as_hex()),
        ValueKind::Uri | ValueKind::GenericString => format!("{:?}", get_string(param)),
        ValueKind::Unimplemented => as_hex(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocr_tlv::{parse_buffer, OCR_EFI_NETWORK_DEVICE_PATH, OCR_HTTPS_CERT_SYNC_ROOT_CA};

    fn sample_buffer() -> Vec<u8> {
        let uri = b"https://example.com/boot";
        let mut buffer = vec![OCR_EFI_NETWORK_DEVICE_PATH, uri.len() as u8];
        buffer.extend_from_slice(uri);
        buffer.extend_from_slice(&[OCR_HTTPS_CERT_SYNC_ROOT_CA, 1, 1]);
        buffer
    }

    #[test]
    fn text_report_lists_parameters() {
        let report = render_text(&parse_buffer(&sample_buffer()));
        assert_eq!(
            report,
            "valid: true\n\
             parameters: 2\n\
             \x20 [0] OCR_EFI_NETWORK_DEVICE_PATH (0x01) len=24 \"https://example.com/boot\"\n\
             \x20 [1] OCR_HTTPS_CERT_SYNC_ROOT_CA (0x14) len=1 true\n\
             errors: 0\n"
        );
    }

    #[test]
    fn text_report_lists_errors_and_raw_values() {
        let buffer = [OCR_HTTPS_CERT_SYNC_ROOT_CA, 1, 5, 0x30, 1, 0xAB];
        let report = render_text(&parse_buffer(&buffer));
        assert!(report.starts_with("valid: false\n"));
        assert!(report.contains("OCR_HTTPS_CERT_SYNC_ROOT_CA (0x14) len=1 0x05"));
        assert!(report.contains("parameter type 0x30 (0x30) len=1 0xab"));
        assert!(report.contains("errors: 3\n"));
        assert!(report.contains("  - Missing mandatory parameter OCR_EFI_NETWORK_DEVICE_PATH"));
    }

    #[test]
    fn json_report_is_structured() {
        let json = render(&parse_buffer(&sample_buffer()), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["valid"], serde_json::Value::Bool(true));
        assert_eq!(value["parameters"].as_array().unwrap().len(), 2);
        assert_eq!(value["parameters"][1]["length"], 1);
        assert!(value["errors"].as_array().unwrap().is_empty());
    }
}
