pub mod args;
pub mod config;
pub mod error;
pub mod input;
pub mod report;
pub mod request;

use std::fs;
use std::path::Path;

use ocr_tlv::{decode_vendor_buffer, parse_buffer, validate_parameters, ParseResult};
use tracing::{debug, info};

use crate::config::{Framing, InspectConfig};
use crate::error::{Error, InspectResult};
use crate::request::BootRequest;

/// A parsed buffer together with its rendered report.
#[derive(Debug, Clone)]
pub struct Inspection {
    pub result: ParseResult,
    pub rendered: String,
}

/// Parse `buffer` with the configured framing and render the report.
pub fn inspect_bytes(buffer: &[u8], config: &InspectConfig) -> InspectResult<Inspection> {
    let result = match config.framing {
        Framing::Compact => parse_buffer(buffer),
        Framing::Vendor => parse_vendor(buffer),
    };
    info!(
        valid = result.valid,
        parameters = result.parameters.len(),
        errors = result.errors.len(),
        "Inspected {} byte buffer",
        buffer.len()
    );
    let rendered = report::render(&result, config.output)?;
    Ok(Inspection { result, rendered })
}

pub fn inspect_file(path: &Path, config: &InspectConfig) -> InspectResult<Inspection> {
    let buffer = input::read_buffer_file(path, config)?;
    inspect_bytes(&buffer, config)
}

/// Read a TOML boot request and return the encoded buffer as lowercase hex.
pub fn encode_request_file(path: &Path, config: &InspectConfig) -> InspectResult<String> {
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let buffer = BootRequest::from_toml(&text)?.encode(config.framing)?;
    Ok(hex::encode(buffer))
}

// Vendor framing is decoded strictly; the rule pass then runs over the
// decoded set so the report has the same shape as a compact parse.
fn parse_vendor(buffer: &[u8]) -> ParseResult {
    match decode_vendor_buffer(buffer) {
        Ok(parameters) => {
            let (valid, errors) = validate_parameters(&parameters);
            ParseResult {
                valid,
                parameters,
                errors,
            }
        }
        Err(error) => {
            debug!(%error, "Vendor framed buffer rejected");
            ParseResult {
                valid: false,
                parameters: Vec::new(),
                errors: vec![error],
            }
        }
    }
}
