//! Loading buffers from disk and bounding their size
//!
//! The parser does no admission control of its own, so every buffer is
//! checked against `max_buffer_len` here before it reaches the codec.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::{InputFormat, InspectConfig};
use crate::error::{Error, InspectResult};

/// Hex files may spend up to this many characters per buffer byte: two
/// digits plus separators and line breaks.
const HEX_CHARS_PER_BYTE: usize = 4;

pub fn read_buffer_file(path: &Path, config: &InspectConfig) -> InspectResult<Vec<u8>> {
    let io_error = |source: std::io::Error| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    let file_len = fs::metadata(path).map_err(io_error)?.len();
    let max_file_len = match config.input_format {
        InputFormat::Binary => config.max_buffer_len,
        InputFormat::Hex => config.max_buffer_len.saturating_mul(HEX_CHARS_PER_BYTE),
    };
    ensure_within_limit(usize::try_from(file_len).unwrap_or(usize::MAX), max_file_len)?;

    let raw = fs::read(path).map_err(io_error)?;
    debug!("Read {} bytes from {}", raw.len(), path.display());
    decode_input(&raw, config)
}

/// Turn file contents into buffer bytes according to `input_format`.
pub fn decode_input(raw: &[u8], config: &InspectConfig) -> InspectResult<Vec<u8>> {
    let max = config.max_buffer_len;
    match config.input_format {
        InputFormat::Binary => {
            ensure_within_limit(raw.len(), max)?;
            Ok(raw.to_vec())
        }
        InputFormat::Hex => {
            let digits: Vec<u8> = raw
                .iter()
                .copied()
                .filter(|b| !b.is_ascii_whitespace())
                .collect();
            // Two hex digits per byte, so the limit applies before decoding.
            ensure_within_limit(digits.len() / 2, max)?;
            Ok(hex::decode(digits)?)
        }
    }
}

fn ensure_within_limit(len: usize, max: usize) -> InspectResult<()> {
    if len > max {
        return Err(Error::InputTooLarge { len, max });
    }
    Ok(())
}
