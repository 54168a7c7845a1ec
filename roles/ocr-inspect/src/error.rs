use std::path::PathBuf;

use ocr_tlv::TlvError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(#[from] ext_config::ConfigError),
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid hex input: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("input is {len} bytes, limit is {max}")]
    InputTooLarge { len: usize, max: usize },
    #[error("invalid boot request: {0}")]
    Request(#[from] toml::de::Error),
    #[error("boot request rejected: {}", join_errors(.0))]
    Rejected(Vec<TlvError>),
    #[error("TLV error: {0}")]
    Tlv(#[from] TlvError),
    #[error("failed to render JSON report: {0}")]
    Json(#[from] serde_json::Error),
}

fn join_errors(errors: &[TlvError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type InspectResult<T> = Result<T, Error>;
