use std::path::Path;

use ext_config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

/// How `decode` reads its input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Hex text; whitespace and line breaks are ignored.
    #[default]
    Hex,
    /// Raw buffer bytes.
    Binary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Wire framing used by both commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framing {
    /// `[type: u8][length: u8][value]`
    #[default]
    Compact,
    /// `[vendor: u16][type: u16][length: u32][value]`
    Vendor,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InspectConfig {
    /// Largest decoded buffer accepted before parsing.
    pub max_buffer_len: usize,
    pub input_format: InputFormat,
    pub output: OutputFormat,
    pub framing: Framing,
    /// Exit non-zero when a decoded buffer is invalid.
    pub reject_invalid: bool,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            max_buffer_len: 4096,
            input_format: InputFormat::default(),
            output: OutputFormat::default(),
            framing: Framing::default(),
            reject_invalid: true,
        }
    }
}

impl InspectConfig {
    pub const DEFAULT_CONFIG_PATH: &'static str = "ocr-inspect.toml";
    pub const ENV_PREFIX: &'static str = "OCR_INSPECT";

    /// Load from `path` (required when given; the optional default file
    /// otherwise), then apply `OCR_INSPECT_*` environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).format(FileFormat::Toml),
            None => File::new(Self::DEFAULT_CONFIG_PATH, FileFormat::Toml).required(false),
        };

        Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix(Self::ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InspectConfig::default();
        assert_eq!(config.max_buffer_len, 4096);
        assert_eq!(config.input_format, InputFormat::Hex);
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.framing, Framing::Compact);
        assert!(config.reject_invalid);
    }

    #[test]
    fn test_full_config_deserialization() {
        let toml_str = r#"
            max_buffer_len = 512
            input_format = "binary"
            output = "json"
            framing = "vendor"
            reject_invalid = false
        "#;
        let config: InspectConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config,
            InspectConfig {
                max_buffer_len: 512,
                input_format: InputFormat::Binary,
                output: OutputFormat::Json,
                framing: Framing::Vendor,
                reject_invalid: false,
            }
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml_str = r#"
            output = "json"
        "#;
        let config: InspectConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.max_buffer_len, 4096);
        assert_eq!(config.framing, Framing::Compact);
    }

    #[test]
    fn test_empty_config_has_all_defaults() {
        let config: InspectConfig = toml::from_str("").unwrap();
        assert_eq!(config, InspectConfig::default());
    }

    #[test]
    fn test_unknown_framing_is_rejected() {
        let result: Result<InspectConfig, _> = toml::from_str(r#"framing = "xml""#);
        assert!(result.is_err());
    }
}
