//! Environment variables are process-wide, so this is the only test in its
//! binary that touches them.

use std::fs;

use ocr_inspect::config::{Framing, InspectConfig, OutputFormat};

const OVERRIDES: [(&str, &str); 3] = [
    ("OCR_INSPECT_MAX_BUFFER_LEN", "77"),
    ("OCR_INSPECT_FRAMING", "vendor"),
    ("OCR_INSPECT_REJECT_INVALID", "false"),
];

#[test]
fn environment_overrides_file_and_defaults() {
    let path = std::env::temp_dir().join(format!("ocr-inspect-env-{}.toml", std::process::id()));
    fs::write(
        &path,
        r#"
max_buffer_len = 512
framing = "compact"
output = "json"
"#,
    )
    .unwrap();

    for (key, value) in OVERRIDES {
        std::env::set_var(key, value);
    }
    let from_file = InspectConfig::load(Some(&path));
    let from_defaults = InspectConfig::load(None);
    for (key, _) in OVERRIDES {
        std::env::remove_var(key);
    }

    let config = from_file.unwrap();
    assert_eq!(config.max_buffer_len, 77);
    assert_eq!(config.framing, Framing::Vendor);
    assert!(!config.reject_invalid);
    assert_eq!(config.output, OutputFormat::Json);

    let config = from_defaults.unwrap();
    assert_eq!(config.max_buffer_len, 77);
    assert_eq!(config.framing, Framing::Vendor);
    assert!(!config.reject_invalid);
    assert_eq!(config.output, OutputFormat::Text);

    let restored = InspectConfig::load(Some(&path)).unwrap();
    assert_eq!(restored.max_buffer_len, 512);
    assert_eq!(restored.framing, Framing::Compact);
    assert!(restored.reject_invalid);
}
