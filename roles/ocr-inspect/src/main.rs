use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ocr_inspect::args::{Args, Command};
use ocr_inspect::config::InspectConfig;
use ocr_inspect::{encode_request_file, inspect_file};

fn main() -> Result<()> {
    // stdout carries the report; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match Args::from_args() {
        Ok(args) => args,
        Err(help) => {
            eprintln!("{help}");
            std::process::exit(2);
        }
    };

    let config = InspectConfig::load(args.config_path.as_deref())
        .context("failed to load ocr-inspect configuration")?;
    info!(framing = ?config.framing, output = ?config.output, "Starting ocr-inspect");

    match args.command {
        Command::Decode(path) => {
            let inspection = inspect_file(&path, &config)?;
            print!("{}", inspection.rendered);
            if !inspection.result.valid && config.reject_invalid {
                error!("{} is not a valid OCR buffer", path.display());
                std::process::exit(1);
            }
        }
        Command::Encode(path) => {
            let encoded = encode_request_file(&path, &config)?;
            println!("{encoded}");
        }
    }

    Ok(())
}
