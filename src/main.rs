//! Command-line entry point for figma-export.
//!
//! All runtime configuration comes from the environment, optionally loaded
//! from a `.env` file:
//!
//! - `FIGMA_TOKEN` - personal access token (required)
//! - `FIGMA_FILE_KEY` - key of the file to export (required)
//! - `FIGMA_OUTPUT_DIR` - output directory (default `./screens`)
//! - `FIGMA_FORMATS` - comma-separated format order, e.g. `svg,png`
//! - `FIGMA_INCLUDE_DIMENSIONS` - `true` to append `-<w>x<h>` to filenames
//! - `FIGMA_CALL_DELAY_MS` - delay between remote calls in milliseconds
//! - `FIGMA_TARGET_SIZE` - exact `WIDTHxHEIGHT` frame filter, e.g. `375x812`

use std::process::ExitCode;
use std::time::Duration;

use figma_export::{Config, Exporter};

fn config_from_env() -> Result<Config, String> {
    let mut config = Config::default();

    config.api.token = std::env::var("FIGMA_TOKEN").unwrap_or_default();
    config.api.file_key = std::env::var("FIGMA_FILE_KEY").unwrap_or_default();

    if let Ok(dir) = std::env::var("FIGMA_OUTPUT_DIR") {
        config.export.output_dir = dir.into();
    }
    if let Ok(formats) = std::env::var("FIGMA_FORMATS") {
        config.export.formats = formats
            .split(',')
            .map(|f| f.parse())
            .collect::<Result<_, _>>()?;
    }
    if let Ok(flag) = std::env::var("FIGMA_INCLUDE_DIMENSIONS") {
        config.export.include_dimensions =
            matches!(flag.to_lowercase().as_str(), "1" | "true" | "yes");
    }
    if let Ok(ms) = std::env::var("FIGMA_CALL_DELAY_MS") {
        let ms: u64 = ms
            .parse()
            .map_err(|e| format!("FIGMA_CALL_DELAY_MS: {e}"))?;
        config.export.call_delay = Duration::from_millis(ms);
    }
    if let Ok(size) = std::env::var("FIGMA_TARGET_SIZE") {
        config.export.target_size = Some(size.parse()?);
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> ExitCode {
    // Pick up FIGMA_* settings from a .env file when present
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config_from_env() {
        Ok(config) => config,
        Err(message) => {
            eprintln!("invalid configuration: {message}");
            return ExitCode::FAILURE;
        }
    };
    let output_dir = config.export.output_dir.clone();

    let exporter = match Exporter::new(config) {
        Ok(exporter) => exporter,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match exporter.run().await {
        Ok(written) => {
            println!(
                "Export complete: {} screens saved to {}",
                written.len(),
                output_dir.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
