//! Configuration types for figma-export

use crate::error::{Error, Result};
use crate::types::{FrameSize, ImageFormat};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Remote API access configuration (token, file, endpoint)
///
/// Used as a nested sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Personal access token sent in the `X-Figma-Token` header
    #[serde(default)]
    pub token: String,

    /// Key of the file whose frames are exported
    #[serde(default)]
    pub file_key: String,

    /// Base URL of the API (default: "https://api.figma.com")
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            file_key: String::new(),
            base_url: default_base_url(),
        }
    }
}

/// Export behavior configuration (output, formats, pacing, filtering)
///
/// Used as a nested sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Output directory (default: "./screens")
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Image formats to try for each frame, in order (default: png)
    #[serde(default = "default_formats")]
    pub formats: Vec<ImageFormat>,

    /// Append `-<width>x<height>` to filenames (default: false)
    #[serde(default)]
    pub include_dimensions: bool,

    /// Fixed delay between successive remote calls, in milliseconds on the
    /// wire (default: 350ms)
    #[serde(default = "default_call_delay", with = "duration_ms")]
    pub call_delay: Duration,

    /// Export only frames whose bounding box matches exactly (None = export
    /// every frame)
    #[serde(default)]
    pub target_size: Option<FrameSize>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            formats: default_formats(),
            include_dimensions: false,
            call_delay: default_call_delay(),
            target_size: None,
        }
    }
}

/// Main configuration for the exporter
///
/// Resolved once at startup and passed explicitly to every component that
/// needs it; there is no ambient global state. Fields are organized into
/// logical sub-configs:
/// - [`api`](ApiConfig) - token, file key, endpoint
/// - [`export`](ExportConfig) - output directory, formats, pacing, filtering
///
/// Both sub-configs are flattened for serialization, so a config file stays a
/// single flat object.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Remote API access
    #[serde(flatten)]
    pub api: ApiConfig,

    /// Export behavior
    #[serde(flatten)]
    pub export: ExportConfig,
}

impl Config {
    /// Validate that the configuration can drive an export run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the offending key when the token or
    /// file key is empty, the base URL does not parse, or the format list is
    /// empty.
    pub fn validate(&self) -> Result<()> {
        if self.api.token.trim().is_empty() {
            return Err(Error::config("API token must not be empty", "token"));
        }
        if self.api.file_key.trim().is_empty() {
            return Err(Error::config("file key must not be empty", "file_key"));
        }
        if let Err(e) = url::Url::parse(&self.api.base_url) {
            return Err(Error::config(
                format!("invalid base URL '{}': {}", self.api.base_url, e),
                "base_url",
            ));
        }
        if self.export.formats.is_empty() {
            return Err(Error::config(
                "at least one image format is required",
                "formats",
            ));
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    "https://api.figma.com".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./screens")
}

fn default_formats() -> Vec<ImageFormat> {
    vec![ImageFormat::Png]
}

fn default_call_delay() -> Duration {
    Duration::from_millis(350)
}

// Duration serialization helper: integer milliseconds on the wire
mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
