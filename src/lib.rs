//! # figma-export
//!
//! Sequential exporter for screen frames in a Figma file.
//!
//! The tool fetches a file's document tree, selects FRAME nodes (optionally
//! restricted to an exact width and height), resolves a rendered image URL
//! for each one, and downloads the images into a local directory with
//! collision-free names. Everything runs on a single logical thread of
//! control: one outstanding network or filesystem operation at a time, with a
//! fixed delay between remote calls.
//!
//! ## Design Philosophy
//!
//! - **Library-first** - the binary is a thin wrapper over [`Exporter`]
//! - **One fatal call** - only the initial document fetch can abort a run;
//!   every per-frame failure is logged and skipped
//! - **Explicit configuration** - one immutable [`Config`] built at startup
//!   and passed to every component, no ambient global state
//!
//! ## Quick Start
//!
//! ```no_run
//! use figma_export::{Config, Exporter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::default();
//!     config.api.token = "figd_...".to_string();
//!     config.api.file_key = "abc123".to_string();
//!
//!     let exporter = Exporter::new(config)?;
//!     let written = exporter.run().await?;
//!     println!("exported {} screens", written.len());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Figma REST API client
pub mod client;
/// Configuration types
pub mod config;
/// Image retrieval and persistence
pub mod download;
/// Error types
pub mod error;
/// Export orchestration
pub mod exporter;
/// Frame selection over the document tree
pub mod filter;
/// Fixed-delay pacing between remote calls
pub mod pacing;
/// Core types
pub mod types;
/// Filename helpers
pub mod utils;

// Re-export commonly used types
pub use client::FigmaClient;
pub use config::{ApiConfig, Config, ExportConfig};
pub use error::{Error, Result};
pub use exporter::Exporter;
pub use filter::collect_frames;
pub use pacing::Pacing;
pub use types::{
    BoundingBox, DocumentNode, FileDocument, FrameSize, ImageFormat, NodeType, ScreenRecord,
};
