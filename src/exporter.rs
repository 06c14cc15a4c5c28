//! Export orchestration: fetch, filter, resolve, persist.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::client::FigmaClient;
use crate::config::Config;
use crate::download::persist_render;
use crate::error::Result;
use crate::filter::collect_frames;
use crate::pacing::Pacing;
use crate::types::ScreenRecord;
use crate::utils::{sanitize_name, unique_path};

/// Drives one export run over a single file.
///
/// The run is strictly sequential: exactly one outstanding network or
/// filesystem operation at any instant, records processed in document order,
/// and within a record, formats tried in configured order. There is no
/// cancellation; once started, a run proceeds to completion unless the
/// initial document fetch fails.
pub struct Exporter {
    client: FigmaClient,
    config: Config,
    pacing: Pacing,
}

impl Exporter {
    /// Build an exporter from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration fails validation or the HTTP
    /// client cannot be constructed.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let client = FigmaClient::new(&config.api)?;
        let pacing = Pacing::new(config.export.call_delay);
        Ok(Self {
            client,
            config,
            pacing,
        })
    }

    /// Run the export and return the written paths in export order.
    ///
    /// Failure to fetch the document is fatal and propagates. Everything
    /// after that is per-record recoverable: a frame that yields no image in
    /// any configured format is logged and skipped, and the run still
    /// completes. Zero matching frames is a normal completion, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the output directory cannot be created or the
    /// document fetch fails.
    pub async fn run(&self) -> Result<Vec<PathBuf>> {
        let output_dir = &self.config.export.output_dir;
        tokio::fs::create_dir_all(output_dir).await?;

        let file = self.client.fetch_document().await?;
        info!("loaded document tree for \"{}\"", file.name);

        let screens = collect_frames(
            std::slice::from_ref(&file.document),
            self.config.export.target_size,
        );
        if screens.is_empty() {
            match self.config.export.target_size {
                Some(size) => info!("no frames sized {} found, nothing to export", size),
                None => info!("no frames found, nothing to export"),
            }
            return Ok(Vec::new());
        }

        info!(
            "exporting {} screens to {}",
            screens.len(),
            output_dir.display()
        );

        let mut written = Vec::new();
        for (index, screen) in screens.iter().enumerate() {
            match self.export_screen(screen).await {
                Some(path) => {
                    info!("saved {}", path.display());
                    written.push(path);
                }
                None => {
                    warn!(
                        "no configured format produced an image for \"{}\"",
                        screen.name
                    );
                }
            }

            if index + 1 < screens.len() {
                self.pacing.pause().await;
            }
        }

        info!("export complete: {}", output_dir.display());
        Ok(written)
    }

    /// Try each configured format in order; the first render URL that both
    /// resolves and persists wins. Unsuccessful attempts are separated by the
    /// pacing delay. Returns the written path, or `None` when every format
    /// came up empty.
    async fn export_screen(&self, screen: &ScreenRecord) -> Option<PathBuf> {
        let base = format!("screen-{}", sanitize_name(&screen.name));

        for (attempt, format) in self.config.export.formats.iter().enumerate() {
            if attempt > 0 {
                self.pacing.pause().await;
            }

            let Some(url) = self.client.render_url(&screen.id, *format).await else {
                continue;
            };

            let file_base = match (self.config.export.include_dimensions, screen.bounding_box) {
                (true, Some(bounds)) => format!("{}-{}x{}", base, bounds.width, bounds.height),
                _ => base.clone(),
            };
            let dest = unique_path(
                &self.config.export.output_dir,
                &file_base,
                format.extension(),
            );

            if persist_render(self.client.http(), &url, &dest).await {
                return Some(dest);
            }
        }

        None
    }
}
