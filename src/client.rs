//! Figma REST API client: document fetch and render-URL resolution.
//!
//! Two endpoints are involved. The file endpoint returns the full document
//! tree and is the run's single fatal call. The render endpoint converts one
//! (node id, format) pair into a short-lived download URL and soft-fails on
//! purpose, so the export loop can move on to the next format.

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::types::{FileDocument, ImageFormat};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

/// Header carrying the personal access token
const AUTH_HEADER: &str = "X-Figma-Token";

/// Timeout for HTTP requests against the API
const HTTP_TIMEOUT_SECS: u64 = 30;

/// Response shape of the render endpoint: node id mapped to a URL or null.
#[derive(Debug, Deserialize)]
struct RenderResponse {
    #[serde(default)]
    err: Option<String>,
    #[serde(default)]
    images: HashMap<String, Option<String>>,
}

/// Client for the document and render endpoints of one file.
///
/// Holds a single `reqwest::Client` that is also shared with the image
/// download step (see [`crate::download`]).
pub struct FigmaClient {
    http: reqwest::Client,
    token: String,
    file_key: String,
    base_url: String,
}

impl FigmaClient {
    /// Create a client from the API sub-config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(concat!("figma-export/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            token: config.token.clone(),
            file_key: config.file_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The underlying HTTP client, shared with the download step.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Fetch the full document tree of the configured file.
    ///
    /// This is the only call whose failure aborts an export run: transport
    /// errors, non-success statuses, and undecodable bodies all propagate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] for transport failures, [`Error::Api`] for
    /// non-2xx responses.
    pub async fn fetch_document(&self) -> Result<FileDocument> {
        let url = format!("{}/v1/files/{}", self.base_url, self.file_key);
        debug!("fetching document: {}", url);

        let response = self
            .http
            .get(&url)
            .header(AUTH_HEADER, &self.token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<FileDocument>().await?)
    }

    /// Resolve a short-lived download URL for one node in one format.
    ///
    /// Any transport, API, or decode problem is logged and collapsed into
    /// `None`; the caller treats absence as "try the next format". No retries.
    pub async fn render_url(&self, node_id: &str, format: ImageFormat) -> Option<String> {
        let url = format!("{}/v1/images/{}", self.base_url, self.file_key);

        let response = match self
            .http
            .get(&url)
            .query(&[("ids", node_id), ("format", format.as_str())])
            .header(AUTH_HEADER, &self.token)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("render request for node {} ({}) failed: {}", node_id, format, e);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(
                "render request for node {} ({}) returned HTTP {}",
                node_id,
                format,
                status.as_u16()
            );
            return None;
        }

        let rendered: RenderResponse = match response.json().await {
            Ok(rendered) => rendered,
            Err(e) => {
                warn!(
                    "render response for node {} ({}) could not be decoded: {}",
                    node_id, format, e
                );
                return None;
            }
        };

        if let Some(err) = rendered.err {
            warn!("render endpoint reported an error for node {}: {}", node_id, err);
        }

        rendered.images.get(node_id).cloned().flatten()
    }
}
