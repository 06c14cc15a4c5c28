//! Image retrieval and persistence.

use std::path::Path;
use tracing::{debug, error};

/// Download `url` and write the bytes to `dest` in a single operation.
///
/// Returns `true` on success. Transport and filesystem failures are logged
/// with the destination path and the error message, then converted to
/// `false`; they never abort the surrounding export run. The destination path
/// must already be collision-free (see [`crate::utils::unique_path`]).
pub async fn persist_render(http: &reqwest::Client, url: &str, dest: &Path) -> bool {
    let response = match http.get(url).send().await {
        Ok(response) if response.status().is_success() => response,
        Ok(response) => {
            error!(
                "download for {} returned HTTP {}",
                dest.display(),
                response.status().as_u16()
            );
            return false;
        }
        Err(e) => {
            error!("download for {} failed: {}", dest.display(), e);
            return false;
        }
    };

    let bytes = match response.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("reading body for {} failed: {}", dest.display(), e);
            return false;
        }
    };

    match tokio::fs::write(dest, &bytes).await {
        Ok(()) => {
            debug!("wrote {} bytes to {}", bytes.len(), dest.display());
            true
        }
        Err(e) => {
            error!("writing {} failed: {}", dest.display(), e);
            false
        }
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn writes_response_bytes_to_destination() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/render/login.png"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"png-bytes".to_vec()))
            .mount(&server)
            .await;

        let temp_dir = TempDir::new().unwrap();
        let dest = temp_dir.path().join("screen-Login.png");
        let url = format!("{}/render/login.png", server.uri());

        assert!(persist_render(&reqwest::Client::new(), &url, &dest).await);
        assert_eq!(fs::read(&dest).unwrap(), b"png-bytes");
    }

    #[tokio::test]
    async fn non_success_status_returns_false_without_writing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/render/expired.png"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let temp_dir = TempDir::new().unwrap();
        let dest = temp_dir.path().join("screen-Expired.png");
        let url = format!("{}/render/expired.png", server.uri());

        assert!(!persist_render(&reqwest::Client::new(), &url, &dest).await);
        assert!(!dest.exists());
    }

    #[tokio::test]
    async fn unreachable_host_returns_false() {
        let temp_dir = TempDir::new().unwrap();
        let dest = temp_dir.path().join("screen-Never.png");

        // Reserved TEST-NET-1 address, nothing listens there
        let ok = persist_render(
            &reqwest::Client::builder()
                .timeout(std::time::Duration::from_millis(250))
                .build()
                .unwrap(),
            "http://192.0.2.1:9/none.png",
            &dest,
        )
        .await;

        assert!(!ok);
        assert!(!dest.exists());
    }

    #[tokio::test]
    async fn unwritable_destination_returns_false() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/render/ok.png"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"data".to_vec()))
            .mount(&server)
            .await;

        let temp_dir = TempDir::new().unwrap();
        // Parent directory does not exist, so the write must fail
        let dest = temp_dir.path().join("missing-subdir").join("file.png");
        let url = format!("{}/render/ok.png", server.uri());

        assert!(!persist_render(&reqwest::Client::new(), &url, &dest).await);
    }
}
