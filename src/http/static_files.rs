//! Builds the response for a requested file.
//!
//! Paths are joined onto the configured root exactly as decoded. Nothing
//! strips `..` segments or leading `/`, so a request can name any file the
//! process can read.

use std::path::{Path, PathBuf};

use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tracing::{debug, warn};

use crate::config::{Config, StaticFilesConfig};
use crate::http::mime::content_type;
use crate::http::response::Response;

#[derive(Debug, Clone)]
pub struct StaticFiles {
    root: PathBuf,
    max_body_bytes: u64,
}

impl StaticFiles {
    pub fn new(config: &StaticFilesConfig, max_body_bytes: u64) -> Self {
        Self {
            root: config.root.clone(),
            max_body_bytes,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(&cfg.static_files, cfg.limits.max_body_bytes)
    }

    /// Produces the response for `file_name`.
    ///
    /// - open failure of any kind → 404
    /// - not a regular file → 404
    /// - larger than `max_body_bytes` → 500
    /// - metadata or read failure after a successful open → 500
    /// - otherwise 200 with the Content-Type for `extension` and the full contents
    pub async fn serve(&self, file_name: impl AsRef<Path>, extension: &str) -> Response {
        let mime = content_type(extension);
        let path = self.root.join(file_name);

        let file = match File::open(&path).await {
            Ok(file) => file,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "File not found");
                return Response::not_found();
            }
        };

        let metadata = match file.metadata().await {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to stat file");
                return Response::internal_error();
            }
        };

        if !metadata.is_file() {
            debug!(path = %path.display(), "Not a regular file");
            return Response::not_found();
        }

        if metadata.len() > self.max_body_bytes {
            warn!(
                path = %path.display(),
                size = metadata.len(),
                limit = self.max_body_bytes,
                "File exceeds response body limit"
            );
            return Response::internal_error();
        }

        // The file may grow between stat and read; never read past the limit.
        let mut body = Vec::with_capacity(metadata.len() as usize);
        let read = file
            .take(self.max_body_bytes.saturating_add(1))
            .read_to_end(&mut body)
            .await;

        match read {
            Ok(_) if body.len() as u64 > self.max_body_bytes => {
                warn!(
                    path = %path.display(),
                    limit = self.max_body_bytes,
                    "File grew past response body limit"
                );
                Response::internal_error()
            }
            Ok(_) => Response::file(mime, body),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed reading file");
                Response::internal_error()
            }
        }
    }
}
