use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::http::decode::decode_path;
use crate::http::mime::extension_of;
use crate::http::parser::{RequestLineScanner, parse_request_line};
use crate::http::response::Response;
use crate::http::static_files::StaticFiles;
use crate::http::writer::ResponseWriter;

const READ_CHUNK: usize = 4096;

/// Per-connection knobs taken from `Config`.
#[derive(Debug, Clone)]
pub struct ConnectionSettings {
    pub max_request_bytes: usize,
    pub read_timeout: Option<Duration>,
    pub reject_unmatched: bool,
}

impl ConnectionSettings {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            max_request_bytes: usize::try_from(cfg.limits.max_request_bytes).unwrap_or(usize::MAX),
            read_timeout: cfg.server.read_timeout(),
            reject_unmatched: cfg.server.reject_unmatched,
        }
    }
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Handles exactly one request on one accepted stream, then closes it.
pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    state: ConnectionState,
    files: Arc<StaticFiles>,
    settings: ConnectionSettings,
}

pub enum ConnectionState {
    Receiving,
    Parsing,
    Building(PathBuf), // decoded file name
    Sending(ResponseWriter),
    Closed,
}

enum Received {
    /// The first line is complete, or the peer stopped sending
    Ready,
    /// Peer closed before sending a single byte
    Empty,
    /// Limit reached with the request line still open
    Overflow,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, files: Arc<StaticFiles>, settings: ConnectionSettings) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(READ_CHUNK),
            state: ConnectionState::Receiving,
            files,
            settings,
        }
    }

    /// Drives the connection to `Closed`.
    ///
    /// Consumes the connection so every buffer and the stream itself are
    /// dropped on return, on success and error paths alike. An `Err` is a
    /// transport failure (receive, send, or receive timeout).
    pub async fn run(mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Receiving => {
                    self.state = match self.receive().await? {
                        Received::Ready => ConnectionState::Parsing,
                        Received::Empty => ConnectionState::Closed,
                        Received::Overflow => {
                            warn!(
                                limit = self.settings.max_request_bytes,
                                "Request line exceeds receive limit"
                            );
                            Self::respond(Response::payload_too_large())
                        }
                    };
                }

                ConnectionState::Parsing => {
                    self.state = match parse_request_line(&self.buffer) {
                        Ok(target) => match decode_path(target.encoded_path()) {
                            Ok(file_name) => ConnectionState::Building(file_name),
                            Err(e) => {
                                warn!(error = %e, "Rejecting undecodable path");
                                Self::respond(Response::bad_request())
                            }
                        },
                        Err(e) => {
                            debug!(reason = %e, "Request line not recognised");
                            if self.settings.reject_unmatched {
                                Self::respond(Response::bad_request())
                            } else {
                                ConnectionState::Closed
                            }
                        }
                    };
                    // The raw request is no longer needed by any later state.
                    self.buffer = BytesMut::new();
                }

                ConnectionState::Building(file_name) => {
                    let file_name = file_name.as_path();
                    let name = file_name.to_string_lossy();
                    let response = self.files.serve(file_name, extension_of(&name)).await;
                    info!(
                        path = %name,
                        status = response.status.as_u16(),
                        bytes = response.body.len(),
                        "Serving request"
                    );
                    self.state = Self::respond(response);
                }

                ConnectionState::Sending(writer) => {
                    let result = writer.write_to_stream(&mut self.stream).await;
                    self.state = ConnectionState::Closed;
                    result?;
                }

                ConnectionState::Closed => {
                    // Best effort: the peer may already be gone.
                    let _ = self.stream.shutdown().await;
                    break;
                }
            }
        }

        Ok(())
    }

    fn respond(response: Response) -> ConnectionState {
        ConnectionState::Sending(ResponseWriter::new(&response))
    }

    async fn receive(&mut self) -> anyhow::Result<Received> {
        let mut temp = [0u8; READ_CHUNK];
        let mut scanner = RequestLineScanner::new();

        loop {
            if scanner.is_complete(&self.buffer) {
                return Ok(Received::Ready);
            }

            let remaining = self.settings.max_request_bytes.saturating_sub(self.buffer.len());
            if remaining == 0 {
                return Ok(Received::Overflow);
            }

            let want = remaining.min(temp.len());
            let n = self.read_chunk(&mut temp[..want]).await?;

            if n == 0 {
                // Client closed connection
                if self.buffer.is_empty() {
                    return Ok(Received::Empty);
                }
                return Ok(Received::Ready);
            }

            self.buffer.extend_from_slice(&temp[..n]);
        }
    }

    async fn read_chunk(&mut self, temp: &mut [u8]) -> anyhow::Result<usize> {
        match self.settings.read_timeout {
            Some(limit) => match timeout(limit, self.stream.read(temp)).await {
                Ok(read) => Ok(read?),
                Err(_) => Err(anyhow::anyhow!("receive timed out after {:?}", limit)),
            },
            None => Ok(self.stream.read(temp).await?),
        }
    }
}
