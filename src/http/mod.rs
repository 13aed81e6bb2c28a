//! HTTP request handling for the file server.
//!
//! Each accepted connection carries exactly one request. Only the first
//! line is inspected; headers and body are ignored.
//!
//! # Architecture
//!
//! - **`connection`**: Per-connection state machine driving the pipeline below
//! - **`parser`**: Tokenizes the request line and locates the requested path
//! - **`request`**: Borrowed view of the requested path inside the receive buffer
//! - **`decode`**: Percent-decoding of the requested path
//! - **`mime`**: Extension extraction and Content-Type lookup
//! - **`static_files`**: Opens the requested file and builds the response
//! - **`response`**: Status codes and the response value with its builder
//! - **`writer`**: Serializes a response and writes all of it to the peer
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │  Receiving  │ ← Read until the first line is complete
//!        └──────┬──────┘
//!               │ ├─ Peer closed, nothing sent → Closed
//!               │ └─ Limit reached → Sending (413)
//!               ▼
//!        ┌─────────────┐
//!        │   Parsing   │ ← Match `GET /<path> HTTP/1`, decode path
//!        └──────┬──────┘
//!               │ ├─ No match → Closed (or Sending 400 if configured)
//!               │ └─ Bad escape → Sending (400)
//!               ▼
//!        ┌─────────────┐
//!        │  Building   │ ← Look up the file, 200 / 404 / 500
//!        └──────┬──────┘
//!               ▼
//!        ┌─────────────┐
//!        │   Sending   │ ← Write the whole response
//!        └──────┬──────┘
//!               ▼
//!            Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use fileserve::config::Config;
//! use fileserve::http::connection::{Connection, ConnectionSettings};
//! use fileserve::http::static_files::StaticFiles;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let cfg = Config::default();
//!     let files = Arc::new(StaticFiles::from_config(&cfg));
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let conn = Connection::new(socket, files.clone(), ConnectionSettings::from_config(&cfg));
//!         tokio::spawn(async move {
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod decode;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod static_files;
pub mod writer;
