//! Fileserve - Concurrent Static File Daemon
//!
//! Core library: request-line parsing, percent-decoding, file lookup and
//! the per-connection handler driven by the accept loop.

pub mod config;
pub mod http;
pub mod server;
