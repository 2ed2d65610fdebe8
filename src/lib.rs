//! Statico - Concurrent Static File Server
//!
//! Core library for the HTTP pipeline, static file resolution and access
//! logging.

pub mod access_log;
pub mod config;
pub mod files;
pub mod http;
pub mod server;
