//! docserve - Static File Server
//!
//! Core library for HTTP parsing, path resolution and static file serving.

pub mod config;
pub mod http;
pub mod server;
pub mod static_files;
