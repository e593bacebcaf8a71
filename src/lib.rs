//! webserver - a minimal HTTP/1.1 message layer
//!
//! Parses requests, dispatches them to handlers bound to exact paths (falling
//! back to static files), and serializes the responses back to the wire.

pub mod config;
pub mod files;
pub mod handler;
pub mod http;
pub mod server;
pub mod store;
