//! HTTP protocol implementation.
//!
//! This module implements the HTTP/1.1 message layer: one request is read,
//! dispatched and answered per connection.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`query`**: `key=value&key=value` decoding for targets and form bodies
//! - **`request_line`**: `METHOD PATH[?QUERY] PROTOCOL/VERSION` tokenizing
//! - **`headers`**: ordered, case-sensitive header map shared by requests and responses
//! - **`request`**: HTTP request representation
//! - **`parser`**: Parses incoming HTTP requests from byte buffers
//! - **`status`**: status codes and the response status line
//! - **`response`**: HTTP response representation, builder and wire serialization
//! - **`mime`**: MIME type detection based on file extensions
//! - **`writer`**: Writes serialized responses to the client
//! - **`connection`**: The per-connection request-response state machine
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for incoming request data
//!        └──────┬──────┘
//!               │ Request parsed          (malformed → 400, skip to Writing)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Router dispatch, handler or static file
//!        └──────┬───────────┘
//!               │ Response ready          (handler error → 500)
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send serialized response
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼
//!            Closed
//! ```

pub mod connection;
pub mod headers;
pub mod mime;
pub mod parser;
pub mod query;
pub mod request;
pub mod request_line;
pub mod response;
pub mod status;
pub mod writer;
