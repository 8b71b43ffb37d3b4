//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 subset: one GET request per connection,
//! answered with one of five status codes, then the connection is closed.
//!
//! # Architecture
//!
//! - **`connection`**: Per-connection state machine driving read, dispatch and write
//! - **`parser`**: Parses the request line out of the received bytes
//! - **`request`**: HTTP request representation
//! - **`response`**: Status codes, response model and builder
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Bounded read of the request
//!        └──────┬──────┘
//!               │ Bytes received
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Dispatcher builds the response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Single write of the whole response
//!        └──────┬───────────┘
//!               │
//!               └─ Closed
//! ```

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
