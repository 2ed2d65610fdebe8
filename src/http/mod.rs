//! HTTP protocol implementation.
//!
//! A minimal HTTP/1.1 server core: one request per connection, no
//! keep-alive, `Connection: close` on every response.
//!
//! # Architecture
//!
//! - **`connection`**: the per-connection handler implementing the
//!   parse → route → respond → log state machine
//! - **`parser`**: reads and parses the request line, headers and body
//! - **`request`**: parsed request representation and header collection
//! - **`response`**: response representation with the canned status bodies
//! - **`writer`**: compression policy and wire serialization
//! - **`mime`**: content type mapping by file extension
//!
//! # Connection State Machine
//!
//! Each accepted connection runs through:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Parse request line, headers, body
//!        └──────┬──────┘
//!               │ Request parsed (empty/malformed → Closed, silent)
//!               ▼
//!        ┌──────────────────┐
//!        │    Routing       │ ← GET → static files, POST → ack, else 405
//!        └──────┬───────────┘
//!               │ Response chosen (faults → 500)
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Serialize (maybe gzip) and send
//!        └──────┬───────────┘
//!               │ Outcome known
//!               ▼
//!        ┌──────────────────┐
//!        │    Logging       │ ← Append one access log line
//!        └──────┬───────────┘
//!               │
//!               └─ Closed (always terminal)
//! ```

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
