//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 file server: one request line in, one
//! response out, then the connection is closed.
//!
//! # Architecture
//!
//! - **`connection`**: Per-connection state machine driving the steps below
//! - **`parser`**: Extracts the request line from the bytes read so far
//! - **`request`**: Request line representation
//! - **`resolver`**: Maps a request target to a path under the document root
//! - **`response`**: Response head framing
//! - **`writer`**: Streams the head and file (or "not found" message) to the client
//! - **`mime`**: Content-Type inference from file extensions
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for the request line
//!        └──────┬──────┘
//!               │ Line received         ─ malformed → Rejecting
//!               ▼                                       │
//!        ┌──────────────────┐                           │
//!        │    Resolving     │ ← Sanitize target         │
//!        └──────┬───────────┘                           │
//!               ▼                                       │
//!        ┌──────────────────┐                           │
//!        │     Writing      │ ← Send head and body      │
//!        └──────┬───────────┘                           │
//!               ▼                                       │
//!        ┌──────────────────┐                           │
//!        │      Closed      │ ◄─────────────────────────┘
//!        └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use tinyweb::http::connection::Connection;
//! use tinyweb::http::resolver::PathResolver;
//! use tinyweb::http::writer::ResponseWriter;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8008").await?;
//!     let resolver = Arc::new(PathResolver::new("./public"));
//!     let writer = Arc::new(ResponseWriter::default());
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let mut conn = Connection::new(socket, resolver.clone(), writer.clone());
//!         tokio::spawn(async move {
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod resolver;
pub mod response;
pub mod writer;
