//! HTTP protocol implementation.
//!
//! This module implements the single-cycle HTTP layer: one request line in,
//! one response out, connection closed.
//!
//! # Architecture
//!
//! - **`connection`**: The per-connection handler implementing the
//!   request-response state machine
//! - **`parser`**: Extracts the request line from the raw receive buffer
//! - **`request`**: Request-line representation and method/protocol
//!   validation
//! - **`response`**: The fixed status-line framing
//! - **`writer`**: Streams status line and body bytes to the client
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │  Receiving  │ ← One read of the raw request
//!        └──────┬──────┘
//!               │ Request line parsed
//!               ├─ Protocol invalid → Rejecting (400) → Closed
//!               ▼
//!        ┌──────────────────┐
//!        │   Dispatching    │ ← Validate method, resolve target,
//!        └──────┬───────────┘   stream file or script output
//!               │ Response sent (or error logged, nothing sent)
//!               ▼
//!        ┌──────────────────┐
//!        │      Closed      │ ← Both directions shut down
//!        └──────────────────┘
//! ```
//!
//! There is no keep-alive: every connection serves exactly one cycle.

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
