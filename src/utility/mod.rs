//! Utilities shared by the clients.
//!
//! Every client is built per request with [http_client], so it carries the configured timeout,
//! and reads its responses with [read_json], [read_optional_json] or [read_json_or_empty].
//!
mod functions;

pub use functions::*;
