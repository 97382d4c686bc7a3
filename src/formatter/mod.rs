//! Module for rendering the handler results.
//!
//! There are two mutually exclusive output modes, selected by the inbound `Content-Type` header only:
//! - `text/plain`: the rows are tab delimited and aligned into columns with [columnize].
//! - anything else: the [Envelope] is serialized to JSON.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
