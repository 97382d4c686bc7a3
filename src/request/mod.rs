//! Module for decoding the inbound request.
//!
//! The body is optional: an empty body decodes into the default (all fields empty) request.
//! A body that is not valid JSON for the handler's request struct is an input error (HTTP 400).
//! The headers are kept to be echoed in the JSON envelope, and the `Content-Type` selects the output mode.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
