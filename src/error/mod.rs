//! Module for the error taxonomy at the HTTP boundary.
//!
//! - [HandlerError::Input]: malformed JSON or a missing required field, HTTP 400.
//! - [HandlerError::Upstream]: the wrapped system failed or rejected the call, HTTP 500 with the raw error text.
//! - [HandlerError::Internal]: the response could not be produced, HTTP 500.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
