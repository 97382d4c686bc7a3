//! Module for serving the handlers.
//!
//! Every handler is mounted on its own route and accepts any method,
//! the way each one would be deployed as a separate function.
//!
mod functions;

pub use functions::*;
