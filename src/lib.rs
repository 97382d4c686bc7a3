//! more_serverless: single purpose function handlers.
//!
//! Every handler follows the same pattern:
//! decode the request body, build a client for one external system, perform one call,
//! and render the result as a column aligned text table or as a JSON envelope.
//!
extern crate serde;
extern crate serde_json;
#[macro_use]
extern crate serde_derive;

pub mod config;
pub mod error;
pub mod request;
pub mod formatter;
pub mod utility;
pub mod consul;
pub mod nomad;
pub mod vault;
pub mod gcp;
pub mod gce;
pub mod gcs;
pub mod slack;
pub mod server;

#[cfg(test)]
mod utility_test;
