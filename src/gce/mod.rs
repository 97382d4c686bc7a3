//! Module for the Google Compute Engine handlers.
//!
//! - `/gce-list`: the instances of every zone of a region.
//! - `/gce-toggle`: start the stopped instances and stop the running ones,
//!   and scale the regional managed instance groups between zero and the configured size.
//!
//! The project and region are taken from the request, or `PROJECT_ID` and `REGION`.
//! The credentials are resolved by [crate::gcp], the mounted secret is `gce-sa-gcp`.
//!
mod structs;
mod functions;
mod list;
mod toggle;

pub use structs::*;
pub use functions::*;
pub use list::*;
pub use toggle::*;
