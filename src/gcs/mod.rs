//! Module for the Google Cloud Storage handlers.
//!
//! - `/gcs-cp-bucket`: copy every object of a bucket into another bucket.
//! - `/gcs-make-bucket`: create a bucket.
//! - `/gcs-remove-bucket`: delete an (empty) bucket.
//!
//! The project is taken from the request or `PROJECT_ID`.
//! The credentials are resolved by [crate::gcp], the mounted secret is `gcs-sa-gcp`.
//!
mod structs;
mod functions;
mod cp_bucket;
mod make_bucket;
mod remove_bucket;

pub use structs::*;
pub use functions::*;
pub use cp_bucket::*;
pub use make_bucket::*;
pub use remove_bucket::*;
