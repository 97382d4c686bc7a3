//! Module for the configuration that is handed to every handler.
//!
//! A handler never reads the process environment or the mounted secrets on its own.
//! The [Config] struct is built once at startup, holds a snapshot of the environment,
//! and resolves every client setting in the same order:
//! 1. The value supplied in the request body.
//! 2. The environment variable.
//! 3. The mounted secret file (`/var/openfaas/secrets/<name>` by default).
//! 4. The hardcoded default.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
