//! Module for the Vault handlers.
//!
//! The handlers use the Vault HTTP API, default `http://localhost:8200`:
//! - `/vault-kv-get`: read a kv version 2 secret, metadata and data.
//! - `/vault-read`: read any logical path.
//! - `/vault-kv-put`: write a kv version 2 secret.
//! - `/vault-transit`: a transit operation, selected by the path (`transit/encrypt/<key>`, ...).
//! - `/vault-status`: `/v1/sys/seal-status` and `/v1/sys/leader`.
//!
//! The endpoint is taken from the request, `VAULT_ADDR`, or the default.
//! The token is taken from the request, `VAULT_TOKEN`, or the mounted secret `vault-token`,
//! and sent as `X-Vault-Token`.
//!
mod structs;
mod functions;
mod kv_get;
mod read;
mod kv_put;
mod transit;
mod status;

pub use structs::*;
pub use functions::*;
pub use kv_get::*;
pub use read::*;
pub use kv_put::*;
pub use transit::*;
pub use status::*;
