//! Module for the Nomad handlers.
//!
//! The handlers read the Nomad HTTP API, default `http://localhost:4646`:
//! - `/nomad-job-status`: `/v1/jobs`.
//! - `/nomad-node-status`: `/v1/nodes`.
//! - `/nomad-server-members`: `/v1/agent/members` and `/v1/status/leader`.
//!
//! The endpoint is taken from the request, `NOMAD_ADDR`, or the default.
//! The ACL token is taken from the request, `NOMAD_TOKEN`, or the mounted secret `nomad-token`,
//! and sent as `X-Nomad-Token`.
//!
mod structs;
mod functions;
mod job_status;
mod node_status;
mod server_members;

pub use structs::*;
pub use functions::*;
pub use job_status::*;
pub use node_status::*;
pub use server_members::*;
