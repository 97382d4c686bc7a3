//! Module for the Consul handlers.
//!
//! The handlers read the Consul HTTP API, default `http://localhost:8500`:
//! - `/consul-catalog-services`: `/v1/catalog/services`, the services and their tags.
//! - `/consul-members`: `/v1/agent/members`, the LAN gossip members of the agent.
//! - `/consul-op-raft-list`: `/v1/operator/raft/configuration`, the raft peers.
//!
//! The endpoint is taken from the request, `CONSUL_HTTP_ADDR`, or the default.
//! The ACL token is taken from the request, `CONSUL_HTTP_TOKEN`, or the mounted secret `consul-token`,
//! and sent as `X-Consul-Token`.
//!
mod structs;
mod functions;
mod catalog_services;
mod members;
mod op_raft_list;

pub use structs::*;
pub use functions::*;
pub use catalog_services::*;
pub use members::*;
pub use op_raft_list::*;
