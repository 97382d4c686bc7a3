//! The structs
//!
use std::collections::BTreeMap;

/// The client for one request.
#[derive(Debug, Clone)]
pub struct ConsulClient {
    pub client: reqwest::Client,
    pub endpoint: String,
    pub token: Option<String>,
}

/// `/v1/catalog/services` is a map of service name to its tags.
///
/// ```text
/// {
///     "consul": [],
///     "web": ["v1", "primary"]
/// }
/// ```
pub type CatalogServices = BTreeMap<String, Vec<String>>;

/// A member as returned by `/v1/agent/members`.
///
/// ```text
/// {
///     "Name": "consul-server-1",
///     "Addr": "10.0.0.1",
///     "Port": 8301,
///     "Tags": { "build": "1.9.1:ca5c3894", "dc": "dc1", "role": "consul", "vsn": "2", ... },
///     "Status": 1,
///     "ProtocolMin": 1,
///     "ProtocolMax": 5,
///     "ProtocolCur": 2,
///     "DelegateMin": 2,
///     "DelegateMax": 5,
///     "DelegateCur": 4
/// }
/// ```
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "PascalCase", default)]
pub struct ConsulAgentMember {
    pub name: String,
    pub addr: String,
    pub port: u16,
    pub tags: BTreeMap<String, String>,
    pub status: i64,
    pub protocol_min: u8,
    pub protocol_max: u8,
    pub protocol_cur: u8,
}

/// `/v1/operator/raft/configuration`
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "PascalCase", default)]
pub struct RaftConfiguration {
    pub servers: Vec<RaftServer>,
    pub index: u64,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct RaftServer {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Node")]
    pub node: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Leader")]
    pub leader: bool,
    #[serde(rename = "ProtocolVersion")]
    pub protocol_version: String,
    #[serde(rename = "Voter")]
    pub voter: bool,
}

/// The payload item of `/consul-catalog-services`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SimpleService {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// The payload item of `/consul-members`.
#[derive(Serialize, Debug, Clone)]
pub struct AgentMember {
    pub name: String,
    pub address: String,
    pub port: u16,
    pub status: String,
    #[serde(rename = "type")]
    pub agent_type: String,
    pub protocol: String,
    pub build: String,
    pub dc: String,
    pub segment: String,
}

/// The payload item of `/consul-op-raft-list`.
#[derive(Serialize, Debug, Clone)]
pub struct Peer {
    pub node: String,
    pub id: String,
    pub address: String,
    pub state: String,
    pub voter: bool,
    #[serde(rename = "raft-protocol")]
    pub raft_protocol: String,
}
