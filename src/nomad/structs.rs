//! The structs
//!
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct NomadClient {
    pub client: reqwest::Client,
    pub endpoint: String,
    pub token: Option<String>,
}

/// A job stub from `/v1/jobs`.
/// The submit time is in nanoseconds since the epoch.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct JobListStub {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub job_type: String,
    #[serde(rename = "Priority")]
    pub priority: i64,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "SubmitTime")]
    pub submit_time: i64,
}

/// A node stub from `/v1/nodes`.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct NodeListStub {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Datacenter")]
    pub datacenter: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "NodeClass")]
    pub node_class: String,
    #[serde(rename = "Drain")]
    pub drain: bool,
    #[serde(rename = "SchedulingEligibility")]
    pub scheduling_eligibility: String,
    #[serde(rename = "Status")]
    pub status: String,
}

/// `/v1/agent/members`
///
/// ```text
/// {
///     "ServerName": "nomad-1",
///     "ServerRegion": "global",
///     "ServerDC": "dc1",
///     "Members": [
///         {
///             "Name": "nomad-1.global",
///             "Addr": "10.0.0.1",
///             "Port": 4648,
///             "Tags": { "build": "1.0.1", "dc": "dc1", "port": "4647", "region": "global", ... },
///             "Status": "alive",
///             "ProtocolMin": 1,
///             "ProtocolMax": 5,
///             "ProtocolCur": 2
///         }
///     ]
/// }
/// ```
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "PascalCase", default)]
pub struct ServerMembers {
    pub server_name: String,
    pub server_region: String,
    #[serde(rename = "ServerDC")]
    pub server_dc: String,
    pub members: Vec<NomadAgentMember>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "PascalCase", default)]
pub struct NomadAgentMember {
    pub name: String,
    pub addr: String,
    pub port: u16,
    pub tags: BTreeMap<String, String>,
    pub status: String,
    pub protocol_min: u8,
    pub protocol_max: u8,
    pub protocol_cur: u8,
}

/// The payload item of `/nomad-job-status`.
#[derive(Serialize, Debug, Clone)]
pub struct Job {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub priority: i64,
    pub status: String,
    #[serde(rename = "submitTime")]
    pub submit_time: i64,
}

/// The payload item of `/nomad-node-status`.
#[derive(Serialize, Debug, Clone)]
pub struct Node {
    pub id: String,
    pub datacenter: String,
    pub name: String,
    pub nodeclass: String,
    pub drain: bool,
    #[serde(rename = "scheduling-eligibility")]
    pub scheduling_eligibility: String,
    pub status: String,
}

/// The payload item of `/nomad-server-members`.
#[derive(Serialize, Debug, Clone)]
pub struct AgentMember {
    pub name: String,
    pub addr: String,
    pub port: u16,
    pub status: String,
    pub leader: String,
    pub protocol: u8,
    pub build: String,
    pub datacenter: String,
    pub region: String,
}
