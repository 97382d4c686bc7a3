//! The structs
//!
use std::collections::BTreeMap;
use crate::request::EndpointRequest;

#[derive(Debug, Clone)]
pub struct VaultClient {
    pub client: reqwest::Client,
    pub endpoint: String,
    pub token: Option<String>,
}

/// The object that vault returns under `data`.
pub type SecretData = serde_json::Map<String, serde_json::Value>;

/// The request body of the read handlers.
/// `data` is sent as query parameters.
///
/// ```text
/// {"path": "secret/data/app", "data": {"version": ["2"]}}
/// ```
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct VaultReadRequest {
    #[serde(flatten)]
    pub target: EndpointRequest,
    pub path: String,
    pub data: BTreeMap<String, Vec<String>>,
}

/// The request body of the write handlers.
///
/// ```text
/// {"path": "transit/encrypt/orders", "data": {"plaintext": "aGVsbG8="}}
/// ```
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct VaultWriteRequest {
    #[serde(flatten)]
    pub target: EndpointRequest,
    pub path: String,
    pub data: SecretData,
}

/// A logical response. Only `data` is used, the lease and auth parts are not rendered.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct VaultSecret {
    pub request_id: String,
    pub lease_id: String,
    pub lease_duration: i64,
    pub renewable: bool,
    pub data: Option<SecretData>,
    pub warnings: Option<Vec<String>>,
}

/// `/v1/sys/seal-status`
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct SealStatus {
    #[serde(rename = "type")]
    pub seal_type: String,
    pub initialized: bool,
    pub sealed: bool,
    pub t: u32,
    pub n: u32,
    pub progress: u32,
    pub nonce: String,
    pub version: String,
    pub migration: bool,
    pub cluster_name: String,
    pub cluster_id: String,
    pub recovery_seal: bool,
    pub storage_type: String,
}

/// `/v1/sys/leader`
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct LeaderStatus {
    pub ha_enabled: bool,
    pub is_self: bool,
    pub active_time: String,
    pub leader_address: String,
    pub leader_cluster_address: String,
    pub performance_standby: bool,
    pub performance_standby_last_remote_wal: u64,
    pub last_wal: u64,
    pub raft_committed_index: u64,
    pub raft_applied_index: u64,
}

/// The payload of `/vault-status`: the seal and leader status as strings.
#[derive(Serialize, Debug, Default, Clone)]
pub struct EnrichedStatus {
    pub seal_type: String,
    pub initialized: String,
    pub sealed: String,
    pub total_recovery_shares: String,
    pub threshold: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub unseal_progress: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub unseal_nonce: String,
    pub version: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub migration: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cluster_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cluster_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub recovery_seal: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub storage_type: String,
    pub ha_enabled: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ha_mode: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ha_cluster: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub is_self: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub active_time: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub leader_address: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub leader_cluster_address: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub performance_standby: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub performance_standby_last_remote_wal: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_wal: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub raft_committed_index: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub raft_applied_index: String,
}
