//! `/vault-status`
//!
//! The same table as `vault status`: the seal status, then the HA status from the leader endpoint.
//!
use std::sync::Arc;
use axum::{body::Bytes, extract::State, http::HeaderMap, response::Response};
use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use log::*;
use crate::config::Config;
use crate::error::HandlerResult;
use crate::formatter::{self, Envelope, OutputFormat, GLUE_STATUS};
use crate::request::{self, EndpointRequest, RequestContext};
use crate::vault::{EnrichedStatus, LeaderStatus, SealStatus, VaultClient};

pub async fn status(
    State(config): State<Arc<Config>>,
    headers: HeaderMap,
    body: Bytes,
) -> HandlerResult<Response>
{
    let context = RequestContext::from_headers(&headers);
    let request: EndpointRequest = request::decode_body(&body)?;

    let client = VaultClient::new(&config, &request)?;
    let seal_status = client.seal_status().await?;
    let leader = match client.leader().await {
        Ok(leader) => leader,
        // a sealed vault does not answer the leader endpoint, but it only can be sealed when HA is enabled.
        Err(e) if format!("{:#}", e).contains("Vault is sealed") => {
            info!("vault is sealed, leader unknown");
            LeaderStatus { ha_enabled: true, ..Default::default() }
        },
        Err(e) => return Err(e.into()),
    };

    match context.format {
        OutputFormat::Text => Ok(formatter::text_response(status_table(&seal_status, &leader))),
        OutputFormat::Json => Envelope::new(EnrichedStatus::new(&seal_status, &leader), &context).into_response(),
    }
}

fn status_table(
    seal_status: &SealStatus,
    leader: &LeaderStatus,
) -> String
{
    let mut rows = vec!["Key\tValue".to_string(), "---\t-----".to_string()];
    rows.push(format!("{}Seal Type\t{}", if seal_status.recovery_seal { "Recovery " } else { "" }, seal_status.seal_type));
    rows.push(format!("Initialized\t{}", seal_status.initialized));
    rows.push(format!("Sealed\t{}", seal_status.sealed));
    rows.push(format!("Total Recovery Shares\t{}", seal_status.t));
    rows.push(format!("Threshold\t{}", seal_status.n));
    rows.push(format!("Version\t{}", seal_status.version));
    if seal_status.sealed {
        rows.push(format!("Unseal Progress\t{}/{}", seal_status.progress, seal_status.t));
        rows.push(format!("Unseal Nonce\t{}", seal_status.nonce));
    }
    if seal_status.migration {
        rows.push(format!("Seal Migration in Progress\t{}", seal_status.migration));
    }
    rows.push(format!("Storage Type\t{}", seal_status.storage_type));
    if !seal_status.cluster_name.is_empty() && !seal_status.cluster_id.is_empty() {
        rows.push(format!("Cluster Name\t{}", seal_status.cluster_name));
        rows.push(format!("Cluster ID\t{}", seal_status.cluster_id));
    }
    rows.push(format!("HA Enabled\t{}", leader.ha_enabled));
    if leader.ha_enabled && !seal_status.sealed {
        rows.push(format!("HA Cluster\t{}", leader.leader_cluster_address));
        rows.push(format!("HA Mode\t{}", ha_mode(seal_status, leader)));
        if leader.is_self {
            if let Some(active_time) = active_since(&leader.active_time) {
                rows.push(format!("Active Since\t{}", active_time));
            }
        } else {
            rows.push(format!("Active Node Address\t{}", active_node_address(leader)));
        }
        if leader.performance_standby {
            rows.push(format!("Performance Standby Node\t{}", leader.performance_standby));
            rows.push(format!("Performance Standby Last Remote WAL\t{}", leader.performance_standby_last_remote_wal));
        }
    }
    formatter::columnize(&rows, GLUE_STATUS)
}

impl EnrichedStatus {
    pub fn new(
        seal_status: &SealStatus,
        leader: &LeaderStatus,
    ) -> Self
    {
        let mut status = EnrichedStatus {
            seal_type: seal_status.seal_type.clone(),
            initialized: seal_status.initialized.to_string(),
            sealed: seal_status.sealed.to_string(),
            total_recovery_shares: seal_status.t.to_string(),
            threshold: seal_status.n.to_string(),
            version: seal_status.version.clone(),
            migration: seal_status.migration.to_string(),
            cluster_name: seal_status.cluster_name.clone(),
            cluster_id: seal_status.cluster_id.clone(),
            storage_type: seal_status.storage_type.clone(),
            ha_enabled: leader.ha_enabled.to_string(),
            is_self: leader.is_self.to_string(),
            leader_cluster_address: leader.leader_cluster_address.clone(),
            performance_standby: leader.performance_standby.to_string(),
            performance_standby_last_remote_wal: leader.performance_standby_last_remote_wal.to_string(),
            last_wal: leader.last_wal.to_string(),
            raft_committed_index: leader.raft_committed_index.to_string(),
            raft_applied_index: leader.raft_applied_index.to_string(),
            ..Default::default()
        };
        if seal_status.recovery_seal {
            status.recovery_seal = "recovery".to_string();
        }
        if seal_status.sealed {
            status.unseal_progress = format!("{}/{}", seal_status.progress, seal_status.t);
            status.unseal_nonce = seal_status.nonce.clone();
        }
        if leader.ha_enabled {
            status.ha_mode = ha_mode(seal_status, leader).to_string();
            if !seal_status.sealed {
                status.ha_cluster = leader.leader_cluster_address.clone();
                if leader.is_self {
                    status.active_time = active_since(&leader.active_time).unwrap_or_default();
                } else {
                    status.leader_address = active_node_address(leader).to_string();
                }
            }
        }
        status
    }
}

fn ha_mode(
    seal_status: &SealStatus,
    leader: &LeaderStatus,
) -> &'static str
{
    if seal_status.sealed {
        "sealed"
    } else if leader.is_self {
        "active"
    } else {
        "standby"
    }
}

fn active_node_address(
    leader: &LeaderStatus,
) -> &str
{
    if leader.leader_address.is_empty() { "<none>" } else { &leader.leader_address }
}

/// Vault reports `0001-01-01T00:00:00Z` for a node that is not active.
pub fn active_since(
    active_time: &str,
) -> Option<String>
{
    DateTime::parse_from_rfc3339(active_time)
        .map_err(|e| debug!("active time {:?} not parsed: {}", active_time, e))
        .ok()
        .map(|time| time.with_timezone(&Utc))
        .filter(|time| time.year() > 1)
        .map(|time| time.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use crate::utility_test::*;

    const SEAL_STATUS: &str = r#"{
        "type": "shamir", "initialized": true, "sealed": false, "t": 3, "n": 5, "progress": 0, "nonce": "",
        "version": "1.6.1", "migration": false, "cluster_name": "vault-cluster-1", "cluster_id": "c0ffee",
        "recovery_seal": false, "storage_type": "raft"
    }"#;

    const LEADER: &str = r#"{
        "ha_enabled": true, "is_self": true, "active_time": "2021-01-02T03:04:05.5Z",
        "leader_address": "https://10.0.0.1:8200", "leader_cluster_address": "https://10.0.0.1:8201",
        "performance_standby": false, "performance_standby_last_remote_wal": 0,
        "raft_committed_index": 120, "raft_applied_index": 120
    }"#;

    #[test]
    fn unit_active_since() {
        assert_eq!(active_since("2021-01-02T03:04:05.5Z").unwrap(), "2021-01-02T03:04:05.500Z");
        assert_eq!(active_since("0001-01-01T00:00:00Z"), None);
        assert_eq!(active_since(""), None);
    }

    #[test]
    fn unit_enriched_status_standby() {
        let seal_status: SealStatus = serde_json::from_str(SEAL_STATUS).unwrap();
        let leader = LeaderStatus {
            ha_enabled: true,
            leader_cluster_address: "https://10.0.0.1:8201".to_string(),
            ..Default::default()
        };
        let status = EnrichedStatus::new(&seal_status, &leader);
        assert_eq!(status.ha_mode, "standby");
        assert_eq!(status.leader_address, "<none>");
        assert_eq!(status.unseal_progress, "");
        let json = serde_json::to_value(&status).unwrap();
        assert!(json.get("unseal_nonce").is_none());
        assert_eq!(json["total_recovery_shares"], "3");
    }

    #[tokio::test]
    async fn integration_status_text_active() {
        let server = MockServer::start_async().await;
        server.mock_async(|when, then| {
            when.method(GET).path("/v1/sys/seal-status");
            then.status(200).body(SEAL_STATUS);
        }).await;
        server.mock_async(|when, then| {
            when.method(GET).path("/v1/sys/leader");
            then.status(200).body(LEADER);
        }).await;

        let body = serde_json::json!({"endpoint": server.base_url()}).to_string();
        let (status, response) = call(test_config(), "/vault-status", Some("text/plain"), &body).await;

        assert_eq!(status, 200);
        let lines: Vec<&str> = response.lines().collect();
        assert_eq!(lines[0], "Key                      Value");
        assert_eq!(lines[2], "Seal Type                shamir");
        assert!(lines.contains(&"HA Mode                  active"));
        assert!(lines.contains(&"Active Since             2021-01-02T03:04:05.500Z"));
        assert!(lines.contains(&"Cluster Name             vault-cluster-1"));
        assert!(!response.contains("Active Node Address"));
    }

    #[tokio::test]
    async fn integration_status_sealed() {
        let server = MockServer::start_async().await;
        server.mock_async(|when, then| {
            when.method(GET).path("/v1/sys/seal-status");
            then.status(200).body(r#"{"type": "shamir", "initialized": true, "sealed": true, "t": 3, "n": 5, "progress": 1, "nonce": "abc", "version": "1.6.1", "storage_type": "raft"}"#);
        }).await;
        server.mock_async(|when, then| {
            when.method(GET).path("/v1/sys/leader");
            then.status(503).body(r#"{"errors":["Vault is sealed"]}"#);
        }).await;

        let body = serde_json::json!({"endpoint": server.base_url()}).to_string();
        let (status, response) = call(test_config(), "/vault-status", None, &body).await;

        assert_eq!(status, 200);
        let json: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(json["payload"]["sealed"], "true");
        assert_eq!(json["payload"]["ha_enabled"], "true");
        assert_eq!(json["payload"]["ha_mode"], "sealed");
        assert_eq!(json["payload"]["unseal_progress"], "1/3");
    }

    #[tokio::test]
    async fn integration_status_upstream_error() {
        let server = MockServer::start_async().await;
        server.mock_async(|when, then| {
            when.method(GET).path("/v1/sys/seal-status");
            then.status(500).body("internal error");
        }).await;

        let body = serde_json::json!({"endpoint": server.base_url()}).to_string();
        let (status, response) = call(test_config(), "/vault-status", None, &body).await;

        assert_eq!(status, 500);
        assert!(response.contains("Unexpected response code: 500 (internal error)"));
    }
}
