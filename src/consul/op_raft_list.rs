//! `/consul-op-raft-list`
//!
use std::sync::Arc;
use axum::{body::Bytes, extract::State, http::HeaderMap, response::Response};
use itertools::Itertools;
use crate::config::Config;
use crate::consul::{ConsulClient, Peer, RaftServer};
use crate::error::HandlerResult;
use crate::formatter::{self, Envelope, OutputFormat, GLUE_NARROW};
use crate::request::{self, EndpointRequest, RequestContext};

pub async fn op_raft_list(
    State(config): State<Arc<Config>>,
    headers: HeaderMap,
    body: Bytes,
) -> HandlerResult<Response>
{
    let context = RequestContext::from_headers(&headers);
    let request: EndpointRequest = request::decode_body(&body)?;

    let client = ConsulClient::new(&config, &request)?;
    let configuration = client.raft_configuration().await?;

    match context.format {
        OutputFormat::Text => Ok(formatter::text_response(peers_table(&configuration.servers))),
        OutputFormat::Json => {
            let payload: Vec<Peer> = configuration.servers.iter().map(Peer::from).collect();
            Envelope::new(payload, &context).into_response()
        },
    }
}

/// The header stays on top, the peers are sorted.
fn peers_table(
    servers: &[RaftServer],
) -> String
{
    let mut rows = vec!["Node\tID\tAddress\tState\tVoter\tRaftProtocol".to_string()];
    rows.extend(servers.iter()
        .map(|server| format!("{}\t{}\t{}\t{}\t{}\t{}",
            server.node,
            server.id,
            server.address,
            raft_state(server),
            server.voter,
            raft_protocol(server),
        ))
        .sorted());
    formatter::columnize(&rows, GLUE_NARROW)
}

impl From<&RaftServer> for Peer {
    fn from(server: &RaftServer) -> Self {
        Peer {
            node: server.node.clone(),
            id: server.id.clone(),
            address: server.address.clone(),
            state: raft_state(server).to_string(),
            voter: server.voter,
            raft_protocol: raft_protocol(server).to_string(),
        }
    }
}

fn raft_state(
    server: &RaftServer,
) -> &'static str
{
    if server.leader { "leader" } else { "follower" }
}

/// Servers running raft protocol 1 or older do not report the version.
fn raft_protocol(
    server: &RaftServer,
) -> &str
{
    if server.protocol_version.is_empty() { "<=1" } else { &server.protocol_version }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use crate::utility_test::*;

    const RAFT_CONFIGURATION: &str = r#"{
        "Servers": [
            {"ID": "b2f1", "Node": "server-b", "Address": "10.0.0.2:8300", "Leader": false, "ProtocolVersion": "3", "Voter": true},
            {"ID": "a1e0", "Node": "server-a", "Address": "10.0.0.1:8300", "Leader": true, "ProtocolVersion": "", "Voter": true}
        ],
        "Index": 22
    }"#;

    #[test]
    fn unit_peer_projection() {
        let configuration: crate::consul::RaftConfiguration = serde_json::from_str(RAFT_CONFIGURATION).unwrap();
        let peers: Vec<Peer> = configuration.servers.iter().map(Peer::from).collect();
        assert_eq!(peers[0].state, "follower");
        assert_eq!(peers[0].raft_protocol, "3");
        assert_eq!(peers[1].state, "leader");
        assert_eq!(peers[1].raft_protocol, "<=1");
        let json = serde_json::to_value(&peers[1]).unwrap();
        assert_eq!(json["raft-protocol"], "<=1");
    }

    #[tokio::test]
    async fn integration_op_raft_list_text_header_first() {
        let server = MockServer::start_async().await;
        let mock = server.mock_async(|when, then| {
            when.method(GET)
                .path("/v1/operator/raft/configuration")
                .query_param_exists("stale");
            then.status(200).body(RAFT_CONFIGURATION);
        }).await;

        let body = serde_json::json!({"endpoint": server.base_url()}).to_string();
        let (status, response) = call(test_config(), "/consul-op-raft-list", Some("text/plain"), &body).await;

        mock.assert_async().await;
        assert_eq!(status, 200);
        let lines: Vec<&str> = response.lines().collect();
        assert!(lines[0].starts_with("Node"));
        assert!(lines[1].starts_with("server-a"));
        assert!(lines[1].contains("leader"));
        assert!(lines[2].starts_with("server-b"));
    }
}
