//! `/consul-members`
//!
use std::sync::Arc;
use axum::{body::Bytes, extract::State, http::HeaderMap, response::Response};
use itertools::Itertools;
use substring::Substring;
use crate::config::Config;
use crate::consul::{AgentMember, ConsulAgentMember, ConsulClient};
use crate::error::HandlerResult;
use crate::formatter::{self, Envelope, OutputFormat, GLUE_NARROW};
use crate::request::{self, EndpointRequest, RequestContext};

pub async fn members(
    State(config): State<Arc<Config>>,
    headers: HeaderMap,
    body: Bytes,
) -> HandlerResult<Response>
{
    let context = RequestContext::from_headers(&headers);
    let request: EndpointRequest = request::decode_body(&body)?;

    let client = ConsulClient::new(&config, &request)?;
    let members = sort_members(client.agent_members().await?);

    match context.format {
        OutputFormat::Text => Ok(formatter::text_response(members_table(&members))),
        OutputFormat::Json => {
            let payload: Vec<AgentMember> = members.iter().map(AgentMember::from).collect();
            Envelope::new(payload, &context)
                .with_environment(&config)
                .into_response()
        },
    }
}

/// Sort by the segment tag, then by name.
pub fn sort_members(
    members: Vec<ConsulAgentMember>,
) -> Vec<ConsulAgentMember>
{
    members.into_iter()
        .sorted_by(|a, b| {
            a.tag("segment").cmp(b.tag("segment"))
                .then_with(|| a.name.cmp(&b.name))
        })
        .collect()
}

fn members_table(
    members: &[ConsulAgentMember],
) -> String
{
    let mut rows = vec!["Node\tAddress\tStatus\tType\tBuild\tProtocol\tDC\tSegment".to_string()];
    for member in members {
        rows.push(format!("{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            member.name,
            member.addr,
            status_label(member.status),
            agent_type(member.tag("role")),
            truncate_build(member.tag("build")),
            member.tag("vsn"),
            member.tag("dc"),
            segment_label(member),
        ));
    }
    formatter::columnize(&rows, GLUE_NARROW)
}

impl ConsulAgentMember {
    /// A tag value, empty if the tag is not set.
    pub fn tag(
        &self,
        name: &str,
    ) -> &str
    {
        self.tags.get(name).map(String::as_str).unwrap_or_default()
    }
}

impl From<&ConsulAgentMember> for AgentMember {
    fn from(member: &ConsulAgentMember) -> Self {
        AgentMember {
            name: member.name.clone(),
            address: member.addr.clone(),
            port: member.port,
            status: status_label(member.status).to_string(),
            agent_type: agent_type(member.tag("role")).to_string(),
            protocol: member.tag("vsn").to_string(),
            build: truncate_build(member.tag("build")),
            dc: member.tag("dc").to_string(),
            segment: segment_label(member).to_string(),
        }
    }
}

/// The serf member status code as a label.
pub fn status_label(
    code: i64,
) -> &'static str
{
    match code {
        0 => "none",
        1 => "alive",
        2 => "leaving",
        3 => "left",
        4 => "failed",
        _ => "unknown",
    }
}

/// The `role` tag as the agent type.
pub fn agent_type(
    role: &str,
) -> &'static str
{
    match role {
        "node" => "client",
        "consul" => "server",
        _ => "unknown",
    }
}

/// The `build` tag up to the first colon, which drops the git commit.
/// Agents older than 0.3 do not set the tag.
pub fn truncate_build(
    build: &str,
) -> String
{
    if build.is_empty() {
        return "< 0.3".to_string();
    }
    match build.chars().position(|c| c == ':') {
        Some(position) => build.substring(0, position).to_string(),
        None => build.to_string(),
    }
}

/// Servers without a segment tag take part in all segments.
fn segment_label(
    member: &ConsulAgentMember,
) -> &'static str
{
    if member.tag("segment").is_empty() && member.tag("role") == "consul" {
        "<all>"
    } else {
        "<default>"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use crate::utility_test::*;

    const MEMBERS: &str = r#"[
        {
            "Name": "consul-server-2",
            "Addr": "10.0.0.2",
            "Port": 8301,
            "Tags": {"build": "1.9.1:ca5c3894", "dc": "dc1", "role": "consul", "vsn": "2"},
            "Status": 1,
            "ProtocolMin": 1, "ProtocolMax": 5, "ProtocolCur": 2
        },
        {
            "Name": "client-1",
            "Addr": "10.0.0.10",
            "Port": 8301,
            "Tags": {"build": "1.9.1:ca5c3894", "dc": "dc1", "role": "node", "vsn": "2", "segment": "alpha"},
            "Status": 4
        },
        {
            "Name": "consul-server-1",
            "Addr": "10.0.0.1",
            "Port": 8301,
            "Tags": {"dc": "dc1", "role": "consul", "vsn": "2"},
            "Status": 1
        }
    ]"#;

    #[test]
    fn unit_status_label() {
        assert_eq!(status_label(0), "none");
        assert_eq!(status_label(1), "alive");
        assert_eq!(status_label(2), "leaving");
        assert_eq!(status_label(3), "left");
        assert_eq!(status_label(4), "failed");
        assert_eq!(status_label(5), "unknown");
        assert_eq!(status_label(-1), "unknown");
    }

    #[test]
    fn unit_agent_type() {
        assert_eq!(agent_type("node"), "client");
        assert_eq!(agent_type("consul"), "server");
        assert_eq!(agent_type(""), "unknown");
        assert_eq!(agent_type("nomad"), "unknown");
    }

    #[test]
    fn unit_truncate_build() {
        assert_eq!(truncate_build("1.2.3:abcdef"), "1.2.3");
        assert_eq!(truncate_build(""), "< 0.3");
        assert_eq!(truncate_build("1.2.3"), "1.2.3");
    }

    #[test]
    fn unit_sort_members_by_segment_then_name() {
        let members: Vec<ConsulAgentMember> = serde_json::from_str(MEMBERS).unwrap();
        let names: Vec<String> = sort_members(members).into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["consul-server-1", "consul-server-2", "client-1"]);
    }

    #[test]
    fn unit_member_projection() {
        let members: Vec<ConsulAgentMember> = serde_json::from_str(MEMBERS).unwrap();
        let server = AgentMember::from(&members[0]);
        assert_eq!(server.status, "alive");
        assert_eq!(server.agent_type, "server");
        assert_eq!(server.build, "1.9.1");
        assert_eq!(server.segment, "<all>");
        let client = AgentMember::from(&members[1]);
        assert_eq!(client.status, "failed");
        assert_eq!(client.agent_type, "client");
        assert_eq!(client.segment, "<default>");
        let old_server = AgentMember::from(&members[2]);
        assert_eq!(old_server.build, "< 0.3");
    }

    #[tokio::test]
    async fn integration_members_text() {
        let server = MockServer::start_async().await;
        server.mock_async(|when, then| {
            when.method(GET).path("/v1/agent/members");
            then.status(200).body(MEMBERS);
        }).await;

        let body = serde_json::json!({"endpoint": server.base_url()}).to_string();
        let (status, response) = call(test_config(), "/consul-members", Some("text/plain"), &body).await;

        assert_eq!(status, 200);
        let lines: Vec<&str> = response.lines().collect();
        assert!(lines[0].starts_with("Node"));
        assert!(lines[0].ends_with("Segment"));
        assert!(lines[1].starts_with("consul-server-1"));
        assert!(lines[1].contains("< 0.3"));
        assert!(lines[3].starts_with("client-1"));
        assert!(lines[3].contains("failed"));
    }

    #[tokio::test]
    async fn integration_members_json_environment_is_opt_in() {
        let server = MockServer::start_async().await;
        server.mock_async(|when, then| {
            when.method(GET).path("/v1/agent/members");
            then.status(200).body(MEMBERS);
        }).await;
        let body = serde_json::json!({"endpoint": server.base_url()}).to_string();

        let (status, response) = call(test_config(), "/consul-members", None, &body).await;
        assert_eq!(status, 200);
        let json: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(json["payload"][0]["name"], "consul-server-1");
        assert_eq!(json["payload"][0]["type"], "server");
        assert!(json.get("environment").is_none());

        let mut config = test_config();
        config.expose_environment = true;
        config.environment.insert("SOME_VARIABLE".to_string(), "value".to_string());
        let (_, response) = call(config, "/consul-members", None, &body).await;
        let json: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(json["environment"][0], "SOME_VARIABLE=value");
    }
}
