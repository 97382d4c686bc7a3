//! `/nomad-server-members`
//!
use std::sync::Arc;
use axum::{body::Bytes, extract::State, http::HeaderMap, response::Response};
use itertools::Itertools;
use log::*;
use crate::config::Config;
use crate::error::HandlerResult;
use crate::formatter::{self, Envelope, OutputFormat, GLUE_NARROW};
use crate::nomad::{AgentMember, NomadAgentMember, NomadClient};
use crate::request::{self, EndpointRequest, RequestContext};

pub async fn server_members(
    State(config): State<Arc<Config>>,
    headers: HeaderMap,
    body: Bytes,
) -> HandlerResult<Response>
{
    let context = RequestContext::from_headers(&headers);
    let request: EndpointRequest = request::decode_body(&body)?;

    let client = NomadClient::new(&config, &request)?;
    // without a leader the members are still listed, none of them flagged as leader.
    let leader = client.leader()
        .await
        .unwrap_or_else(|e| {
            warn!("could not read the leader: {:#}", e);
            String::new()
        });
    let members: Vec<NomadAgentMember> = client.server_members()
        .await?
        .members
        .into_iter()
        .sorted_by(|a, b| a.name.cmp(&b.name))
        .collect();

    match context.format {
        OutputFormat::Text => Ok(formatter::text_response(members_table(&members, &leader))),
        OutputFormat::Json => {
            let payload: Vec<AgentMember> = members.iter()
                .map(|member| AgentMember::new(member, &leader))
                .collect();
            Envelope::new(payload, &context)
                .with_environment(&config)
                .into_response()
        },
    }
}

fn members_table(
    members: &[NomadAgentMember],
    leader: &str,
) -> String
{
    let mut rows = vec!["Name\tAddress\tPort\tStatus\tLeader\tProtocol\tBuild\tDatacenter\tRegion".to_string()];
    for member in members {
        rows.push(format!("{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            member.name,
            member.addr,
            member.port,
            member.status,
            is_leader(leader, &member.addr, member.tag("port")),
            member.protocol_cur,
            member.tag("build"),
            member.tag("dc"),
            member.tag("region"),
        ));
    }
    formatter::columnize(&rows, GLUE_NARROW)
}

impl NomadAgentMember {
    pub fn tag(
        &self,
        name: &str,
    ) -> &str
    {
        self.tags.get(name).map(String::as_str).unwrap_or_default()
    }
}

impl AgentMember {
    pub fn new(
        member: &NomadAgentMember,
        leader: &str,
    ) -> Self
    {
        AgentMember {
            name: member.name.clone(),
            addr: member.addr.clone(),
            port: member.port,
            status: member.status.clone(),
            leader: is_leader(leader, &member.addr, member.tag("port")).to_string(),
            protocol: member.protocol_cur,
            build: member.tag("build").to_string(),
            datacenter: member.tag("dc").to_string(),
            region: member.tag("region").to_string(),
        }
    }
}

/// The leader is reported as the RPC address `host:port`.
/// The member address is the gossip address, the RPC port is in the `port` tag.
/// IPv6 hosts are bracketed, as in `[::1]:4647`.
pub fn is_leader(
    leader_address: &str,
    member_address: &str,
    member_port: &str,
) -> bool
{
    let host_port = if member_address.contains(':') {
        format!("[{}]:{}", member_address, member_port)
    } else {
        format!("{}:{}", member_address, member_port)
    };
    host_port == leader_address
}
