//! `/nomad-node-status`
//!
use std::sync::Arc;
use axum::{body::Bytes, extract::State, http::HeaderMap, response::Response};
use crate::config::Config;
use crate::error::HandlerResult;
use crate::formatter::{self, Envelope, OutputFormat, GLUE_NARROW};
use crate::nomad::{Node, NodeListStub, NomadClient};
use crate::request::{self, EndpointRequest, RequestContext};

pub async fn node_status(
    State(config): State<Arc<Config>>,
    headers: HeaderMap,
    body: Bytes,
) -> HandlerResult<Response>
{
    let context = RequestContext::from_headers(&headers);
    let request: EndpointRequest = request::decode_body(&body)?;

    let client = NomadClient::new(&config, &request)?;
    let nodes = client.nodes().await?;

    match context.format {
        OutputFormat::Text => Ok(formatter::text_response(nodes_table(&nodes))),
        OutputFormat::Json => {
            let payload: Vec<Node> = nodes.iter().map(Node::from).collect();
            Envelope::new(payload, &context)
                .with_environment(&config)
                .into_response()
        },
    }
}

/// The nodes in the order nomad returns them, with the short node id.
fn nodes_table(
    nodes: &[NodeListStub],
) -> String
{
    let mut rows = vec!["ID\tDC\tName\tClass\tDrain\tEligibility\tStatus".to_string()];
    for node in nodes {
        rows.push(format!("{}\t{}\t{}\t{}\t{}\t{}\t{}",
            short_id(&node.id),
            node.datacenter,
            node.name,
            if node.node_class.is_empty() { "<none>" } else { node.node_class.as_str() },
            node.drain,
            node.scheduling_eligibility,
            node.status,
        ));
    }
    formatter::columnize(&rows, GLUE_NARROW)
}

/// The first group of a uuid.
pub fn short_id(
    id: &str,
) -> &str
{
    id.split('-').next().unwrap_or(id)
}

impl From<&NodeListStub> for Node {
    fn from(node: &NodeListStub) -> Self {
        Node {
            id: node.id.clone(),
            datacenter: node.datacenter.clone(),
            name: node.name.clone(),
            nodeclass: node.node_class.clone(),
            drain: node.drain,
            scheduling_eligibility: node.scheduling_eligibility.clone(),
            status: node.status.clone(),
        }
    }
}
