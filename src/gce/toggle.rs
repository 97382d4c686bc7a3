//! `/gce-toggle`
//!
use std::sync::Arc;
use axum::{body::Bytes, extract::State, http::HeaderMap, response::Response};
use itertools::Itertools;
use crate::config::Config;
use crate::error::HandlerResult;
use crate::formatter::{self, Envelope, OutputFormat};
use crate::gce::{project_and_region, ComputeInstance, GceClient, GceRequest};
use crate::request::{self, RequestContext};
use crate::slack;

pub async fn toggle(
    State(config): State<Arc<Config>>,
    headers: HeaderMap,
    body: Bytes,
) -> HandlerResult<Response>
{
    let context = RequestContext::from_headers(&headers);
    let request: GceRequest = request::decode_body(&body)?;
    let (project, region) = project_and_region(&config, &request)?;

    let client = GceClient::new(&config, &project, &region, &request.json_key_path).await?;
    let mut actions = Vec::new();
    for instance in client.region_instances().await? {
        if is_stopped(&instance) {
            client.start(&instance).await?;
            actions.push(format!("Status of {} is {}, turning {} ON!", instance.name, instance.status, instance.name));
        } else {
            client.stop(&instance).await?;
            actions.push(format!("Status of {} is {}, turning {} OFF!", instance.name, instance.status, instance.name));
        }
    }
    for manager in client.instance_group_managers().await? {
        if manager.target_size != 0 {
            client.resize(&manager.name, 0).await?;
            actions.push(format!("Scaling {} DOWN to zero instances!", manager.name));
        } else {
            client.resize(&manager.name, config.group_target_size).await?;
            actions.push(format!("Scaling {} UP to {} instances!", manager.name, config.group_target_size));
        }
    }

    let summary = actions.iter().join("\n");
    slack::notify(&config, &request.slack, &summary).await;

    match context.format {
        OutputFormat::Text => Ok(formatter::text_response(summary)),
        OutputFormat::Json => Envelope::new(actions, &context)
            .with_environment(&config)
            .into_response(),
    }
}

/// A stopped instance is started, anything else (also a starting or stopping instance) is stopped.
pub fn is_stopped(
    instance: &ComputeInstance,
) -> bool
{
    matches!(instance.status.as_str(), "TERMINATED" | "STOPPED")
}
