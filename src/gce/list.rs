//! `/gce-list`
//!
use std::sync::Arc;
use axum::{body::Bytes, extract::State, http::HeaderMap, response::Response};
use crate::config::Config;
use crate::error::HandlerResult;
use crate::formatter::{self, Envelope, OutputFormat, GLUE_NARROW};
use crate::gce::{GceClient, GceRequest, Instance};
use crate::request::{self, RequestContext};
use crate::slack;

pub async fn list(
    State(config): State<Arc<Config>>,
    headers: HeaderMap,
    body: Bytes,
) -> HandlerResult<Response>
{
    let context = RequestContext::from_headers(&headers);
    let request: GceRequest = request::decode_body(&body)?;
    let (project, region) = project_and_region(&config, &request)?;

    let client = GceClient::new(&config, &project, &region, &request.json_key_path).await?;
    let instances: Vec<Instance> = client.region_instances()
        .await?
        .iter()
        .map(Instance::from)
        .collect();

    let table = instances_table(&instances);
    slack::notify(&config, &request.slack, &table).await;

    match context.format {
        OutputFormat::Text => Ok(formatter::text_response(table)),
        OutputFormat::Json => Envelope::new(instances, &context).into_response(),
    }
}

/// The project and the region are required, from the request or the environment.
pub fn project_and_region(
    config: &Config,
    request: &GceRequest,
) -> HandlerResult<(String, String)>
{
    let project = request::required(config.resolve(&request.project_id, Some("PROJECT_ID"), None, None), "empty projectId")?;
    let region = request::required(config.resolve(&request.region, Some("REGION"), None, None), "empty region")?;
    Ok((project, region))
}

fn instances_table(
    instances: &[Instance],
) -> String
{
    let mut rows = vec!["NAME\tZONE\tMACHINE_TYPE\tPREEMPTIBLE\tINTERNAL_IP\tEXTERNAL_IP\tSTATUS".to_string()];
    for instance in instances {
        rows.push(format!("{}\t{}\t{}\t{}\t{}\t{}\t{}",
            instance.name,
            instance.zone,
            instance.machine_type,
            instance.preemptible,
            instance.internal_ip,
            instance.external_ip,
            instance.status,
        ));
    }
    formatter::columnize(&rows, GLUE_NARROW)
}
