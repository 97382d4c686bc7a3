//! `/gcs-remove-bucket`
//!
use std::sync::Arc;
use axum::{body::Bytes, extract::State, http::HeaderMap, response::Response};
use crate::config::Config;
use crate::error::HandlerResult;
use crate::formatter::{self, Envelope, OutputFormat};
use crate::gcs::{GcsClient, RemoveBucketRequest, RemovedBucketPayload};
use crate::request::{self, RequestContext};
use crate::slack;

pub async fn remove_bucket(
    State(config): State<Arc<Config>>,
    headers: HeaderMap,
    body: Bytes,
) -> HandlerResult<Response>
{
    let context = RequestContext::from_headers(&headers);
    let request: RemoveBucketRequest = request::decode_body(&body)?;
    let name = request::required(Some(request.name.clone()), "empty name")?;
    let project = request::required(config.resolve(&request.project_id, Some("PROJECT_ID"), None, None), "empty projectId")?;

    let client = GcsClient::new(&config, &request.json_key_path).await?;
    let bucket = client.bucket(&name).await?;
    client.delete_bucket(&bucket.name).await?;

    let summary = format!("Bucket {} deleted under {} project.", bucket.name, project);
    slack::notify(&config, &request.slack, &summary).await;

    match context.format {
        OutputFormat::Text => Ok(formatter::text_response(summary)),
        OutputFormat::Json => {
            let payload = RemovedBucketPayload {
                name: bucket.name,
                project_id: project,
            };
            Envelope::new(payload, &context).into_response()
        },
    }
}
