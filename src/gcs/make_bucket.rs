//! `/gcs-make-bucket`
//!
use std::sync::Arc;
use axum::{body::Bytes, extract::State, http::HeaderMap, response::Response};
use crate::config::Config;
use crate::error::HandlerResult;
use crate::formatter::{self, Envelope, OutputFormat};
use crate::gcs::{Bucket, BucketPayload, GcsClient, IamConfiguration, MakeBucketRequest, UniformBucketLevelAccess, Versioning};
use crate::request::{self, RequestContext};
use crate::slack;

pub async fn make_bucket(
    State(config): State<Arc<Config>>,
    headers: HeaderMap,
    body: Bytes,
) -> HandlerResult<Response>
{
    let context = RequestContext::from_headers(&headers);
    let request: MakeBucketRequest = request::decode_body(&body)?;
    let name = request::required(Some(request.name.clone()), "empty name")?;
    let project = request::required(config.resolve(&request.project_id, Some("PROJECT_ID"), None, None), "empty projectId")?;

    let client = GcsClient::new(&config, &request.json_key_path).await?;
    client.create_bucket(&project, &Bucket::from(&request)).await?;
    let bucket = client.bucket(&name).await?;

    let payload = BucketPayload {
        gs_uri: format!("gs://{}", bucket.name),
        cloud_console_uri: format!("https://storage.cloud.google.com/{}", bucket.name),
        name: bucket.name,
        project_id: project,
    };
    let summary = format!("Bucket {} created under {} project, gsUri: {}, CloudConsoleUri: {}",
        payload.name,
        payload.project_id,
        payload.gs_uri,
        payload.cloud_console_uri,
    );
    slack::notify(&config, &request.slack, &summary).await;

    match context.format {
        OutputFormat::Text => Ok(formatter::text_response(summary)),
        OutputFormat::Json => Envelope::new(payload, &context).into_response(),
    }
}

impl From<&MakeBucketRequest> for Bucket {
    fn from(request: &MakeBucketRequest) -> Self {
        Bucket {
            name: request.name.clone(),
            location: request.location.clone(),
            location_type: request.location_type.clone(),
            storage_class: request.class.clone(),
            versioning: Some(Versioning { enabled: request.versioning_enabled }),
            labels: request.labels.clone(),
            iam_configuration: Some(IamConfiguration {
                uniform_bucket_level_access: UniformBucketLevelAccess { enabled: request.uniform_bucket_level_access },
            }),
        }
    }
}
