//! `/gcs-cp-bucket`
//!
use std::sync::Arc;
use axum::{body::Bytes, extract::State, http::HeaderMap, response::Response};
use log::*;
use crate::config::Config;
use crate::error::HandlerResult;
use crate::formatter::{self, Envelope, OutputFormat};
use crate::gcs::{humanize_bytes, CopyResult, CpBucketPayload, CpBucketRequest, GcsClient};
use crate::request::{self, RequestContext};
use crate::slack;

pub async fn cp_bucket(
    State(config): State<Arc<Config>>,
    headers: HeaderMap,
    body: Bytes,
) -> HandlerResult<Response>
{
    let context = RequestContext::from_headers(&headers);
    let request: CpBucketRequest = request::decode_body(&body)?;
    let source = request::required(Some(request.src_bucket.clone()), "empty srcBucket")?;
    let destination = request::required(Some(request.dst_bucket.clone()), "empty dstBucket")?;
    let project = request::required(config.resolve(&request.project_id, Some("PROJECT_ID"), None, None), "empty projectId")?;

    let client = GcsClient::new(&config, &request.json_key_path).await?;
    let objects = client.objects(&source).await?;
    info!("copy {} objects from {} to {} in project {}", objects.len(), source, destination, project);

    // a failed object is reported, the other objects are still copied.
    let mut result = Vec::with_capacity(objects.len());
    let mut total_size: u64 = 0;
    for object in &objects {
        total_size += object.size.parse::<u64>().unwrap_or_default();
        let error = match client.copy_object(&source, &object.name, &destination).await {
            Ok(()) => None,
            Err(e) => {
                warn!("copy of {} failed: {:#}", object.name, e);
                Some(format!("{:#}", e))
            },
        };
        result.push(CopyResult {
            src_obj: object.name.clone(),
            completed: error.is_none(),
            error,
        });
    }

    let payload = CpBucketPayload {
        result,
        total_size,
        total_size_human: humanize_bytes(total_size),
    };
    let summary = format!("Operation completed over {} objects/{}.", payload.result.len(), payload.total_size_human);
    slack::notify(&config, &request.slack, &summary).await;

    match context.format {
        OutputFormat::Text => Ok(formatter::text_response(summary)),
        OutputFormat::Json => Envelope::new(payload, &context).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use crate::utility_test::*;

    // the mock server answers with the first matching mock, so the second page is mocked first.
    async fn mock_storage(server: &MockServer) {
        server.mock_async(|when, then| {
            when.method(GET)
                .path("/storage/v1/b/src/o")
                .query_param("pageToken", "page-2");
            then.status(200).body(r#"{"items": [{"name": "logs/b.txt", "bucket": "src", "size": "512"}]}"#);
        }).await;
        server.mock_async(|when, then| {
            when.method(GET).path("/storage/v1/b/src/o");
            then.status(200).body(r#"{"items": [{"name": "a.txt", "bucket": "src", "size": "1024"}], "nextPageToken": "page-2"}"#);
        }).await;
        server.mock_async(|when, then| {
            when.method(POST).path("/storage/v1/b/src/o/a.txt/rewriteTo/b/dst/o/a.txt");
            then.status(200).body(r#"{"totalBytesRewritten": "1024", "objectSize": "1024", "done": true}"#);
        }).await;
        server.mock_async(|when, then| {
            when.method(POST).path("/storage/v1/b/src/o/logs%2Fb.txt/rewriteTo/b/dst/o/logs%2Fb.txt");
            then.status(403).body("forbidden");
        }).await;
    }

    #[tokio::test]
    async fn integration_cp_bucket_text() {
        let server = MockServer::start_async().await;
        mock_storage(&server).await;
        let config = google_test_config(&server).await;

        let body = serde_json::json!({"srcBucket": "src", "dstBucket": "dst", "projectId": "demo"}).to_string();
        let (status, response) = call(config, "/gcs-cp-bucket", Some("text/plain"), &body).await;

        assert_eq!(status, 200);
        assert_eq!(response, "Operation completed over 2 objects/1.5 KiB.");
    }

    #[tokio::test]
    async fn integration_cp_bucket_json_keeps_going_after_a_failure() {
        let server = MockServer::start_async().await;
        mock_storage(&server).await;
        let config = google_test_config(&server).await;

        let body = serde_json::json!({"srcBucket": "src", "dstBucket": "dst", "projectId": "demo"}).to_string();
        let (status, response) = call(config, "/gcs-cp-bucket", None, &body).await;

        assert_eq!(status, 200);
        let json: serde_json::Value = serde_json::from_str(&response).unwrap();
        let payload = &json["payload"];
        assert_eq!(payload["totalSize"], 1536);
        assert_eq!(payload["totalSizeHuman"], "1.5 KiB");
        assert_eq!(payload["result"][0]["srcObj"], "a.txt");
        assert_eq!(payload["result"][0]["completed"], true);
        assert!(payload["result"][0].get("error").is_none());
        assert_eq!(payload["result"][1]["completed"], false);
        assert!(payload["result"][1]["error"].as_str().unwrap().contains("403"));
    }

    #[tokio::test]
    async fn integration_cp_bucket_required_fields() {
        let (status, response) = call(test_config(), "/gcs-cp-bucket", None, r#"{"dstBucket": "dst", "projectId": "demo"}"#).await;
        assert_eq!((status, response.trim()), (400, "empty srcBucket"));

        let (status, response) = call(test_config(), "/gcs-cp-bucket", None, r#"{"srcBucket": "src", "projectId": "demo"}"#).await;
        assert_eq!((status, response.trim()), (400, "empty dstBucket"));

        let (status, response) = call(test_config(), "/gcs-cp-bucket", None, r#"{"srcBucket": "src", "dstBucket": "dst"}"#).await;
        assert_eq!((status, response.trim()), (400, "empty projectId"));
    }
}
