//! `/nomad-job-status`
//!
use std::sync::Arc;
use axum::{body::Bytes, extract::State, http::HeaderMap, response::Response};
use chrono::{Local, SecondsFormat, TimeZone};
use crate::config::Config;
use crate::error::HandlerResult;
use crate::formatter::{self, Envelope, OutputFormat, GLUE_NARROW};
use crate::nomad::{Job, JobListStub, NomadClient};
use crate::request::{self, EndpointRequest, RequestContext};

pub async fn job_status(
    State(config): State<Arc<Config>>,
    headers: HeaderMap,
    body: Bytes,
) -> HandlerResult<Response>
{
    let context = RequestContext::from_headers(&headers);
    let request: EndpointRequest = request::decode_body(&body)?;

    let client = NomadClient::new(&config, &request)?;
    let jobs = client.jobs().await?;

    match context.format {
        OutputFormat::Text => Ok(formatter::text_response(jobs_table(&jobs))),
        OutputFormat::Json => {
            let payload: Vec<Job> = jobs.iter().map(Job::from).collect();
            Envelope::new(payload, &context)
                .with_environment(&config)
                .into_response()
        },
    }
}

fn jobs_table(
    jobs: &[JobListStub],
) -> String
{
    let mut rows = vec!["ID\tType\tPriority\tStatus\tSubmitTime".to_string()];
    for job in jobs {
        rows.push(format!("{}\t{}\t{}\t{}\t{}",
            job.id,
            job.job_type,
            job.priority,
            job.status,
            format_submit_time(job.submit_time),
        ));
    }
    formatter::columnize(&rows, GLUE_NARROW)
}

/// Nanoseconds since the epoch as RFC 3339 in local time, whole seconds.
pub fn format_submit_time(
    nanoseconds: i64,
) -> String
{
    Local.timestamp_nanos(nanoseconds).to_rfc3339_opts(SecondsFormat::Secs, true)
}

impl From<&JobListStub> for Job {
    fn from(job: &JobListStub) -> Self {
        Job {
            id: job.id.clone(),
            name: job.name.clone(),
            job_type: job.job_type.clone(),
            priority: job.priority,
            status: job.status.clone(),
            submit_time: job.submit_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use httpmock::prelude::*;
    use crate::utility_test::*;

    const JOBS: &str = r#"[
        {"ID": "example", "Name": "example", "Type": "service", "Priority": 50, "Status": "running", "SubmitTime": 1609459200000000000},
        {"ID": "batch-1", "Name": "batch-1", "Type": "batch", "Priority": 70, "Status": "dead", "SubmitTime": 1609462800000000000}
    ]"#;

    #[test]
    fn unit_format_submit_time_is_the_same_instant() {
        let formatted = format_submit_time(1_609_459_200_000_000_000);
        let parsed = DateTime::parse_from_rfc3339(&formatted).unwrap();
        assert_eq!(parsed.timestamp(), 1_609_459_200);
    }

    #[tokio::test]
    async fn integration_job_status_text() {
        let server = MockServer::start_async().await;
        server.mock_async(|when, then| {
            when.method(GET).path("/v1/jobs");
            then.status(200).body(JOBS);
        }).await;

        let body = serde_json::json!({"endpoint": server.base_url()}).to_string();
        let (status, response) = call(test_config(), "/nomad-job-status", Some("text/plain"), &body).await;

        assert_eq!(status, 200);
        let lines: Vec<&str> = response.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID       Type     Priority  Status   SubmitTime"));
        assert!(lines[1].starts_with("example  service  50        running  "));
    }

    #[tokio::test]
    async fn integration_job_status_json_forwards_token() {
        let server = MockServer::start_async().await;
        let mock = server.mock_async(|when, then| {
            when.method(GET)
                .path("/v1/jobs")
                .header("x-nomad-token", "secret-id");
            then.status(200).body(JOBS);
        }).await;

        let body = serde_json::json!({"endpoint": server.base_url(), "token": "secret-id"}).to_string();
        let (status, response) = call(test_config(), "/nomad-job-status", None, &body).await;

        mock.assert_async().await;
        assert_eq!(status, 200);
        let json: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(json["payload"][1]["type"], "batch");
        assert_eq!(json["payload"][1]["submitTime"], 1609462800000000000_i64);
    }

    #[tokio::test]
    async fn integration_job_status_malformed_body() {
        let (status, response) = call(test_config(), "/nomad-job-status", None, "{not json").await;
        assert_eq!(status, 400);
        assert_eq!(response.trim(), "Input data error");
    }
}
