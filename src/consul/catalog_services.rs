//! `/consul-catalog-services`
//!
use std::sync::Arc;
use axum::{body::Bytes, extract::State, http::HeaderMap, response::Response};
use itertools::Itertools;
use crate::config::Config;
use crate::consul::{CatalogServices, ConsulClient, SimpleService};
use crate::error::HandlerResult;
use crate::formatter::{self, Envelope, OutputFormat, GLUE_WIDE};
use crate::request::{self, EndpointRequest, RequestContext};

pub async fn catalog_services(
    State(config): State<Arc<Config>>,
    headers: HeaderMap,
    body: Bytes,
) -> HandlerResult<Response>
{
    let context = RequestContext::from_headers(&headers);
    let request: EndpointRequest = request::decode_body(&body)?;

    let client = ConsulClient::new(&config, &request)?;
    let services = client.catalog_services().await?;

    match context.format {
        OutputFormat::Text => Ok(formatter::text_response(catalog_services_table(&services))),
        OutputFormat::Json => Envelope::new(simple_services(services), &context).into_response(),
    }
}

/// One row per service: the name and the comma separated tags, sorted by name.
fn catalog_services_table(
    services: &CatalogServices,
) -> String
{
    let rows: Vec<String> = services.iter()
        .map(|(name, tags)| format!("{}\t{}", name, tags.join(",")))
        .sorted()
        .collect();
    formatter::columnize(&rows, GLUE_WIDE)
}

fn simple_services(
    services: CatalogServices,
) -> Vec<SimpleService>
{
    services.into_iter()
        .map(|(name, tags)| SimpleService { name, tags })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use crate::utility_test::*;

    fn services() -> CatalogServices {
        serde_json::from_str(r#"{
            "web": ["v1", "primary"],
            "consul": [],
            "api": ["v2"]
        }"#).unwrap()
    }

    #[test]
    fn unit_catalog_services_table_is_sorted() {
        let table = catalog_services_table(&services());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines, vec![
            "api         v2",
            "consul      ",
            "web         v1,primary",
        ]);
    }

    #[test]
    fn unit_simple_services_skip_empty_tags() {
        let payload = simple_services(services());
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json[0]["name"], "api");
        assert_eq!(json[1]["name"], "consul");
        assert!(json[1].get("tags").is_none());
        assert_eq!(json[2]["tags"][1], "primary");
    }

    #[tokio::test]
    async fn integration_catalog_services_json_forwards_token() {
        let server = MockServer::start_async().await;
        let mock = server.mock_async(|when, then| {
            when.method(GET)
                .path("/v1/catalog/services")
                .header("x-consul-token", "root");
            then.status(200).json_body(serde_json::json!({"consul": [], "web": ["v1"]}));
        }).await;

        let body = serde_json::json!({"endpoint": server.base_url(), "token": "root"}).to_string();
        let (status, response) = call(test_config(), "/consul-catalog-services", Some("application/json"), &body).await;

        mock.assert_async().await;
        assert_eq!(status, 200);
        let json: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(json["payload"][1]["name"], "web");
        assert!(json.get("environment").is_none());
    }

    #[tokio::test]
    async fn integration_catalog_services_upstream_error() {
        let server = MockServer::start_async().await;
        server.mock_async(|when, then| {
            when.method(GET).path("/v1/catalog/services");
            then.status(403).body("Permission denied");
        }).await;

        let body = serde_json::json!({"endpoint": server.base_url()}).to_string();
        let (status, response) = call(test_config(), "/consul-catalog-services", None, &body).await;

        assert_eq!(status, 500);
        assert!(response.contains("Permission denied"));
    }
}
