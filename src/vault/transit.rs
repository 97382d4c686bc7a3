//! `/vault-transit`
//!
use std::sync::Arc;
use axum::{body::Bytes, extract::State, http::HeaderMap, response::Response};
use log::*;
use crate::config::Config;
use crate::error::{HandlerError, HandlerResult};
use crate::formatter::{self, Envelope, OutputFormat, GLUE_NARROW};
use crate::request::{self, RequestContext};
use crate::vault::{key_value_rows, VaultClient, VaultWriteRequest};

pub async fn transit(
    State(config): State<Arc<Config>>,
    headers: HeaderMap,
    body: Bytes,
) -> HandlerResult<Response>
{
    let context = RequestContext::from_headers(&headers);
    let request: VaultWriteRequest = request::decode_body(&body)?;
    let path = request::required(Some(request.path.clone()), "empty path")?;
    if request.data.is_empty() && requires_data(&path) {
        return Err(HandlerError::input("No data supplied"));
    }

    let client = VaultClient::new(&config, &request.target)?;
    let written = client.write(&path, &serde_json::Value::Object(request.data.clone())).await?;

    match written.and_then(|secret| secret.data) {
        None => {
            debug!("{}: no response data", path);
            Ok(formatter::text_response(format!("Success! Data written to {}", path)))
        },
        Some(data) => match context.format {
            OutputFormat::Text => Ok(formatter::text_response(formatter::columnize(&key_value_rows(&data), GLUE_NARROW))),
            OutputFormat::Json => Envelope::new(data, &context).into_response(),
        },
    }
}

/// Creating a key (`transit/keys/<name>`) and rotating it (`.../rotate`) take no data.
pub fn requires_data(
    path: &str,
) -> bool
{
    let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
    segments.last() != Some(&"rotate") && segments.get(1) != Some(&"keys")
}
