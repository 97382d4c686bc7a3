//! `/vault-kv-get`
//!
use std::sync::Arc;
use axum::{body::Bytes, extract::State, http::HeaderMap, response::Response};
use crate::config::Config;
use crate::error::{HandlerError, HandlerResult};
use crate::formatter::{self, Envelope, OutputFormat, GLUE_NARROW};
use crate::request::{self, RequestContext};
use crate::vault::{key_value_rows, SecretData, VaultClient, VaultReadRequest};

pub async fn kv_get(
    State(config): State<Arc<Config>>,
    headers: HeaderMap,
    body: Bytes,
) -> HandlerResult<Response>
{
    let context = RequestContext::from_headers(&headers);
    let request: VaultReadRequest = request::decode_body(&body)?;
    let path = request::required(Some(request.path.clone()), "empty path")?;

    let client = VaultClient::new(&config, &request.target)?;
    let data = read_secret_data(&client, &path, &request).await?;

    match context.format {
        OutputFormat::Text => Ok(formatter::text_response(kv_sections(&path, &data)?)),
        OutputFormat::Json => Envelope::new(data, &context).into_response(),
    }
}

/// The `data` of the secret at the path. No secret is an error.
pub async fn read_secret_data(
    client: &VaultClient,
    path: &str,
    request: &VaultReadRequest,
) -> HandlerResult<SecretData>
{
    client.read(path, &request.data)
        .await?
        .and_then(|secret| secret.data)
        .ok_or_else(|| HandlerError::Upstream(format!("no secret found at {}", path)))
}

/// A kv version 2 secret carries a `metadata` and a `data` object, rendered as two sections.
fn kv_sections(
    path: &str,
    data: &SecretData,
) -> HandlerResult<String>
{
    let section = |name: &str| {
        data.get(name)
            .and_then(|value| value.as_object())
            .ok_or_else(|| HandlerError::Upstream(format!("no kv version 2 {} at {}", name, path)))
    };
    let metadata = section("metadata")?;
    let values = section("data")?;

    let mut rows = vec!["Metadata values:\t".to_string(), "======== ====== \t".to_string()];
    rows.extend(key_value_rows(metadata));
    rows.push(String::new());
    rows.push("Data values:\t".to_string());
    rows.push("==== ====== \t".to_string());
    rows.extend(key_value_rows(values));
    Ok(formatter::columnize(&rows, GLUE_NARROW))
}
