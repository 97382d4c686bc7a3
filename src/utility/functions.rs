//! Utilities
//!
use std::time::Instant;
use log::*;
use anyhow::{anyhow, Context, Result};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use crate::config::Config;

/// Build the http client for one request, using the configured timeout.
pub fn http_client(
    config: &Config,
) -> Result<reqwest::Client>
{
    reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .with_context(|| "Error building http client")
}

/// Join a base url and a path, with exactly one slash between them.
pub fn join_url(
    base: &str,
    path: &str,
) -> String
{
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// The part after the last slash, for example the zone name of a zone url.
pub fn last_path_segment(
    path: &str,
) -> &str
{
    path.rsplit('/').next().unwrap_or(path)
}

/// Send the request and return the status and the body text.
async fn send(
    request: RequestBuilder,
) -> Result<(StatusCode, String, String)>
{
    let timer = Instant::now();
    let response = request.send()
        .await
        .with_context(|| "Error sending http request")?;
    let status = response.status();
    let url = response.url().to_string();
    let body = response.text()
        .await
        .with_context(|| format!("Error reading response body from {}", url))?;
    debug!("{} = {} ({:?})", url, status, timer.elapsed());
    Ok((status, url, body))
}

/// Send the request, require a success status, and parse the JSON body.
pub async fn read_json<T>(
    request: RequestBuilder,
) -> Result<T>
where
    T: DeserializeOwned,
{
    let (status, url, body) = send(request).await?;
    if !status.is_success() {
        return Err(unexpected_response(status, &body))
            .with_context(|| format!("Error reading {}", url));
    }
    serde_json::from_str(&body)
        .with_context(|| format!("Error parsing json from {}", url))
}

/// Like [read_json], but a `204 No Content`, a `404 Not Found` or an empty body is `None`.
pub async fn read_optional_json<T>(
    request: RequestBuilder,
) -> Result<Option<T>>
where
    T: DeserializeOwned,
{
    let (status, url, body) = send(request).await?;
    if status == StatusCode::NO_CONTENT || status == StatusCode::NOT_FOUND {
        debug!("{}: no data ({})", url, status);
        return Ok(None);
    }
    if !status.is_success() {
        return Err(unexpected_response(status, &body))
            .with_context(|| format!("Error reading {}", url));
    }
    if body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(&body)
        .map(Some)
        .with_context(|| format!("Error parsing json from {}", url))
}

/// For writes: a `204 No Content` or an empty body is `None`, every other non-success status an error.
pub async fn read_json_or_empty<T>(
    request: RequestBuilder,
) -> Result<Option<T>>
where
    T: DeserializeOwned,
{
    let (status, url, body) = send(request).await?;
    if !status.is_success() {
        return Err(unexpected_response(status, &body))
            .with_context(|| format!("Error writing {}", url));
    }
    if status == StatusCode::NO_CONTENT || body.trim().is_empty() {
        debug!("{}: no data ({})", url, status);
        return Ok(None);
    }
    serde_json::from_str(&body)
        .map(Some)
        .with_context(|| format!("Error parsing json from {}", url))
}

fn unexpected_response(
    status: StatusCode,
    body: &str,
) -> anyhow::Error
{
    let body = body.trim();
    if body.is_empty() {
        anyhow!("Unexpected response code: {}", status.as_u16())
    } else {
        anyhow!("Unexpected response code: {} ({})", status.as_u16(), body)
    }
}
