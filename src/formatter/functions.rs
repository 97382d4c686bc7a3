//! The impls and functions
//!
use axum::{http::{header, HeaderMap, StatusCode}, response::{IntoResponse, Response}};
use itertools::Itertools;
use serde::Serialize;
use crate::config::Config;
use crate::error::HandlerResult;
use crate::formatter::{Envelope, OutputFormat, GLUE_NARROW};
use crate::request::RequestContext;

impl OutputFormat {
    /// `text/plain` selects text, everything else (including no header at all) selects JSON.
    /// Media type parameters, such as `charset`, are ignored.
    pub fn from_headers(
        headers: &HeaderMap,
    ) -> Self
    {
        headers.get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.split(';').next().unwrap_or_default().trim())
            .filter(|media_type| media_type.eq_ignore_ascii_case("text/plain"))
            .map(|_| OutputFormat::Text)
            .unwrap_or(OutputFormat::Json)
    }
}

impl<T: Serialize> Envelope<T> {
    pub fn new(
        payload: T,
        context: &RequestContext,
    ) -> Self
    {
        Envelope {
            payload,
            headers: context.headers.clone(),
            environment: None,
        }
    }
    /// Add the environment, if the configuration allows exposing it.
    pub fn with_environment(
        mut self,
        config: &Config,
    ) -> Self
    {
        self.environment = config.exposed_environment();
        self
    }
    pub fn into_response(self) -> HandlerResult<Response> {
        let body = serde_json::to_vec(&self)?;
        Ok((
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        ).into_response())
    }
}

pub fn text_response(
    body: String,
) -> Response
{
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    ).into_response()
}

/// Align tab delimited rows into columns.
///
/// Every cell is trimmed, every column is padded to its widest cell, except the last cell of a row,
/// and the columns are joined with `glue`. An empty glue falls back to two spaces.
/// The rows are joined with a newline, without a trailing newline.
pub fn columnize(
    rows: &[String],
    glue: &str,
) -> String
{
    let glue = if glue.is_empty() { GLUE_NARROW } else { glue };
    let split_rows: Vec<Vec<&str>> = rows.iter()
        .map(|row| row.split('\t').map(str::trim).collect())
        .collect();

    let mut widths: Vec<usize> = Vec::new();
    for cells in &split_rows {
        for (column, cell) in cells.iter().enumerate() {
            let width = cell.chars().count();
            match widths.get_mut(column) {
                Some(current) if *current < width => *current = width,
                Some(_) => {},
                None => widths.push(width),
            }
        }
    }

    split_rows.iter()
        .map(|cells| {
            let last = cells.len() - 1;
            cells.iter()
                .enumerate()
                .map(|(column, cell)| {
                    if column == last {
                        cell.to_string()
                    } else {
                        format!("{:<width$}{}", cell, glue, width = widths[column])
                    }
                })
                .join("")
        })
        .join("\n")
}

/// Render a JSON value for a key/value table: strings without quotes, everything else as JSON.
pub fn display_value(
    value: &serde_json::Value,
) -> String
{
    match value {
        serde_json::Value::String(string) => string.to_string(),
        serde_json::Value::Null => "<nil>".to_string(),
        other => other.to_string(),
    }
}
