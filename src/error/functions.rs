//! The impls and functions
//!
use axum::{http::{header, StatusCode}, response::{IntoResponse, Response}};
use log::*;
use crate::error::HandlerError;

impl HandlerError {
    pub fn input(message: impl Into<String>) -> Self {
        HandlerError::Input(message.into())
    }
    pub fn status_code(&self) -> StatusCode {
        match self {
            HandlerError::Input(_) => StatusCode::BAD_REQUEST,
            HandlerError::Upstream(_) | HandlerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Any error coming out of a client call is an upstream error.
/// The alternate format keeps the full context chain, which is what the caller gets to see.
impl From<anyhow::Error> for HandlerError {
    fn from(error: anyhow::Error) -> Self {
        HandlerError::Upstream(format!("{:#}", error))
    }
}

impl From<serde_json::Error> for HandlerError {
    fn from(error: serde_json::Error) -> Self {
        HandlerError::Internal(error.to_string())
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        error!("{}: {}", status, self);
        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            format!("{}\n", self),
        ).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn unit_status_codes() {
        assert_eq!(HandlerError::input("empty path").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(HandlerError::Upstream("connection refused".to_string()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(HandlerError::Internal("serialize".to_string()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn unit_anyhow_keeps_context_chain() {
        let result: anyhow::Result<()> = Err(anyhow::anyhow!("connection refused"))
            .with_context(|| "Error reading http://localhost:8500/v1/agent/members");
        let error: HandlerError = result.unwrap_err().into();
        assert_eq!(error.to_string(), "Error reading http://localhost:8500/v1/agent/members: connection refused");
    }
}
