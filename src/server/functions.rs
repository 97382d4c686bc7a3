//! The impls and functions
//!
use std::{sync::Arc, time::Instant};
use axum::{extract::Request, middleware::{self, Next}, response::Response, routing::any, Router};
use log::*;
use anyhow::{Context, Result};
use crate::config::Config;
use crate::{consul, gce, gcs, nomad, slack, vault};

/// The routes of all handlers.
pub fn router(
    config: Arc<Config>,
) -> Router
{
    Router::new()
        .route("/consul-catalog-services", any(consul::catalog_services))
        .route("/consul-members", any(consul::members))
        .route("/consul-op-raft-list", any(consul::op_raft_list))
        .route("/nomad-job-status", any(nomad::job_status))
        .route("/nomad-node-status", any(nomad::node_status))
        .route("/nomad-server-members", any(nomad::server_members))
        .route("/vault-kv-get", any(vault::kv_get))
        .route("/vault-kv-put", any(vault::kv_put))
        .route("/vault-read", any(vault::read))
        .route("/vault-transit", any(vault::transit))
        .route("/vault-status", any(vault::status))
        .route("/gce-list", any(gce::list))
        .route("/gce-toggle", any(gce::toggle))
        .route("/gcs-cp-bucket", any(gcs::cp_bucket))
        .route("/gcs-make-bucket", any(gcs::make_bucket))
        .route("/gcs-remove-bucket", any(gcs::remove_bucket))
        .route("/slack-message", any(slack::message))
        .route("/healthz", any(healthz))
        .layer(middleware::from_fn(log_request))
        .with_state(config)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn log_request(
    request: Request,
    next: Next,
) -> Response
{
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    info!("begin {} {}", method, path);
    let timer = Instant::now();

    let response = next.run(request).await;

    info!("end {} {} = {}: {:?}", method, path, response.status(), timer.elapsed());
    response
}

pub async fn serve(
    listen: &str,
    config: Config,
) -> Result<()>
{
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .with_context(|| format!("Cannot bind to {}", listen))?;
    info!("listening on {}", listen);
    axum::serve(listener, router(Arc::new(config)))
        .await
        .with_context(|| "Error serving requests")?;
    Ok(())
}
