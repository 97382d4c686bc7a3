//! The impls and functions
//!
use std::time::Instant;
use log::*;
use anyhow::Result;
use crate::config::Config;
use crate::nomad::{JobListStub, NodeListStub, NomadClient, ServerMembers};
use crate::request::EndpointRequest;
use crate::utility;

impl NomadClient {
    pub fn new(
        config: &Config,
        request: &EndpointRequest,
    ) -> Result<Self>
    {
        let endpoint = config.resolve(&request.endpoint, Some("NOMAD_ADDR"), None, Some(&config.nomad_endpoint))
            .unwrap_or_else(|| config.nomad_endpoint.clone());
        let token = config.resolve(&request.token, Some("NOMAD_TOKEN"), Some("nomad-token"), None);
        info!("nomad endpoint: {}", endpoint);
        Ok(NomadClient {
            client: utility::http_client(config)?,
            endpoint,
            token,
        })
    }
    fn get(
        &self,
        path: &str,
    ) -> reqwest::RequestBuilder
    {
        let request = self.client.get(utility::join_url(&self.endpoint, path));
        match &self.token {
            Some(token) => request.header("X-Nomad-Token", token),
            None => request,
        }
    }
    pub async fn jobs(&self) -> Result<Vec<JobListStub>> {
        info!("begin read jobs");
        let timer = Instant::now();
        let jobs = utility::read_json(self.get("v1/jobs")).await?;
        info!("end read jobs: {:?}", timer.elapsed());
        Ok(jobs)
    }
    pub async fn nodes(&self) -> Result<Vec<NodeListStub>> {
        info!("begin read nodes");
        let timer = Instant::now();
        let nodes = utility::read_json(self.get("v1/nodes")).await?;
        info!("end read nodes: {:?}", timer.elapsed());
        Ok(nodes)
    }
    pub async fn server_members(&self) -> Result<ServerMembers> {
        info!("begin read server members");
        let timer = Instant::now();
        let members = utility::read_json(self.get("v1/agent/members")).await?;
        info!("end read server members: {:?}", timer.elapsed());
        Ok(members)
    }
    /// The RPC address (`host:port`) of the current leader.
    pub async fn leader(&self) -> Result<String> {
        utility::read_json(self.get("v1/status/leader")).await
    }
}
