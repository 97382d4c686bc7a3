//! The impls and functions
//!
use std::time::Instant;
use log::*;
use anyhow::Result;
use crate::config::Config;
use crate::consul::{CatalogServices, ConsulAgentMember, ConsulClient, RaftConfiguration};
use crate::request::EndpointRequest;
use crate::utility;

impl ConsulClient {
    pub fn new(
        config: &Config,
        request: &EndpointRequest,
    ) -> Result<Self>
    {
        let endpoint = config.resolve(&request.endpoint, Some("CONSUL_HTTP_ADDR"), None, Some(&config.consul_endpoint))
            .unwrap_or_else(|| config.consul_endpoint.clone());
        let token = config.resolve(&request.token, Some("CONSUL_HTTP_TOKEN"), Some("consul-token"), None);
        info!("consul endpoint: {}", endpoint);
        Ok(ConsulClient {
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
            Some(token) => request.header("X-Consul-Token", token),
            None => request,
        }
    }
    pub async fn catalog_services(&self) -> Result<CatalogServices> {
        info!("begin read catalog services");
        let timer = Instant::now();
        let services = utility::read_json(self.get("v1/catalog/services")).await?;
        info!("end read catalog services: {:?}", timer.elapsed());
        Ok(services)
    }
    /// The LAN members (not the WAN members) of the agent.
    pub async fn agent_members(&self) -> Result<Vec<ConsulAgentMember>> {
        info!("begin read agent members");
        let timer = Instant::now();
        let members = utility::read_json(self.get("v1/agent/members")).await?;
        info!("end read agent members: {:?}", timer.elapsed());
        Ok(members)
    }
    /// The raft configuration, stale reads allowed so any server can answer.
    pub async fn raft_configuration(&self) -> Result<RaftConfiguration> {
        info!("begin read raft configuration");
        let timer = Instant::now();
        let configuration = utility::read_json(self.get("v1/operator/raft/configuration?stale")).await?;
        info!("end read raft configuration: {:?}", timer.elapsed());
        Ok(configuration)
    }
}
