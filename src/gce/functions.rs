//! The impls and functions
//!
use std::time::Instant;
use log::*;
use anyhow::Result;
use crate::config::Config;
use crate::gce::{ComputeInstance, GceClient, Instance, InstanceGroupManager, ItemList, Operation, Region, GCE_SECRET};
use crate::gcp;
use crate::utility;

impl GceClient {
    pub async fn new(
        config: &Config,
        project: &str,
        region: &str,
        json_key_path: &str,
    ) -> Result<Self>
    {
        let client = utility::http_client(config)?;
        let token = gcp::access_token(config, &client, json_key_path, GCE_SECRET).await?;
        info!("compute project: {}, region: {}", project, region);
        Ok(GceClient {
            client,
            api: config.compute_api.clone(),
            project: project.to_string(),
            region: region.to_string(),
            token,
        })
    }
    fn url(
        &self,
        path: &str,
    ) -> String
    {
        utility::join_url(&self.api, &format!("projects/{}/{}", self.project, path))
    }
    fn get(
        &self,
        path: &str,
    ) -> reqwest::RequestBuilder
    {
        self.client.get(self.url(path)).bearer_auth(&self.token)
    }
    fn post(
        &self,
        path: &str,
    ) -> reqwest::RequestBuilder
    {
        self.client.post(self.url(path)).bearer_auth(&self.token)
    }
    /// The names of the zones of the region.
    pub async fn zones(&self) -> Result<Vec<String>> {
        info!("begin read region {}", self.region);
        let timer = Instant::now();
        let region: Region = utility::read_json(self.get(&format!("regions/{}", self.region))).await?;
        info!("end read region {}: {:?}", self.region, timer.elapsed());
        Ok(region.zones
            .iter()
            .map(|zone| utility::last_path_segment(zone).to_string())
            .collect())
    }
    pub async fn instances(
        &self,
        zone: &str,
    ) -> Result<Vec<ComputeInstance>>
    {
        info!("begin read instances {}", zone);
        let timer = Instant::now();
        let instances: ItemList<ComputeInstance> = utility::read_json(self.get(&format!("zones/{}/instances", zone))).await?;
        if instances.next_page_token.is_some() {
            warn!("zone {}: only the first page of instances is read", zone);
        }
        info!("end read instances {}: {:?}", zone, timer.elapsed());
        Ok(instances.items)
    }
    /// The instances of every zone of the region, zone by zone.
    pub async fn region_instances(&self) -> Result<Vec<ComputeInstance>> {
        let mut instances = Vec::new();
        for zone in self.zones().await? {
            instances.extend(self.instances(&zone).await?);
        }
        Ok(instances)
    }
    pub async fn start(
        &self,
        instance: &ComputeInstance,
    ) -> Result<Operation>
    {
        info!("start instance {}", instance.name);
        let zone = utility::last_path_segment(&instance.zone);
        utility::read_json(self.post(&format!("zones/{}/instances/{}/start", zone, instance.name))).await
    }
    pub async fn stop(
        &self,
        instance: &ComputeInstance,
    ) -> Result<Operation>
    {
        info!("stop instance {}", instance.name);
        let zone = utility::last_path_segment(&instance.zone);
        utility::read_json(self.post(&format!("zones/{}/instances/{}/stop", zone, instance.name))).await
    }
    pub async fn instance_group_managers(&self) -> Result<Vec<InstanceGroupManager>> {
        info!("begin read instance group managers {}", self.region);
        let timer = Instant::now();
        let managers: ItemList<InstanceGroupManager> = utility::read_json(self.get(&format!("regions/{}/instanceGroupManagers", self.region))).await?;
        info!("end read instance group managers {}: {:?}", self.region, timer.elapsed());
        Ok(managers.items)
    }
    pub async fn resize(
        &self,
        manager: &str,
        size: u32,
    ) -> Result<Operation>
    {
        info!("resize {} to {}", manager, size);
        let request = self.post(&format!("regions/{}/instanceGroupManagers/{}/resize", self.region, manager))
            .query(&[("size", size)]);
        utility::read_json(request).await
    }
}

impl From<&ComputeInstance> for Instance {
    fn from(instance: &ComputeInstance) -> Self {
        let interface = instance.network_interfaces.first();
        Instance {
            name: instance.name.clone(),
            zone: utility::last_path_segment(&instance.zone).to_string(),
            machine_type: utility::last_path_segment(&instance.machine_type).to_string(),
            preemptible: instance.scheduling.preemptible.to_string(),
            internal_ip: interface
                .map(|interface| interface.network_ip.clone())
                .unwrap_or_default(),
            external_ip: interface
                .and_then(|interface| interface.access_configs.first())
                .map(|access_config| access_config.nat_ip.clone())
                .unwrap_or_default(),
            status: instance.status.clone(),
        }
    }
}
