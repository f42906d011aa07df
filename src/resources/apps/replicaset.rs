//! ReplicaSet workload implementation

use crate::error::Result;
use crate::resources::{KubeResource, Scalable};
use async_trait::async_trait;
use k8s_openapi::api::apps::v1::ReplicaSet;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::api::ListParams;
use kube::{Api, Client};

impl KubeResource for ReplicaSet {
    const KIND: &'static str = "ReplicaSet";
    const GROUP: &'static str = "apps";
    const VERSION: &'static str = "v1";
    const PLURAL: &'static str = "replicasets";
    const ALIASES: &'static [&'static str] = &["rs"];
    const NAMESPACED: bool = true;

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }
}

#[async_trait]
impl Scalable for ReplicaSet {
    fn api(client: Client, namespace: Option<&str>) -> Api<Self> {
        match namespace {
            Some(ns) => Api::namespaced(client, ns),
            None => Api::default_namespaced(client),
        }
    }

    fn api_all(client: Client) -> Api<Self> {
        Api::all(client)
    }

    async fn list_resources(api: &Api<Self>, label_selector: Option<&str>) -> Result<Vec<Self>> {
        let mut lp = ListParams::default();
        if let Some(ls) = label_selector {
            lp = lp.labels(ls);
        }

        let list = api.list(&lp).await?;
        Ok(list.items)
    }

    fn observed_replicas(&self) -> i32 {
        self.status.as_ref().map(|s| s.replicas).unwrap_or(0)
    }
}
