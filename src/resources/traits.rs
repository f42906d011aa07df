//! Core traits for scalable Kubernetes workloads

use crate::error::{Result, ScaleError};
use async_trait::async_trait;
use k8s_openapi::api::autoscaling::v1::Scale;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::api::{Patch, PatchParams};
use kube::{Api, Client, Resource};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::json;
use std::fmt::Debug;

/// Core trait implemented by every resource this tool can address
pub trait KubeResource:
    Clone + Debug + DeserializeOwned + Serialize + Send + Sync + Resource + 'static
{
    /// The Kubernetes API kind (e.g., "Deployment")
    const KIND: &'static str;

    /// The API group (e.g., "apps")
    const GROUP: &'static str;

    /// The API version (e.g., "v1")
    const VERSION: &'static str;

    /// Plural name for API path (e.g., "deployments")
    const PLURAL: &'static str;

    /// Short aliases (e.g., ["deploy"] for deployments)
    const ALIASES: &'static [&'static str] = &[];

    /// Whether this resource is namespaced
    const NAMESPACED: bool;

    /// Get object metadata
    fn metadata(&self) -> &ObjectMeta;

    /// Get the resource name
    fn name(&self) -> &str {
        self.metadata().name.as_deref().unwrap_or("<unknown>")
    }

    /// Get the resource namespace (if namespaced)
    fn namespace(&self) -> Option<&str> {
        self.metadata().namespace.as_deref()
    }

    /// Group-qualified singular kind, e.g. "deployment.apps"
    fn qualified_kind() -> String {
        if Self::GROUP.is_empty() {
            Self::KIND.to_lowercase()
        } else {
            format!("{}.{}", Self::KIND.to_lowercase(), Self::GROUP)
        }
    }
}

/// Trait for workloads that can be scaled through the scale sub-resource
#[async_trait]
pub trait Scalable: KubeResource {
    /// Create a kube Api handle for this workload
    fn api(client: Client, namespace: Option<&str>) -> Api<Self>
    where
        Self: Sized;

    /// Create an Api for all namespaces
    fn api_all(client: Client) -> Api<Self>
    where
        Self: Sized;

    /// List workloads with an optional label selector
    async fn list_resources(api: &Api<Self>, label_selector: Option<&str>) -> Result<Vec<Self>>
    where
        Self: Sized;

    /// Replica count observed in the resource status at resolution time
    fn observed_replicas(&self) -> i32;

    /// Submit a new replica count through the scale sub-resource.
    ///
    /// One merge patch with default parameters: no resourceVersion
    /// precondition and no retry, so a write that races a concurrent update
    /// is accepted.
    async fn submit_scale(api: &Api<Self>, name: &str, replicas: i32) -> Result<Scale>
    where
        Self: Sized,
    {
        let patch = json!({
            "spec": {
                "replicas": replicas
            }
        });

        api.patch_scale(name, &PatchParams::default(), &Patch::Merge(&patch))
            .await
            .map_err(|source| ScaleError::ScaleFailed {
                kind: Self::KIND.to_string(),
                name: name.to_string(),
                source,
            })
    }
}
