//! Kubernetes client and kubeconfig access

use crate::error::{Result, ScaleError};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};

/// Create a Kubernetes client for the specified context
pub async fn create_client(context: Option<&str>) -> Result<Client> {
    let config = load_config(context).await?;
    Client::try_from(config).map_err(ScaleError::from)
}

/// Load Kubernetes configuration
async fn load_config(context: Option<&str>) -> Result<Config> {
    tracing::debug!(context = ?context, "loading kubeconfig");

    let options = KubeConfigOptions {
        context: context.map(String::from),
        ..Default::default()
    };

    Config::from_kubeconfig(&options)
        .await
        .map_err(|e| ScaleError::Config(format!("Failed to load kubeconfig: {e}")))
}

/// The connection facts a run needs before it talks to the cluster:
/// which context is selected (if any) and which namespace applies.
#[derive(Debug, Clone)]
pub struct ClusterContext {
    /// Selected context name: the `--context` override if given, otherwise
    /// the kubeconfig's `current-context`. `None` means no context is active.
    pub current_context: Option<String>,
    pub namespace: String,
}

/// Read the kubeconfig and resolve the selected context and namespace.
///
/// Namespace precedence: explicit flag, then the selected context's
/// namespace, then "default". No cluster connection is made here.
pub fn load_cluster_context(
    context: Option<&str>,
    namespace: Option<&str>,
) -> Result<ClusterContext> {
    let kubeconfig = Kubeconfig::read()
        .map_err(|e| ScaleError::Config(format!("Failed to read kubeconfig: {e}")))?;

    let current_context = context
        .map(String::from)
        .or_else(|| kubeconfig.current_context.clone());

    let context_namespace = current_context.as_deref().and_then(|name| {
        kubeconfig
            .contexts
            .iter()
            .find(|ctx| ctx.name == name)
            .and_then(|ctx| ctx.context.as_ref())
            .and_then(|ctx| ctx.namespace.clone())
    });

    let namespace = namespace
        .map(String::from)
        .or(context_namespace)
        .unwrap_or_else(|| "default".to_string());

    Ok(ClusterContext {
        current_context,
        namespace,
    })
}
