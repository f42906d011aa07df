//! Percentage scale command: Complete, Validate, Run

use crate::calc;
use crate::cli::Cli;
use crate::client::{create_client, load_cluster_context};
use crate::config::AppConfig;
use crate::error::{Result, ScaleError};
use crate::output::{self, OutputFormat};
use crate::resources::{KubeResource, ResourceInfo, Scalable, SCALABLE_REGISTRY};
use k8s_openapi::api::apps::v1::{Deployment, ReplicaSet, StatefulSet};
use k8s_openapi::api::autoscaling::v1::Scale;
use kube::Client;

/// Everything a run needs, resolved once at the validation boundary and
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ScaleOptions {
    /// Explicit --context override, if any
    pub context: Option<String>,
    /// Selected context name; None means no context is active
    pub current_context: Option<String>,
    pub namespace: String,
    pub percentage: i32,
    pub all: bool,
    pub selector: Option<String>,
    /// Raw positional arguments, validated before interpretation
    pub args: Vec<String>,
    pub output: OutputFormat,
}

/// Snapshot of one matched workload at resolution time.
///
/// The replica count is read from the resource status when the target is
/// resolved; no lock is held, so it can be stale by the time the scale is
/// submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub kind: &'static str,
    pub namespace: String,
    pub name: String,
    pub current_replicas: i32,
}

/// A successfully applied scale, consumed by the reporter
#[derive(Debug, Clone)]
pub struct ScaleOutcome {
    /// Group-qualified kind, e.g. "deployment.apps"
    pub kind: String,
    pub namespace: String,
    pub name: String,
    pub current_replicas: i32,
    pub new_replicas: i32,
    /// Updated scale sub-resource returned by the API
    pub scale: Scale,
}

impl ScaleOptions {
    /// Complete phase: gather everything the later phases need from the CLI
    /// input, the tool config, and the kubeconfig. No cluster connection is
    /// made here.
    pub fn complete(cli: &Cli, app_config: &AppConfig) -> Result<Self> {
        let percentage = cli
            .pct
            .ok_or_else(|| ScaleError::InvalidArgument("--pct is required".to_string()))?;

        let cluster = load_cluster_context(cli.context.as_deref(), cli.namespace.as_deref())?;

        Ok(Self {
            context: cli.context.clone(),
            current_context: cluster.current_context,
            namespace: cluster.namespace,
            percentage,
            all: cli.all,
            selector: cli.selector.clone(),
            args: cli.target.clone(),
            output: cli.output.unwrap_or(app_config.default_output),
        })
    }

    /// Validate phase: pure checks, run to completion before any mutation.
    pub fn validate(&self) -> Result<()> {
        if self.current_context.is_none() {
            return Err(ScaleError::NoContext);
        }
        if self.args.len() > 1 {
            return Err(ScaleError::TooManyArguments(self.args.len()));
        }
        if self.args.is_empty() && !self.all {
            return Err(ScaleError::InvalidArgument(
                "a resource to scale is required, or pass --all".to_string(),
            ));
        }
        if self.percentage > 100 || self.percentage < -100 {
            return Err(ScaleError::PercentageOutOfRange(self.percentage));
        }
        Ok(())
    }

    /// Run phase: resolve the target(s), compute the new replica counts and
    /// submit them through the scale sub-resource.
    pub async fn run(&self) -> Result<()> {
        let (info, name) = parse_target(&self.args, self.all)?;
        let client = create_client(self.context.as_deref()).await?;

        match info.kind {
            "Deployment" => self.scale_workloads::<Deployment>(client, name).await,
            "StatefulSet" => self.scale_workloads::<StatefulSet>(client, name).await,
            "ReplicaSet" => self.scale_workloads::<ReplicaSet>(client, name).await,
            other => Err(ScaleError::UnknownResourceType(other.to_string())),
        }
    }

    async fn scale_workloads<T: Scalable>(
        &self,
        client: Client,
        name: Option<String>,
    ) -> Result<()> {
        let api = T::api(client, Some(&self.namespace));

        let targets = match name {
            Some(name) => {
                let workload = api.get(&name).await.map_err(|err| match err {
                    kube::Error::Api(ref resp) if resp.code == 404 => ScaleError::NotFound {
                        kind: T::KIND.to_string(),
                        name: name.clone(),
                    },
                    other => ScaleError::Kube(other),
                })?;
                vec![self.resolve_target(&workload)]
            }
            None => T::list_resources(&api, self.selector.as_deref())
                .await?
                .iter()
                .map(|w| self.resolve_target(w))
                .collect(),
        };

        tracing::debug!(kind = T::KIND, count = targets.len(), "resolved scale targets");

        // Zero matches is a successful no-op; nothing is submitted.
        let mut failed = 0usize;
        for target in &targets {
            let new_replicas = calc::new_replicas(target.current_replicas, self.percentage);
            tracing::debug!(
                kind = target.kind,
                name = %target.name,
                current = target.current_replicas,
                new = new_replicas,
                "computed replica delta"
            );

            // One attempt per target; a failure is reported and does not
            // stop the remaining targets.
            match T::submit_scale(&api, &target.name, new_replicas).await {
                Ok(scale) => {
                    let outcome = ScaleOutcome {
                        kind: T::qualified_kind(),
                        namespace: target.namespace.clone(),
                        name: target.name.clone(),
                        current_replicas: target.current_replicas,
                        new_replicas,
                        scale,
                    };
                    tracing::info!(
                        namespace = %outcome.namespace,
                        name = %outcome.name,
                        from = outcome.current_replicas,
                        to = outcome.new_replicas,
                        "scaled workload"
                    );
                    println!("{}", self.output.render(&outcome)?);
                }
                Err(err) => {
                    output::report_failure(&err);
                    failed += 1;
                }
            }
        }

        if failed > 0 {
            return Err(ScaleError::PartialFailure {
                failed,
                total: targets.len(),
            });
        }
        Ok(())
    }

    fn resolve_target<T: Scalable>(&self, workload: &T) -> ResolvedTarget {
        ResolvedTarget {
            kind: T::KIND,
            namespace: workload.namespace().unwrap_or(&self.namespace).to_string(),
            name: workload.name().to_string(),
            current_replicas: workload.observed_replicas(),
        }
    }
}

/// Interpret the positional argument as a scale target.
///
/// Accepted shapes: `kind/name`, a bare name (implied kind: deployment), a
/// bare kind token together with `--all`, or no argument at all with `--all`
/// (every deployment in the namespace).
pub fn parse_target(
    args: &[String],
    all: bool,
) -> Result<(&'static ResourceInfo, Option<String>)> {
    let (info, name) = match args.first() {
        None => (SCALABLE_REGISTRY.default_kind(), None),
        Some(arg) => match arg.split_once('/') {
            Some((kind, name)) => {
                let info = SCALABLE_REGISTRY
                    .lookup(kind)
                    .ok_or_else(|| ScaleError::UnknownResourceType(kind.to_string()))?;
                if name.is_empty() {
                    return Err(ScaleError::InvalidArgument(format!(
                        "no resource name in '{arg}'"
                    )));
                }
                (info, Some(name.to_string()))
            }
            None => match SCALABLE_REGISTRY.lookup(arg) {
                Some(info) => (info, None),
                None => (SCALABLE_REGISTRY.default_kind(), Some(arg.clone())),
            },
        },
    };

    match (all, &name) {
        (true, Some(name)) => Err(ScaleError::InvalidArgument(format!(
            "--all cannot be combined with a resource name '{name}'"
        ))),
        (false, None) => Err(ScaleError::InvalidArgument(format!(
            "a {} name is required, or pass --all",
            info.kind
        ))),
        _ => Ok((info, name)),
    }
}
