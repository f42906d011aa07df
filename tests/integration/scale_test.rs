//! Integration tests for scale operations
//!
//! These tests require a real Kubernetes cluster. They read cluster state and
//! only ever submit a no-op scale (a zero-match --all run), so they are safe
//! against shared clusters.

use k8s_openapi::api::apps::v1::Deployment;
use scale_pct::client::{create_client, load_cluster_context};
use scale_pct::commands::ScaleOptions;
use scale_pct::output::OutputFormat;
use scale_pct::resources::{KubeResource, Scalable};

mod common {
    include!("../common/mod.rs");
}

#[tokio::test]
#[ignore]
async fn test_create_client() {
    let client = create_client(None).await;
    assert!(client.is_ok(), "Should create client from kubeconfig");
}

#[test]
#[ignore]
fn test_load_cluster_context() {
    let cluster = load_cluster_context(None, None).expect("Should read kubeconfig");
    assert!(
        cluster.current_context.is_some(),
        "Test cluster should have a current context"
    );
    assert!(!cluster.namespace.is_empty());
}

#[test]
#[ignore]
fn test_namespace_flag_wins_over_kubeconfig() {
    let cluster = load_cluster_context(None, Some("kube-system")).expect("Should read kubeconfig");
    assert_eq!(cluster.namespace, "kube-system");
}

#[tokio::test]
#[ignore]
async fn test_list_deployments_kube_system() {
    let client = create_client(None).await.expect("Should create client");
    let api = Deployment::api(client, Some("kube-system"));

    let deployments = Deployment::list_resources(&api, None)
        .await
        .expect("Should list deployments in kube-system");
    assert!(!deployments.is_empty(), "kube-system should have deployments");
}

#[tokio::test]
#[ignore]
async fn test_observed_replicas_matches_scale_subresource() {
    let client = create_client(None).await.expect("Should create client");
    let api = Deployment::api(client, Some("kube-system"));

    let deployments = Deployment::list_resources(&api, None)
        .await
        .expect("Should list deployments");

    if let Some(deploy) = deployments.first() {
        let scale = api
            .get_scale(deploy.name())
            .await
            .expect("Should read the scale sub-resource");
        let status = scale.status.expect("Scale should carry a status");
        assert_eq!(deploy.observed_replicas(), status.replicas);
    }
}

#[tokio::test]
#[ignore]
async fn test_all_mode_with_zero_matches_is_a_noop() {
    if !common::has_kubeconfig() {
        return;
    }

    let options = ScaleOptions {
        context: None,
        current_context: Some("integration".to_string()),
        namespace: "default".to_string(),
        percentage: 50,
        all: true,
        selector: Some("scale-pct-integration-test=no-such-label".to_string()),
        args: vec![],
        output: OutputFormat::Name,
    };

    options.validate().expect("Options should validate");
    let result = options.run().await;
    assert!(result.is_ok(), "Zero matches should complete without error");
}
