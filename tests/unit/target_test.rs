//! Tests for target selector parsing

use scale_pct::commands::parse_target;
use scale_pct::error::ScaleError;

fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// kind/name form
// ============================================================================

#[test]
fn test_parse_kind_slash_name() {
    let (info, name) = parse_target(&args(&["deployment/nginx"]), false).unwrap();
    assert_eq!(info.kind, "Deployment");
    assert_eq!(name, Some("nginx".to_string()));
}

#[test]
fn test_parse_alias_slash_name() {
    let (info, name) = parse_target(&args(&["rs/foo"]), false).unwrap();
    assert_eq!(info.kind, "ReplicaSet");
    assert_eq!(name, Some("foo".to_string()));
}

#[test]
fn test_parse_plural_slash_name() {
    let (info, name) = parse_target(&args(&["statefulsets/mysql"]), false).unwrap();
    assert_eq!(info.kind, "StatefulSet");
    assert_eq!(name, Some("mysql".to_string()));
}

#[test]
fn test_parse_kind_is_case_insensitive() {
    let (info, _) = parse_target(&args(&["Deployment/nginx"]), false).unwrap();
    assert_eq!(info.kind, "Deployment");
}

#[test]
fn test_parse_unknown_kind() {
    let err = parse_target(&args(&["cronjob/backup"]), false).unwrap_err();
    match err {
        ScaleError::UnknownResourceType(kind) => assert_eq!(kind, "cronjob"),
        other => panic!("Expected UnknownResourceType, got {other:?}"),
    }
}

#[test]
fn test_parse_empty_name_rejected() {
    let err = parse_target(&args(&["deployment/"]), false).unwrap_err();
    assert!(matches!(err, ScaleError::InvalidArgument(_)));
}

// ============================================================================
// bare name form
// ============================================================================

#[test]
fn test_parse_bare_name_implies_deployment() {
    let (info, name) = parse_target(&args(&["nginx"]), false).unwrap();
    assert_eq!(info.kind, "Deployment");
    assert_eq!(name, Some("nginx".to_string()));
}

// ============================================================================
// --all mode
// ============================================================================

#[test]
fn test_parse_all_with_bare_kind() {
    let (info, name) = parse_target(&args(&["deployments"]), true).unwrap();
    assert_eq!(info.kind, "Deployment");
    assert!(name.is_none());
}

#[test]
fn test_parse_all_with_alias() {
    let (info, name) = parse_target(&args(&["sts"]), true).unwrap();
    assert_eq!(info.kind, "StatefulSet");
    assert!(name.is_none());
}

#[test]
fn test_parse_all_with_no_args_defaults_to_deployments() {
    let (info, name) = parse_target(&[], true).unwrap();
    assert_eq!(info.kind, "Deployment");
    assert!(name.is_none());
}

#[test]
fn test_parse_bare_kind_without_all_rejected() {
    let err = parse_target(&args(&["deployments"]), false).unwrap_err();
    assert!(matches!(err, ScaleError::InvalidArgument(_)));
}

#[test]
fn test_parse_no_args_without_all_rejected() {
    let err = parse_target(&[], false).unwrap_err();
    assert!(matches!(err, ScaleError::InvalidArgument(_)));
}

#[test]
fn test_parse_all_with_named_target_rejected() {
    let err = parse_target(&args(&["deployment/nginx"]), true).unwrap_err();
    assert!(matches!(err, ScaleError::InvalidArgument(_)));
}

#[test]
fn test_parse_all_with_bare_name_rejected() {
    let err = parse_target(&args(&["nginx"]), true).unwrap_err();
    assert!(matches!(err, ScaleError::InvalidArgument(_)));
}
