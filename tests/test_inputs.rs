//! Input resolver unit tests

use std::time::Duration;

use ecs_redeploy::inputs::{resolve, DEFAULT_CLUSTER, DEFAULT_WAIT_BUDGET};

#[test]
fn test_absent_service_is_noop() {
    assert_eq!(resolve(None, None), None);
    assert_eq!(resolve(None, Some("prod".to_string())), None);
}

#[test]
fn test_empty_service_is_noop() {
    assert_eq!(resolve(Some(String::new()), Some("prod".to_string())), None);
}

#[test]
fn test_absent_cluster_uses_default() {
    let request = resolve(Some("my-svc".to_string()), None).unwrap();
    assert_eq!(request.service, "my-svc");
    assert_eq!(request.cluster, DEFAULT_CLUSTER);
}

#[test]
fn test_empty_cluster_uses_default() {
    let request = resolve(Some("my-svc".to_string()), Some(String::new())).unwrap();
    assert_eq!(request.cluster, "default");
}

#[test]
fn test_both_inputs_pass_through() {
    let request = resolve(Some("my-svc".to_string()), Some("prod".to_string())).unwrap();
    assert_eq!(request.service, "my-svc");
    assert_eq!(request.cluster, "prod");
}

#[test]
fn test_default_wait_budget_is_thirty_minutes() {
    let request = resolve(Some("my-svc".to_string()), None).unwrap();
    assert_eq!(request.wait_budget, DEFAULT_WAIT_BUDGET);
    assert_eq!(request.wait_budget, Duration::from_secs(1800));
}
