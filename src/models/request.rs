//! Deployment request model

use std::time::Duration;

/// One resolved redeploy request. Built once from the invocation inputs and
/// not mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRequest {
    /// Service to redeploy
    pub service: String,

    /// Cluster the service runs in
    pub cluster: String,

    /// Maximum wall-clock time to wait for the service to stabilize
    pub wait_budget: Duration,
}
