//! Input resolution
//!
//! The CI platform surfaces step inputs as `INPUT_*` environment variables.
//! A missing service input is a successful no-op, not an error; a missing
//! cluster input falls back to the provider's default cluster. Identifier
//! syntax is not validated here, bad names are rejected by the provider.

use std::env;
use std::time::Duration;

use tracing::debug;

use crate::models::request::DeploymentRequest;

/// Environment variable carrying the service input
pub const SERVICE_VAR: &str = "INPUT_SERVICE";

/// Environment variable carrying the cluster input
pub const CLUSTER_VAR: &str = "INPUT_CLUSTER";

/// Cluster used when the input does not name one
pub const DEFAULT_CLUSTER: &str = "default";

/// Default wall-clock budget for the stability wait
pub const DEFAULT_WAIT_BUDGET: Duration = Duration::from_secs(30 * 60);

/// Resolve raw inputs into a deployment request.
///
/// Returns `None` when no service is named; empty strings count as absent.
pub fn resolve(service: Option<String>, cluster: Option<String>) -> Option<DeploymentRequest> {
    let service = service.filter(|s| !s.is_empty())?;

    let cluster = match cluster.filter(|c| !c.is_empty()) {
        Some(cluster) => cluster,
        None => {
            debug!("Cluster was not specified, using '{}'", DEFAULT_CLUSTER);
            DEFAULT_CLUSTER.to_string()
        }
    };

    Some(DeploymentRequest {
        service,
        cluster,
        wait_budget: DEFAULT_WAIT_BUDGET,
    })
}

/// Resolve the deployment request from the process environment
pub fn resolve_from_env() -> Option<DeploymentRequest> {
    resolve(env::var(SERVICE_VAR).ok(), env::var(CLUSTER_VAR).ok())
}
