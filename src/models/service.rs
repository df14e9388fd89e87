//! Service status models

use serde::{Deserialize, Serialize};

/// Snapshot of a service as reported by the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    /// Service name
    pub service_name: String,

    /// Instance count the provider is asked to maintain
    pub desired_count: i64,

    /// Instance count currently running
    pub running_count: i64,

    /// Rollouts known to the provider; the active one is always present,
    /// additional entries mean a deployment is still in progress
    #[serde(default)]
    pub rollouts: Vec<Rollout>,
}

/// One rollout of a service definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rollout {
    /// Rollout ID
    pub id: String,

    /// Rollout status: 'PRIMARY', 'ACTIVE'
    pub status: String,
}

impl ServiceStatus {
    /// Steady state: running count matches desired count and no rollout
    /// beyond the active one remains in flight.
    pub fn is_stable(&self) -> bool {
        self.running_count == self.desired_count && self.rollouts.len() <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(desired: i64, running: i64, rollouts: usize) -> ServiceStatus {
        ServiceStatus {
            service_name: "web".to_string(),
            desired_count: desired,
            running_count: running,
            rollouts: (0..rollouts)
                .map(|i| Rollout {
                    id: format!("rollout-{i}"),
                    status: if i == 0 { "PRIMARY" } else { "ACTIVE" }.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_stable_when_counts_match_and_single_rollout() {
        assert!(status(3, 3, 1).is_stable());
    }

    #[test]
    fn test_not_stable_while_scaling() {
        assert!(!status(3, 1, 1).is_stable());
    }

    #[test]
    fn test_not_stable_with_rollout_in_flight() {
        assert!(!status(3, 3, 2).is_stable());
    }
}
