//! Deploy-and-wait controller
//!
//! Issues one forced-redeploy request, then polls the provider on a fixed
//! interval until the service is observed stable or the wait budget runs out.
//! The inter-check sleep is injected so tests can run the loop without
//! waiting in real time.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::deploy::waiter::{StabilityWaiter, WaitSettings, WaitState};
use crate::deploy::ServiceOrchestrator;
use crate::errors::RedeployError;
use crate::models::request::DeploymentRequest;

/// Console deep link to a service's event feed
pub fn console_events_url(region: &str, cluster: &str, service: &str) -> String {
    format!(
        "https://console.aws.amazon.com/ecs/home?region={region}#/clusters/{cluster}/services/{service}/events"
    )
}

/// Force a new deployment and block until the service is stable again.
///
/// The redeploy request is issued exactly once, before any polling. A failure
/// of that request aborts immediately; a transient failure of an individual
/// stability check only consumes one attempt.
pub async fn redeploy_and_wait<A, S, F>(
    api: &A,
    request: &DeploymentRequest,
    region: &str,
    sleep_fn: S,
) -> Result<(), RedeployError>
where
    A: ServiceOrchestrator + ?Sized,
    S: Fn(Duration) -> F,
    F: Future<Output = ()>,
{
    debug!(
        "Updating service '{}' in cluster '{}'",
        request.service, request.cluster
    );
    api.force_new_deployment(&request.cluster, &request.service)
        .await?;

    info!(
        "Deployment started. Watch this deployment's progress in the console: {}",
        console_events_url(region, &request.cluster, &request.service)
    );

    let settings = WaitSettings {
        wait_budget: request.wait_budget,
        ..Default::default()
    };
    let mut waiter = StabilityWaiter::new(settings);
    debug!(
        "Waiting for the service to become stable. Will wait for {:?} ({} checks at {:?} intervals)",
        request.wait_budget,
        waiter.max_attempts(),
        waiter.interval()
    );

    loop {
        let stable = match api
            .describe_service(&request.cluster, &request.service)
            .await
        {
            Ok(status) => status.is_stable(),
            Err(e) if e.is_transient() => {
                warn!("Stability check failed, will retry: {}", e);
                false
            }
            Err(e) => return Err(e),
        };

        match waiter.observe(stable) {
            WaitState::Stable => {
                info!(
                    "Service '{}' is stable after {} stability checks",
                    request.service,
                    waiter.attempts_made()
                );
                return Ok(());
            }
            WaitState::TimedOut => {
                return Err(RedeployError::WaitTimeout {
                    attempts: waiter.attempts_made(),
                    budget: request.wait_budget,
                });
            }
            WaitState::Polling => {
                sleep_fn(waiter.interval()).await;
            }
        }
    }
}
