//! Deployment module

pub mod controller;
pub mod waiter;

use async_trait::async_trait;

use crate::errors::RedeployError;
use crate::http::client::HttpClient;
use crate::models::service::ServiceStatus;

/// Provider operations the controller depends on. Tests substitute a
/// scripted implementation.
#[async_trait]
pub trait ServiceOrchestrator {
    /// Replace all running instances of a service with fresh ones using the
    /// current service definition
    async fn force_new_deployment(
        &self,
        cluster: &str,
        service: &str,
    ) -> Result<(), RedeployError>;

    /// Query the current status of a service
    async fn describe_service(
        &self,
        cluster: &str,
        service: &str,
    ) -> Result<ServiceStatus, RedeployError>;
}

#[async_trait]
impl ServiceOrchestrator for HttpClient {
    async fn force_new_deployment(
        &self,
        cluster: &str,
        service: &str,
    ) -> Result<(), RedeployError> {
        HttpClient::force_new_deployment(self, cluster, service).await
    }

    async fn describe_service(
        &self,
        cluster: &str,
        service: &str,
    ) -> Result<ServiceStatus, RedeployError> {
        HttpClient::describe_service(self, cluster, service).await
    }
}
