//! Service API client

use crate::errors::RedeployError;
use crate::http::client::HttpClient;
use crate::models::service::ServiceStatus;

impl HttpClient {
    /// Force a new deployment of a service without changing its definition
    pub async fn force_new_deployment(
        &self,
        cluster: &str,
        service: &str,
    ) -> Result<(), RedeployError> {
        let path = format!("/clusters/{}/services/{}/deployments", cluster, service);
        let body = serde_json::json!({ "force_new_deployment": true });
        let _: serde_json::Value = self.post(&path, &body).await?;
        Ok(())
    }

    /// Fetch the current status snapshot of a service
    pub async fn describe_service(
        &self,
        cluster: &str,
        service: &str,
    ) -> Result<ServiceStatus, RedeployError> {
        let path = format!("/clusters/{}/services/{}", cluster, service);
        self.get(&path).await
    }
}
