//! Application configuration options

use std::env;

use secrecy::SecretString;

use crate::errors::RedeployError;

/// Environment variable naming the provider API base URL
pub const API_URL_VAR: &str = "ECS_API_URL";

/// Environment variable carrying the provider API token
pub const API_TOKEN_VAR: &str = "ECS_API_TOKEN";

/// Environment variable naming the provider region, used for console links
pub const REGION_VAR: &str = "AWS_REGION";

const DEFAULT_REGION: &str = "us-east-1";

/// Provider API options. Only required once an invocation actually names a
/// service; the no-op path never reads these.
#[derive(Debug, Clone)]
pub struct ApiOptions {
    /// Base URL of the provider's service API
    pub base_url: String,

    /// Bearer token for the provider API
    pub token: SecretString,

    /// Region used to build console deep links
    pub region: String,
}

impl ApiOptions {
    /// Build API options from the process environment
    pub fn from_env() -> Result<Self, RedeployError> {
        let base_url = env::var(API_URL_VAR)
            .map_err(|_| RedeployError::ConfigError(format!("{API_URL_VAR} is not set")))?;
        let token = env::var(API_TOKEN_VAR)
            .map_err(|_| RedeployError::ConfigError(format!("{API_TOKEN_VAR} is not set")))?;
        let region = env::var(REGION_VAR).unwrap_or_else(|_| DEFAULT_REGION.to_string());

        Ok(Self {
            base_url,
            token: SecretString::from(token),
            region,
        })
    }
}
