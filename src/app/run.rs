//! Top-level invocation boundary
//!
//! All fatal conditions converge here: the controller's errors become a
//! `Failure` outcome carrying a terse message, with the full diagnostic
//! detail logged at debug level.

use tracing::{debug, error};

use crate::app::options::ApiOptions;
use crate::deploy::controller::redeploy_and_wait;
use crate::errors::RedeployError;
use crate::http::client::HttpClient;
use crate::inputs;

/// Terminal result of one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure(String),
}

impl Outcome {
    /// Exit code reported to the invoking CI platform
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Success => 0,
            Outcome::Failure(_) => 1,
        }
    }
}

/// Run one redeploy-and-wait invocation.
///
/// Inputs are resolved before any configuration is read: an invocation that
/// names no service succeeds without the API ever being configured.
pub async fn run() -> Outcome {
    match try_run().await {
        Ok(()) => Outcome::Success,
        Err(e) => {
            error!("{}", e);
            debug!("{:?}", e);
            Outcome::Failure(e.to_string())
        }
    }
}

async fn try_run() -> Result<(), RedeployError> {
    let Some(request) = inputs::resolve_from_env() else {
        debug!("Service was not specified, no service updated");
        return Ok(());
    };

    let api = ApiOptions::from_env()?;
    let client = HttpClient::new(&api.base_url, api.token.clone())?;
    redeploy_and_wait(&client, &request, &api.region, tokio::time::sleep).await
}
