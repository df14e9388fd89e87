//! ecs-redeploy - Entry Point
//!
//! A single-shot CI step that forces a new deployment of an ECS-style
//! service and waits until the service is observed stable.

use std::process::ExitCode;

use ecs_redeploy::app::run::{run, Outcome};
use ecs_redeploy::logs::{init_logging, LogOptions};
use ecs_redeploy::utils::version_info;

use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let logging = match LogOptions::from_env() {
        Ok(logging) => logging,
        Err(e) => {
            eprintln!("Invalid log configuration: {e}");
            LogOptions::default()
        }
    };
    if let Err(e) = init_logging(logging) {
        println!("Failed to initialize logging: {e}");
    }

    let version = version_info();
    info!(
        "ecs-redeploy {} ({}, built {})",
        version.version, version.git_hash, version.build_time
    );

    // Polling sleeps are cancelled along with everything else when the CI
    // platform terminates the job
    let outcome = tokio::select! {
        outcome = run() => outcome,
        _ = await_shutdown_signal() => {
            error!("Terminated before the service was confirmed stable");
            Outcome::Failure("interrupted".to_string())
        }
    };

    if let Outcome::Failure(message) = &outcome {
        eprintln!("{message}");
    }
    ExitCode::from(outcome.exit_code() as u8)
}

async fn await_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = match signal(SignalKind::terminate()) {
            Ok(sigterm) => sigterm,
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
                return std::future::pending::<()>().await;
            }
        };

        tokio::select! {
            _ = sigterm.recv() => {
                info!("SIGTERM received, shutting down...");
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Ctrl+C received, shutting down...");
            }
        }
    }

    #[cfg(not(unix))]
    {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Ctrl+C received, shutting down...");
        }
    }
}
