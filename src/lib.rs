//! ECS Redeploy Library
//!
//! Core modules for a single-shot CI step that forces a new deployment of an
//! ECS-style container service and waits until the service is stable again.

pub mod app;
pub mod deploy;
pub mod errors;
pub mod http;
pub mod inputs;
pub mod logs;
pub mod models;
pub mod utils;
