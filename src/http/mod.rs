//! HTTP access to the provider API

pub mod client;
pub mod services;
