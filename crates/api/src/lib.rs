//! HTTP API: routing, request/response mapping and service configuration.

pub mod app;
pub mod config;
pub mod middleware;
