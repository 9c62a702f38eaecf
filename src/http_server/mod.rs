//! # datagate HTTP Server Module
//!
//! HTTP surface for the data API, combining the data endpoint with the
//! observability routes into a unified Axum server.
//!
//! # Endpoints
//!
//! - `POST /v1/data` - Execute one data operation
//! - `GET /health` - Health check
//! - `GET /metrics` - Counter registry

pub mod config;
pub mod data_routes;
pub mod observability_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
