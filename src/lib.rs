//! datagate - a serverless SQL data API for managed relational databases
//!
//! One JSON request in, one JSON response out. Statements execute over
//! an HTTP data gateway, so the service holds no persistent database
//! connections and cold starts carry no pool setup.

pub mod api;
pub mod cli;
pub mod config;
pub mod executor;
pub mod gateway;
pub mod http_server;
pub mod observability;
pub mod records;
