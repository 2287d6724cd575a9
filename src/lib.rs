//! Daily epidemiological report service: a JSON-backed series of cumulative
//! regional counters with range queries and derived statistics over HTTP.

pub mod api;
pub mod app_state;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod routes;
