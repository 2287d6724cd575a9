//! Daily report domain: range queries, alignment and derived statistics

pub mod dto;
pub mod error;
pub mod model;
pub mod service;
