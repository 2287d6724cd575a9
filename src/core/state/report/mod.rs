//! In-memory report series and its synchronized owner

pub mod report_series;
pub mod report_store;
