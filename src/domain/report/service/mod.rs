//! Report engine (filter, aligner, statistics) and the services built on it

pub mod daily_report_service;
pub mod date_range_filter;
pub mod report_statistics;
pub mod report_statistics_service;
pub mod series_aligner;
