//! API route declarations (e.g., /api/v1/*)

pub mod report_routes;
pub mod statistics_routes;
