//! Daily report persistence (single JSON document)

pub mod daily_report_entity;
pub mod report_api_repository_trait;
pub mod report_date_format;
pub mod report_fs_adapter;
pub mod report_fs_adapter_trait;
pub mod report_repository;
