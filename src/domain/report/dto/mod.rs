pub mod daily_report_patch_request;
pub mod report_statistics_dto;
