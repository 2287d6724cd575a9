use anyhow::Result;

use super::daily_report_entity::DailyReportEntity;

/// Whole-document storage for the report series.
///
/// The series is small (one row per day), so it is always read and written
/// in full. `write_all` must either replace the stored document completely or
/// leave it untouched.
pub trait ReportFsAdapterTrait: Send + Sync {
    fn read_all(&self) -> Result<Vec<DailyReportEntity>>;

    fn write_all(&self, reports: &[DailyReportEntity]) -> Result<()>;
}
