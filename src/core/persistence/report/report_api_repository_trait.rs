use super::daily_report_entity::DailyReportEntity;
use super::report_fs_adapter_trait::ReportFsAdapterTrait;

/// API-facing repository abstraction for the daily report series.
pub trait ReportApiRepository: Send + Sync {
    fn fs_adapter(&self) -> &dyn ReportFsAdapterTrait;

    fn read_all(&self) -> anyhow::Result<Vec<DailyReportEntity>> {
        self.fs_adapter().read_all()
    }

    fn write_all(&self, reports: &[DailyReportEntity]) -> anyhow::Result<()> {
        self.fs_adapter().write_all(reports)
    }
}
