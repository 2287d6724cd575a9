use std::path::PathBuf;

use super::report_api_repository_trait::ReportApiRepository;
use super::report_fs_adapter::ReportFsAdapter;
use super::report_fs_adapter_trait::ReportFsAdapterTrait;

pub struct ReportRepository {
    adapter: ReportFsAdapter,
}

impl ReportRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            adapter: ReportFsAdapter::new(path),
        }
    }
}

impl ReportApiRepository for ReportRepository {
    fn fs_adapter(&self) -> &dyn ReportFsAdapterTrait {
        &self.adapter
    }
}
