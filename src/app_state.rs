use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::core::persistence::report::report_api_repository_trait::ReportApiRepository;
use crate::core::persistence::report::report_repository::ReportRepository;
use crate::core::state::report::report_store::ReportStore;
use crate::domain::report::service::daily_report_service::DailyReportService;
use crate::domain::report::service::report_statistics_service::ReportStatisticsService;

#[derive(Clone)]
pub struct AppState {
    pub report_service: Arc<DailyReportService>,
    pub statistics_service: Arc<ReportStatisticsService>,
    /// Expected bearer token for mutating routes; `None` disables them.
    pub api_token: Option<Arc<str>>,
}

impl AppState {
    pub fn new(store: Arc<ReportStore>, api_token: Option<&str>) -> Self {
        Self {
            report_service: Arc::new(DailyReportService::new(store.clone())),
            statistics_service: Arc::new(ReportStatisticsService::new(store)),
            api_token: api_token.map(Arc::from),
        }
    }
}

/// Load the report series from the configured document and wire the services.
pub fn build_app_state(config: &AppConfig) -> Result<AppState> {
    let repo: Arc<dyn ReportApiRepository> = Arc::new(ReportRepository::new(&config.data_path));
    let store = ReportStore::load(repo)?.shared();
    info!("Serving reports from {}", config.data_path.display());

    if config.api_token.is_none() {
        warn!("No API token configured, report writes are disabled");
    }

    Ok(AppState::new(store, config.api_token.as_deref()))
}
