use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::core::persistence::report::report_api_repository_trait::ReportApiRepository;
use crate::domain::report::error::ReportError;

use super::report_series::ReportSeries;

/// Process-wide owner of the report series.
///
/// Readers get an `Arc` snapshot and never block each other. Mutations run
/// under the write lock on a private copy of the series; the copy is written
/// to storage first and only published once the write succeeded, so a failed
/// write leaves memory and disk on the previous version.
pub struct ReportStore {
    repo: Arc<dyn ReportApiRepository>,
    series: RwLock<Arc<ReportSeries>>,
}

impl ReportStore {
    /// Load the full series from storage.
    pub fn load(repo: Arc<dyn ReportApiRepository>) -> Result<Self> {
        let reports = repo.read_all().context("Failed to load report series")?;
        let series = ReportSeries::from_reports(reports);
        info!("Loaded {} daily reports", series.len());

        Ok(Self {
            repo,
            series: RwLock::new(Arc::new(series)),
        })
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Current series snapshot (zero copy).
    pub async fn snapshot(&self) -> Arc<ReportSeries> {
        self.series.read().await.clone()
    }

    /// Apply `f` to a copy of the series, persist it, then publish it.
    pub async fn mutate<T, F>(&self, f: F) -> Result<T, ReportError>
    where
        F: FnOnce(&mut ReportSeries) -> Result<T, ReportError>,
    {
        let mut guard = self.series.write().await;

        let mut next = (**guard).clone();
        let out = f(&mut next)?;

        if let Err(e) = self.repo.write_all(next.reports()) {
            error!("Report series write failed, keeping previous version: {:#}", e);
            return Err(ReportError::Persistence(format!("{:#}", e)));
        }

        *guard = Arc::new(next);
        Ok(out)
    }
}
