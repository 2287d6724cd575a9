use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, warn};

use super::daily_report_entity::DailyReportEntity;
use super::report_fs_adapter_trait::ReportFsAdapterTrait;

/// FS adapter for the daily report document.
///
/// The document is a pretty-printed JSON array. A missing file reads as an
/// empty series; rows that do not decode (for example an unparseable `data`)
/// are skipped with a warning. Writes go through `<name>.tmp` and an atomic rename so a
/// crash mid-write never leaves a truncated document behind.
pub struct ReportFsAdapter {
    path: PathBuf,
}

impl ReportFsAdapter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "reports.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ReportFsAdapterTrait for ReportFsAdapter {
    fn read_all(&self) -> Result<Vec<DailyReportEntity>> {
        if !self.path.exists() {
            debug!("Report document {:?} does not exist yet", self.path);
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open report document {:?}", self.path))?;
        let rows: Vec<Value> = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse report document {:?}", self.path))?;

        let mut reports = Vec::with_capacity(rows.len());
        for (index, row) in rows.into_iter().enumerate() {
            match serde_json::from_value::<DailyReportEntity>(row) {
                Ok(report) => reports.push(report),
                Err(e) => warn!("Skipping unreadable report row {} in {:?}: {}", index, self.path, e),
            }
        }

        Ok(reports)
    }

    fn write_all(&self, reports: &[DailyReportEntity]) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).context("Failed to create report directory")?;
        }

        let tmp_path = self.tmp_path();
        let file = File::create(&tmp_path).context("Failed to create temp report file")?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, reports)
            .context("Failed to serialize report document")?;
        writer.flush()?;

        let file = writer
            .into_inner()
            .map_err(|e| e.into_error())
            .context("Failed to flush temp report file")?;
        file.sync_all().context("Failed to sync temp report file")?;

        fs::rename(&tmp_path, &self.path).context("Failed to finalize report document")?;

        #[cfg(unix)]
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            let dir_file = File::open(dir).context("Failed to open report directory")?;
            dir_file.sync_all().context("Failed to sync report directory")?;
        }

        debug!("Wrote {} reports to {:?}", reports.len(), self.path);
        Ok(())
    }
}
