use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::report::dto::daily_report_patch_request::DailyReportPatchRequest;

use super::report_date_format;

/// One region-day record as stored in the open-data JSON document.
///
/// Only the columns the statistics need are typed; every other column of the
/// source file is carried in `extra` and written back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReportEntity {
    /// Report timestamp. Only the calendar date is significant.
    #[serde(rename = "data", with = "report_date_format")]
    pub date: NaiveDateTime,
    /// Cumulative confirmed cases.
    #[serde(rename = "totale_casi")]
    pub total_cases: u64,
    /// Cumulative recovered and discharged.
    #[serde(rename = "dimessi_guariti")]
    pub recovered: u64,
    /// Cumulative deaths.
    #[serde(rename = "deceduti")]
    pub deceased: u64,
    /// Positives confirmed on this day (daily, not cumulative).
    #[serde(rename = "nuovi_positivi")]
    pub new_positives: u64,
    /// Cumulative swabs performed.
    #[serde(rename = "tamponi")]
    pub swabs: u64,
    /// Remaining columns of the source record.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DailyReportEntity {
    /// Calendar date used as the series key.
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }

    /// Merge a partial update into this record. The date is never changed here.
    pub fn apply_patch(&mut self, patch: DailyReportPatchRequest) {
        if let Some(v) = patch.total_cases {
            self.total_cases = v;
        }
        if let Some(v) = patch.recovered {
            self.recovered = v;
        }
        if let Some(v) = patch.deceased {
            self.deceased = v;
        }
        if let Some(v) = patch.new_positives {
            self.new_positives = v;
        }
        if let Some(v) = patch.swabs {
            self.swabs = v;
        }
        for (key, value) in patch.extra {
            self.extra.insert(key, value);
        }
    }
}
