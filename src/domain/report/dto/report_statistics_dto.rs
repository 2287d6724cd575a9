//! Derived statistics returned by the report statistics endpoints.
//!
//! JSON keys use the same Italian vocabulary as the stored records.

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPositivesPointDto {
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "nuovi_positivi")]
    pub new_positives: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewRecoveredPointDto {
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "nuovi_guariti")]
    pub new_recovered: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewDeceasedPointDto {
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "nuovi_deceduti")]
    pub new_deceased: i64,
}

/// 7-report moving average of daily new positives, two decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovingAveragePointDto {
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "media_nuovi_positivi")]
    pub new_positives_average: f64,
}

/// Daily positivity rate in percent, two decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositivityRatePointDto {
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "tasso_positivita")]
    pub positivity_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LethalityRateDto {
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "tasso_letalita")]
    pub lethality_rate: f64,
}

/// Cumulative counters of the most recent report, keyed like the record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CumulativeTotalsDto {
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "totale_casi")]
    pub total_cases: u64,
    #[serde(rename = "dimessi_guariti")]
    pub recovered: u64,
    #[serde(rename = "deceduti")]
    pub deceased: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalCasesDto {
    #[serde(rename = "totale_casi_positivi")]
    pub total_cases: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalRecoveredDto {
    #[serde(rename = "totale_casi_guariti")]
    pub recovered: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalDeceasedDto {
    #[serde(rename = "totale_casi_deceduti")]
    pub deceased: u64,
}
