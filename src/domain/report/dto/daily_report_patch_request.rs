use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::{Validate, ValidationError};

/// Partial update for a stored daily report. Absent fields stay unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct DailyReportPatchRequest {
    /// Must name the same calendar day as the addressed record if present.
    #[serde(rename = "data", default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(rename = "totale_casi", default, skip_serializing_if = "Option::is_none")]
    pub total_cases: Option<u64>,

    #[serde(rename = "dimessi_guariti", default, skip_serializing_if = "Option::is_none")]
    pub recovered: Option<u64>,

    #[serde(rename = "deceduti", default, skip_serializing_if = "Option::is_none")]
    pub deceased: Option<u64>,

    #[serde(rename = "nuovi_positivi", default, skip_serializing_if = "Option::is_none")]
    pub new_positives: Option<u64>,

    #[serde(rename = "tamponi", default, skip_serializing_if = "Option::is_none")]
    pub swabs: Option<u64>,

    /// Any other source column.
    #[serde(flatten)]
    #[validate(custom(function = "validate_flat_columns"))]
    pub extra: Map<String, Value>,
}

/// Source records are flat: extra columns hold scalars or null only.
pub fn validate_flat_columns(columns: &Map<String, Value>) -> Result<(), ValidationError> {
    for (key, value) in columns {
        if key.trim().is_empty() {
            return Err(ValidationError::new("empty_column_name"));
        }
        if value.is_object() || value.is_array() {
            let mut err = ValidationError::new("nested_column_value");
            err.message = Some(format!("column '{key}' must hold a scalar value").into());
            return Err(err);
        }
    }
    Ok(())
}
