use serde::{Deserialize, Serialize};

/// A single indexed employee record.
///
/// Every field except the record number is optional: source CSV rows may
/// leave cells blank, and the stored document simply omits the matching
/// properties instead of indexing sentinels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub no: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_expenditure: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub healthy_lifestyle: Option<String>,
}
