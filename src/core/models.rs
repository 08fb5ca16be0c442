use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::normalize::normalize;

/// One municipality as offered to location inputs.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MunicipalityRecord {
    pub name: String,
    pub province_code: String,
    pub province_name: String,
    pub code: String,
    pub label: String,
    pub normalized_label: String,
}

impl MunicipalityRecord {
    /// Composes the label and its comparison key from already-cleaned parts.
    pub fn new(
        name: impl Into<String>,
        province_code: impl Into<String>,
        province_name: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let province_name = province_name.into();
        let label = format!("{} ({})", name, province_name);
        let normalized_label = normalize(&label);

        Self {
            name,
            province_code: province_code.into(),
            province_name,
            code: code.into(),
            label,
            normalized_label,
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct Province {
    pub code: &'static str,
    pub name: &'static str,
}

/// Tabular dataset as exported by open-data portals: column metadata plus
/// positional rows.
#[derive(Debug, Deserialize)]
pub struct DatasetBlob {
    pub meta: DatasetMeta,
    #[serde(default)]
    pub data: Vec<Vec<Value>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DatasetMeta {
    #[serde(default)]
    pub view: Option<DatasetView>,
    #[serde(default)]
    pub columns: Vec<ColumnMeta>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DatasetView {
    #[serde(default)]
    pub columns: Vec<ColumnMeta>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnMeta {
    #[serde(default)]
    pub field_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl DatasetMeta {
    /// Columns from `meta.view.columns`, falling back to `meta.columns`.
    pub fn columns(&self) -> &[ColumnMeta] {
        match &self.view {
            Some(view) if !view.columns.is_empty() => &view.columns,
            _ => &self.columns,
        }
    }
}

impl ColumnMeta {
    pub fn key(&self) -> Option<&str> {
        self.field_name.as_deref().or(self.name.as_deref())
    }
}
