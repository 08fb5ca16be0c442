use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::{debug, info};

use crate::core::error::{AppError, AppResult};
use crate::core::models::{ColumnMeta, DatasetBlob, MunicipalityRecord};
use crate::core::provinces::{pad_province_code, province_name};

pub const NAME_ALIASES: &[&str] = &["nombre", "municipio", "nombre_municipio", "name", "municipality"];
pub const PROVINCE_CODE_ALIASES: &[&str] = &["cpro", "codigo_provincia", "cod_prov", "province_code", "provincia"];
pub const MUNICIPALITY_CODE_ALIASES: &[&str] = &["cmun", "codigo_municipio", "cod_mun", "municipality_code", "code"];

// "Palmas, Las" style names, article trailing after a comma.
static TRAILING_ARTICLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.+?)\s*,\s*(el|la|los|las|l')$").expect("article pattern is valid")
});

/// Moves a trailing article to the front: `"Palmas, Las"` becomes
/// `"Las Palmas"`. Anything else comes back trimmed.
pub fn reorder_article(raw: &str) -> String {
    let trimmed = raw.trim();

    match TRAILING_ARTICLE.captures(trimmed) {
        Some(caps) => {
            let base = caps[1].trim();
            format!("{} {}", capitalize_first(&caps[2]), base)
        }
        None => trimmed.to_string(),
    }
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Builds a record from raw cell values: article reordering, code padding and
/// province lookup (unknown codes name themselves).
pub fn build_record(raw_name: &str, raw_province_code: &str, code: &str) -> MunicipalityRecord {
    let name = reorder_article(raw_name);
    let province_code = pad_province_code(raw_province_code);
    let province = province_name(&province_code)
        .map(str::to_string)
        .unwrap_or_else(|| province_code.clone());

    MunicipalityRecord::new(name, province_code, province, code.trim())
}

/// Index of the first column matching any alias, aliases tried in order.
pub fn resolve_column(columns: &[ColumnMeta], aliases: &[&str]) -> Option<usize> {
    aliases.iter().find_map(|alias| {
        columns
            .iter()
            .position(|column| column.key().is_some_and(|key| key.trim().eq_ignore_ascii_case(alias)))
    })
}

fn require_column(columns: &[ColumnMeta], field: &'static str, aliases: &[&str]) -> AppResult<usize> {
    resolve_column(columns, aliases).ok_or_else(|| AppError::MissingColumn {
        field,
        aliases: aliases.join(", "),
    })
}

fn cell_text(row: &[Value], index: Option<usize>) -> String {
    match index.and_then(|i| row.get(i)) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => match n.as_u64() {
            Some(whole) => whole.to_string(),
            None => n.to_string(),
        },
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Parses the dataset text into a deduplicated list of records, keeping the
/// first record seen for each label.
pub fn parse_dataset(text: &str) -> AppResult<Vec<MunicipalityRecord>> {
    let blob: DatasetBlob = serde_json::from_str(text)
        .map_err(|e| AppError::DataUnavailable(format!("invalid dataset JSON: {}", e)))?;

    let columns = blob.meta.columns();
    let name_index = require_column(columns, "name", NAME_ALIASES)?;
    let province_index = require_column(columns, "province code", PROVINCE_CODE_ALIASES)?;
    let code_index = resolve_column(columns, MUNICIPALITY_CODE_ALIASES);

    if code_index.is_none() {
        debug!("Dataset has no municipality code column, codes will be empty");
    }

    let mut seen = HashSet::with_capacity(blob.data.len());
    let mut records = Vec::with_capacity(blob.data.len());
    let mut duplicates = 0usize;

    for (row_number, row) in blob.data.iter().enumerate() {
        let raw_name = cell_text(row, Some(name_index));
        if raw_name.is_empty() {
            debug!(row = row_number, "Skipping row without a municipality name");
            continue;
        }

        let record = build_record(
            &raw_name,
            &cell_text(row, Some(province_index)),
            &cell_text(row, code_index),
        );

        if seen.insert(record.label.clone()) {
            records.push(record);
        } else {
            duplicates += 1;
        }
    }

    info!(
        "Parsed {} municipalities ({} duplicate labels dropped)",
        records.len(),
        duplicates
    );
    Ok(records)
}
