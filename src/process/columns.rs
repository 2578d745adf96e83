// src/process/columns.rs

use anyhow::Result;
use arrow::{
    array::{ArrayRef, StringArray},
    datatypes::{Field, Schema},
    record_batch::RecordBatch,
};
use std::{collections::HashSet, sync::Arc};

/// How a missing value reads once a column is rendered as text.
const MISSING_TEXT: &str = "nan";

/// Strip, lowercase, then map spaces and hyphens to underscores.
pub fn normalize_column_name(raw: &str) -> String {
    raw.trim().to_lowercase().replace(' ', "_").replace('-', "_")
}

/// Rename every field of `batch` with [`normalize_column_name`].
pub fn normalize_columns(batch: &RecordBatch) -> Result<RecordBatch> {
    let fields: Vec<Field> = batch
        .schema()
        .fields()
        .iter()
        .map(|f| f.as_ref().clone().with_name(normalize_column_name(f.name())))
        .collect();
    RecordBatch::try_new(Arc::new(Schema::new(fields)), batch.columns().to_vec())
        .map_err(Into::into)
}

/// Render every Utf8 column as plain text: missing cells and the literal
/// `nan` both become `""`. Other text is kept as-is; [`parse_csv`] has
/// already read markers such as `NaN` or `NA` as missing.
///
/// [`parse_csv`]: super::parse_csv
pub fn coerce_text_columns(batch: &RecordBatch) -> Result<RecordBatch> {
    let mut cols = Vec::with_capacity(batch.num_columns());
    for arr in batch.columns() {
        if let Some(sarr) = arr.as_any().downcast_ref::<StringArray>() {
            let text: StringArray = sarr.iter().map(|v| Some(as_text(v))).collect();
            cols.push(Arc::new(text) as ArrayRef);
            continue;
        }
        cols.push(arr.clone());
    }
    RecordBatch::try_new(batch.schema(), cols).map_err(Into::into)
}

fn as_text(value: Option<&str>) -> &str {
    match value.unwrap_or(MISSING_TEXT) {
        MISSING_TEXT => "",
        s => s,
    }
}

/// Header names as a dataframe reader would assign them: blank headers become
/// `Unnamed: <index>` and repeats get a `.1`, `.2`, ... suffix.
pub fn unique_headers<S: AsRef<str>>(raw: impl IntoIterator<Item = S>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for (idx, header) in raw.into_iter().enumerate() {
        let header = header.as_ref();
        let base = if header.is_empty() {
            format!("Unnamed: {}", idx)
        } else {
            header.to_string()
        };
        let mut name = base.clone();
        let mut n = 1;
        while seen.contains(&name) {
            name = format!("{}.{}", base, n);
            n += 1;
        }
        seen.insert(name.clone());
        out.push(name);
    }
    out
}
