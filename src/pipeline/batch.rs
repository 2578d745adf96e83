// src/pipeline/batch.rs

use anyhow::{Context, Result};
use arrow::record_batch::RecordBatch;
use glob::{glob, Pattern};
use reqwest::Client;
use std::{fmt, fs, path::Path};
use tracing::{error, info, instrument, warn};

use crate::datasets::Dataset;
use crate::error::Skip;
use crate::fetch::fetch_bytes;
use crate::process::{
    coerce_text_columns, gunzip, normalize_columns, parse_csv, read_shape, write_parquet, Shape,
};

/// Totals for one batch run plus every Parquet file found in the output dir afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub total_records: usize,
    pub files: Vec<(String, Shape)>,
}

/// Run every dataset in order. A failed fetch, gunzip or parse only skips that dataset.
pub async fn run_batch(
    client: &Client,
    datasets: &[Dataset<'_>],
    out_dir: &Path,
) -> Result<BatchSummary> {
    fs::create_dir_all(out_dir).with_context(|| format!("creating {:?}", out_dir))?;

    let mut total_records = 0;
    for dataset in datasets {
        total_records += download_and_convert(client, dataset, out_dir).await?;
    }

    let files = scan_outputs(out_dir)?;
    Ok(BatchSummary {
        total_records,
        files,
    })
}

/// Fetch one dataset and write `dictrank_<name>.parquet`. Returns the number
/// of records written, or 0 when the dataset was skipped.
///
/// Only the write itself can fail this call.
#[instrument(level = "info", skip_all, fields(dataset = %dataset.name))]
pub async fn download_and_convert(
    client: &Client,
    dataset: &Dataset<'_>,
    out_dir: &Path,
) -> Result<usize> {
    info!(url = %dataset.url, "downloading {}", dataset.description);

    let frame = match load_frame(client, dataset).await {
        Ok(frame) => frame,
        Err(skip @ Skip::Empty) => {
            warn!("{}", skip);
            return Ok(0);
        }
        Err(skip) => {
            error!("{}", skip);
            return Ok(0);
        }
    };

    let frame = coerce_text_columns(&normalize_columns(&frame)?)?;
    let out_path = out_dir.join(dataset.output_file_name());
    write_parquet(&frame, &out_path)?;

    let shape = Shape::of(&frame);
    info!(
        records = shape.rows,
        columns = shape.columns,
        file = %out_path.display(),
        "saved"
    );
    Ok(shape.rows)
}

async fn load_frame(client: &Client, dataset: &Dataset<'_>) -> Result<RecordBatch, Skip> {
    let mut content = fetch_bytes(client, dataset.url)
        .await
        .map_err(Skip::Download)?;

    if dataset.is_gzipped() {
        content = gunzip(&content).map_err(Skip::Decompress)?;
    }

    let frame = parse_csv(&content).map_err(Skip::Parse)?;
    if frame.num_rows() == 0 {
        return Err(Skip::Empty);
    }
    Ok(frame)
}

/// Every `*.parquet` directly under `out_dir`, in name order, with its shape.
pub fn scan_outputs(out_dir: &Path) -> Result<Vec<(String, Shape)>> {
    let pattern = format!(
        "{}/*.parquet",
        Pattern::escape(&out_dir.to_string_lossy())
    );

    let mut files = Vec::new();
    for entry in glob(&pattern).with_context(|| format!("bad glob pattern {}", pattern))? {
        let path = entry?;
        let shape = read_shape(&path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        files.push((name, shape));
    }
    Ok(files)
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(60);
        writeln!(f, "{}", rule)?;
        writeln!(f, "Output files:")?;
        writeln!(f, "{}", rule)?;
        for (name, shape) in &self.files {
            writeln!(
                f,
                "  - {}: {} rows, {} columns",
                name,
                thousands(shape.rows),
                shape.columns
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Total: {} records", thousands(self.total_records))
    }
}

fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
