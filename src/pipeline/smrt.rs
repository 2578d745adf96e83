// src/pipeline/smrt.rs

use anyhow::{bail, Context, Result};
use reqwest::Client;
use std::{fs, path::Path};
use tracing::{info, instrument};

use crate::config::{SMRT_PARQUET, SMRT_SHEET, SMRT_XLSX};
use crate::error::ConvertError;
use crate::fetch::download_to_file;
use crate::process::{read_sheet, read_shape, write_parquet, Shape};

/// Download the DICTrank workbook into `download_dir` and convert it into
/// `brick_dir/smrt_dataset.parquet`. Every failure is returned as-is.
pub async fn run_smrt(
    client: &Client,
    url: &str,
    download_dir: &Path,
    brick_dir: &Path,
) -> Result<Shape> {
    for d in [download_dir, brick_dir] {
        fs::create_dir_all(d).with_context(|| format!("creating {:?}", d))?;
    }

    let xlsx = download_dir.join(SMRT_XLSX);
    let bytes = download_to_file(client, url, &xlsx).await?;
    info!(bytes, path = %xlsx.display(), "downloaded workbook");

    let (download_dir, brick_dir) = (download_dir.to_path_buf(), brick_dir.to_path_buf());
    tokio::task::spawn_blocking(move || convert_downloaded(&download_dir, &brick_dir)).await?
}

/// Convert a workbook already sitting at `download_dir/dictrank_dataset.xlsx`
/// into `brick_dir/smrt_dataset.parquet` without touching the network.
pub fn convert_downloaded(download_dir: &Path, brick_dir: &Path) -> Result<Shape> {
    let xlsx = download_dir.join(SMRT_XLSX);
    if !xlsx.is_file() {
        bail!("no downloaded workbook at {:?}", xlsx);
    }
    fs::create_dir_all(brick_dir).with_context(|| format!("creating {:?}", brick_dir))?;
    convert_workbook(&xlsx, SMRT_SHEET, &brick_dir.join(SMRT_PARQUET))
}

/// Convert the single `sheet` of `xlsx` to Parquet at `out`, then read the
/// file back and require the same shape.
///
/// A workbook with any other set of sheets fails before anything is written.
#[instrument(level = "info", skip_all, fields(xlsx = %xlsx.display()))]
pub fn convert_workbook(xlsx: &Path, sheet: &str, out: &Path) -> Result<Shape> {
    let frame = read_sheet(xlsx, sheet)?;
    let converted = Shape::of(&frame);

    if let Some(parent) = out.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating {:?}", parent))?;
    }
    write_parquet(&frame, out)?;

    let read_back = read_shape(out)?;
    if converted != read_back {
        return Err(ConvertError::ShapeMismatch {
            converted,
            read_back,
        }
        .into());
    }

    info!(
        rows = converted.rows,
        columns = converted.columns,
        out = %out.display(),
        "converted sheet"
    );
    Ok(converted)
}
