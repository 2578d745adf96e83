// src/config.rs
//! Fixed locations and sources. Nothing here is read from flags or files.

use std::time::Duration;

/// Page watched by the status checker.
pub const STATUS_URL: &str =
    "https://www.fda.gov/science-research/bioinformatics-tools/drug-induced-cardiotoxicity-rank-dictrank-dataset";
pub const STATUS_FILE: &str = "status.txt";

/// Staging directory for raw downloads.
pub const DOWNLOAD_DIR: &str = "download";
/// Output directory for every converted dataset.
pub const BRICK_DIR: &str = "brick";

pub const SMRT_URL: &str = "https://www.fda.gov/media/178811/download?attachment";
pub const SMRT_XLSX: &str = "dictrank_dataset.xlsx";
pub const SMRT_SHEET: &str = "Table S1";
pub const SMRT_PARQUET: &str = "smrt_dataset.parquet";

/// Per-request timeout for the batch pipeline.
pub const BATCH_TIMEOUT: Duration = Duration::from_secs(600);

pub const FIGSHARE_DOI: &str = "10.6084/m9.figshare.24312274";
