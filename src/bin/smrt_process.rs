// Convert an already downloaded DICTrank workbook to Parquet. No network access.

use anyhow::Result;
use dictrank::{
    config::{BRICK_DIR, DOWNLOAD_DIR},
    logging, pipeline,
};
use std::path::Path;
use tracing::info;

fn main() -> Result<()> {
    logging::init();
    let shape = pipeline::convert_downloaded(Path::new(DOWNLOAD_DIR), Path::new(BRICK_DIR))?;
    info!(rows = shape.rows, columns = shape.columns, "smrt dataset ready");
    Ok(())
}
