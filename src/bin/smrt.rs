// Download the DICTrank workbook and convert its single sheet to Parquet.

use anyhow::Result;
use dictrank::{
    config::{BRICK_DIR, DOWNLOAD_DIR, SMRT_URL},
    fetch, logging, pipeline,
};
use std::path::Path;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    let client = fetch::client(None)?;
    let shape = pipeline::run_smrt(
        &client,
        SMRT_URL,
        Path::new(DOWNLOAD_DIR),
        Path::new(BRICK_DIR),
    )
    .await?;
    info!(rows = shape.rows, columns = shape.columns, "smrt dataset ready");
    Ok(())
}
