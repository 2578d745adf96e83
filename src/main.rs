use anyhow::Result;
use dictrank::{
    config::{BATCH_TIMEOUT, BRICK_DIR, FIGSHARE_DOI},
    fetch, logging, pipeline, DATASETS,
};
use std::path::Path;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    logging::init();

    let rule = "=".repeat(60);
    println!("{}", rule);
    println!("Downloading DICTrank FDA Cardiotoxicity datasets from Figshare...");
    println!("DOI: {}", FIGSHARE_DOI);
    println!("{}", rule);

    // ─── 2) fetch + convert every dataset, one at a time ─────────────
    let client = fetch::client(Some(BATCH_TIMEOUT))?;
    let brick = Path::new(BRICK_DIR);
    let summary = pipeline::run_batch(&client, DATASETS, brick).await?;

    // ─── 3) report what is on disk ───────────────────────────────────
    println!();
    print!("{}", summary);
    info!(
        total_records = summary.total_records,
        files = summary.files.len(),
        "all done"
    );
    Ok(())
}
