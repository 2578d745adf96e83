// Save the DICTrank landing page so upstream changes can be spotted by diffing.

use anyhow::Result;
use dictrank::{
    config::{STATUS_FILE, STATUS_URL},
    fetch, logging,
};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    let client = fetch::client(None)?;
    fetch::fetch_status(&client, STATUS_URL, STATUS_FILE).await?;
    Ok(())
}
