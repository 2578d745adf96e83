use anyhow::{Context, Result};
use reqwest::Client;
use std::path::Path;
use tokio::fs;
use tracing::info;

use super::parse_url;

/// GET `url` and overwrite `dest` with the body text.
///
/// The status code is not checked: an error page is captured as-is, since the
/// file only exists to be diffed by hand later.
pub async fn fetch_status(client: &Client, url: &str, dest: impl AsRef<Path>) -> Result<usize> {
    let dest = dest.as_ref();
    let url = parse_url(url)?;
    let resp = client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("GET {} failed", url))?;
    let status = resp.status();
    let text = resp
        .text()
        .await
        .with_context(|| format!("reading text from {}", url))?;

    fs::write(dest, &text)
        .await
        .with_context(|| format!("writing {:?}", dest))?;
    info!(%url, %status, bytes = text.len(), dest = %dest.display(), "saved status page");
    Ok(text.len())
}
