// src/fetch/download.rs

use anyhow::{Context, Result};
use futures::StreamExt;
use reqwest::Client;
use std::path::Path;
use tokio::{fs, io::AsyncWriteExt};
use tracing::debug;

use super::parse_url;

/// GET `url` into memory. Any non-success status is an error.
pub async fn fetch_bytes(client: &Client, url: &str) -> Result<Vec<u8>> {
    let url = parse_url(url)?;
    let resp = client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("GET {} failed", url))?
        .error_for_status()
        .with_context(|| format!("Non-success status {}", url))?;
    let bytes = resp
        .bytes()
        .await
        .with_context(|| format!("reading body from {}", url))?;
    debug!(%url, bytes = bytes.len(), "fetched");
    Ok(bytes.to_vec())
}

/// Stream `url` to `dest` chunk by chunk, creating parent directories.
/// Returns the number of bytes written.
pub async fn download_to_file(client: &Client, url: &str, dest: impl AsRef<Path>) -> Result<u64> {
    let dest = dest.as_ref();
    let url = parse_url(url)?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("creating {:?}", parent))?;
    }

    let resp = client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("GET {} failed", url))?
        .error_for_status()
        .with_context(|| format!("Non-success status {}", url))?;

    let mut file = fs::File::create(dest)
        .await
        .with_context(|| format!("creating {:?}", dest))?;
    let mut stream = resp.bytes_stream();
    let mut written = 0u64;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.with_context(|| format!("reading body from {}", url))?;
        file.write_all(&chunk)
            .await
            .with_context(|| format!("writing {:?}", dest))?;
        written += chunk.len() as u64;
    }
    file.flush().await?;

    debug!(%url, dest = %dest.display(), bytes = written, "downloaded");
    Ok(written)
}
