// src/fetch/mod.rs

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub mod download;
pub mod status;

pub use download::{download_to_file, fetch_bytes};
pub use status::fetch_status;

/// Build the HTTP client. `None` keeps reqwest's default (no overall timeout).
pub fn client(timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(t) = timeout {
        builder = builder.timeout(t);
    }
    builder.build().context("building HTTP client")
}

fn parse_url(url: &str) -> Result<Url> {
    Url::parse(url).with_context(|| format!("parsing URL {}", url))
}
