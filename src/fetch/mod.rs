//! Loading a device table from a local path or an `http(s)` URL.

mod api_key;
mod basic;
mod client;

pub use api_key::ApiKey;
pub use basic::BasicClient;
pub use client::HttpClient;

use flate2::read::GzDecoder;
use std::io::Read;
use std::time::Duration;
use tracing::debug;

use crate::config::SourceOptions;
use crate::error::{IngestError, Result};

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Downloads `url` with `client`, failing on a non-success status.
pub async fn fetch_bytes<C: HttpClient>(client: &C, url: &str) -> Result<Vec<u8>> {
    let parsed =
        reqwest::Url::parse(url).map_err(|e| IngestError::InvalidUrl(format!("{url}: {e}")))?;
    let req = reqwest::Request::new(reqwest::Method::GET, parsed);

    let resp = client.execute(req).await?.error_for_status()?;
    Ok(resp.bytes().await?.to_vec())
}

pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Reads a source into text.
///
/// URLs are fetched (with a bearer token when `options.api_key` is set),
/// anything else is read from disk. A source ending in `.gz` is
/// decompressed first.
#[tracing::instrument(skip_all, fields(source = %source))]
pub async fn load_source(source: &str, options: &SourceOptions) -> Result<String> {
    let bytes = if is_remote(source) {
        let client = BasicClient::with_timeout(FETCH_TIMEOUT)?;
        match &options.api_key {
            Some(key) => fetch_bytes(&ApiKey::bearer(client, key)?, source).await?,
            None => fetch_bytes(&client, source).await?,
        }
    } else {
        tokio::fs::read(source).await?
    };
    debug!(bytes = bytes.len(), "Source bytes loaded");

    let bytes = if source.ends_with(".gz") {
        gunzip(&bytes)?
    } else {
        bytes
    };

    Ok(String::from_utf8(bytes)?)
}

fn gunzip(bytes: &[u8]) -> Result<Vec<u8>> {
    let mut decoded = Vec::new();
    GzDecoder::new(bytes).read_to_end(&mut decoded)?;
    Ok(decoded)
}
