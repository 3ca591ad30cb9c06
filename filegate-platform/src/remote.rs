//! Remote resource fetching
//!
//! Synchronous GET wrappers over a process-wide HTTP client. The client is
//! lazily initialized once and read-only afterwards, so concurrent gateway
//! calls share it without synchronization.

use filegate_core::{FsError, FsResult};
use once_cell::sync::Lazy;
use std::time::Duration;

static HTTP_CLIENT: Lazy<reqwest::blocking::Client> = Lazy::new(|| {
    reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .expect("Failed to build HTTP client")
});

/// Fetch a remote resource as UTF-8 text.
pub fn read_text(url: &str) -> FsResult<String> {
    fetch(url)?
        .text()
        .map_err(|err| FsError::Network(err.to_string()))
}

/// Fetch a remote resource as raw bytes.
pub fn read_binary(url: &str) -> FsResult<Vec<u8>> {
    let bytes = fetch(url)?
        .bytes()
        .map_err(|err| FsError::Network(err.to_string()))?;
    Ok(bytes.to_vec())
}

fn fetch(url: &str) -> FsResult<reqwest::blocking::Response> {
    if url.is_empty() {
        return Err(FsError::InvalidPath("empty URL".into()));
    }

    let response = HTTP_CLIENT
        .get(url)
        .send()
        .map_err(|err| FsError::Network(err.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FsError::Network(format!("{url} returned {status}")));
    }

    Ok(response)
}
