//! Source retrieval for tabular resources.

use std::fs;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use tracing::debug;

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Fetch a tabular resource as text.
///
/// A source beginning with `http://` or `https://` is fetched with a single
/// blocking GET; anything else is treated as a filesystem path. A failed
/// fetch is terminal for the caller: no retry, no caching.
pub fn fetch_source(source: &str) -> Result<String> {
    if !is_url(source) {
        return fs::read_to_string(source).with_context(|| format!("read {source}"));
    }

    let client = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("build http client")?;

    debug!(url = %source, "fetching source");
    let response = client
        .get(source)
        .header(
            USER_AGENT,
            concat!("facloc-prep/", env!("CARGO_PKG_VERSION")),
        )
        .send()
        .with_context(|| format!("fetch {source}"))?;

    if !response.status().is_success() {
        bail!("fetch {source}: unexpected status {}", response.status());
    }

    response
        .text()
        .with_context(|| format!("read body of {source}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_detection() {
        assert!(is_url("https://data.cityofchicago.org/x.csv"));
        assert!(is_url("http://localhost/x.csv"));
        assert!(!is_url("data/schools.csv"));
        assert!(!is_url("/tmp/libraries.csv"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = fetch_source("/nonexistent/facloc/source.csv");
        assert!(result.is_err());
    }
}
