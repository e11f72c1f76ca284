//! Image source fetching.
//!
//! The lifecycle manager resolves every image to a source string: either a
//! URL or a data URI. This module abstracts turning that string into raw
//! bytes behind the [`SourceFetcher`] trait and provides [`HttpFetcher`],
//! which resolves `data:` URIs locally and fetches everything else over
//! HTTP(S) with a shared reqwest client.
//!
//! There is deliberately no retry, backoff, or timeout policy here; a
//! failed fetch is reported once via [`FetchError`].

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use thiserror::Error;

/// Fetch-specific error type
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} fetching {url}")]
    Status { url: String, status: u16 },

    #[error("Invalid data URI: {0}")]
    InvalidDataUri(String),
}

/// Result type for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;

/// Asynchronous byte fetch for a resolved image source.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; the manager shares the fetcher
/// across async tasks.
#[async_trait]
pub trait SourceFetcher: Send + Sync {
    /// Fetch the binary content behind `url`.
    ///
    /// `url` may be an HTTP(S) URL or a `data:` URI.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the transport fails, the response status is
    /// not successful, or a data URI payload cannot be decoded.
    async fn fetch(&self, url: &str) -> FetchResult<Vec<u8>>;
}

/// Default fetcher: local `data:` URI resolution plus HTTP(S) via reqwest.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher {
    /// Create a fetcher with its own HTTP client.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create a fetcher reusing an existing HTTP client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SourceFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<Vec<u8>> {
        if is_data_uri(url) {
            return decode_data_uri(url);
        }

        tracing::debug!(url = %url, "Fetching image source");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

/// Check whether a source string is a `data:` URI (case-insensitive).
pub fn is_data_uri(source: &str) -> bool {
    source.len() >= 5 && source[..5].eq_ignore_ascii_case("data:")
}

/// Decode the payload of a `data:` URI.
///
/// Base64 payloads (`;base64` in the metadata) are decoded; other payloads
/// are returned as their raw UTF-8 bytes.
///
/// # Errors
///
/// Returns [`FetchError::InvalidDataUri`] if the URI has no comma separator
/// or the base64 payload is malformed.
pub fn decode_data_uri(uri: &str) -> FetchResult<Vec<u8>> {
    let body = &uri[5..];
    let (meta, payload) = body
        .split_once(',')
        .ok_or_else(|| FetchError::InvalidDataUri("missing ',' separator".to_string()))?;

    if meta
        .split(';')
        .any(|part| part.eq_ignore_ascii_case("base64"))
    {
        BASE64
            .decode(payload)
            .map_err(|e| FetchError::InvalidDataUri(e.to_string()))
    } else {
        Ok(payload.as_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_data_uri() {
        assert!(is_data_uri("data:image/svg+xml;base64,PHN2Zy8+"));
        assert!(is_data_uri("DATA:image/png;base64,AAAA"));
        assert!(!is_data_uri("https://example.com/icon.svg"));
        assert!(!is_data_uri("<svg/>"));
    }

    #[test]
    fn test_decode_base64_data_uri() {
        let uri = format!("data:image/svg+xml;base64,{}", BASE64.encode("<svg/>"));
        assert_eq!(decode_data_uri(&uri).unwrap(), b"<svg/>");
    }

    #[test]
    fn test_decode_plain_data_uri() {
        let uri = "data:image/svg+xml,<svg/>";
        assert_eq!(decode_data_uri(uri).unwrap(), b"<svg/>");
    }

    #[test]
    fn test_decode_data_uri_without_separator() {
        assert!(matches!(
            decode_data_uri("data:image/svg+xml"),
            Err(FetchError::InvalidDataUri(_))
        ));
    }

    #[test]
    fn test_decode_data_uri_bad_base64() {
        assert!(matches!(
            decode_data_uri("data:image/svg+xml;base64,@@not-base64@@"),
            Err(FetchError::InvalidDataUri(_))
        ));
    }

    #[tokio::test]
    async fn test_http_fetcher_resolves_data_uri_locally() {
        let fetcher = HttpFetcher::new();
        let uri = format!("data:image/svg+xml;base64,{}", BASE64.encode("<svg/>"));
        assert_eq!(fetcher.fetch(&uri).await.unwrap(), b"<svg/>");
    }
}
