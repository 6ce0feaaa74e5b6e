//! HTTP fetcher implementation
//!
//! This module handles the single outbound request the service makes:
//! - Building an HTTP client with a descriptive user agent and timeouts
//! - GET requests for remote `.txt` documents
//! - Content-Type and size checks
//! - Error classification

use crate::config::{FetcherConfig, UserAgentConfig};
use crate::{FetchError, FetchResult};
use reqwest::{header::CONTENT_TYPE, redirect::Policy, Client};
use std::time::Duration;

/// Maximum number of redirects followed before giving up
const MAX_REDIRECTS: usize = 10;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `fetcher` - Timeout settings
/// * `user_agent` - User agent identification
///
/// # Example
///
/// ```no_run
/// use text_sieve::config::{FetcherConfig, UserAgentConfig};
/// use text_sieve::fetcher::build_http_client;
///
/// let client = build_http_client(&FetcherConfig::default(), &UserAgentConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    fetcher: &FetcherConfig,
    user_agent: &UserAgentConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(format_user_agent(user_agent))
        .timeout(Duration::from_secs(fetcher.timeout_secs))
        .connect_timeout(Duration::from_secs(fetcher.connect_timeout_secs))
        .redirect(Policy::limited(MAX_REDIRECTS))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Formats the User-Agent header: `Name/Version (+ContactURL)`
pub fn format_user_agent(config: &UserAgentConfig) -> String {
    format!(
        "{}/{} (+{})",
        config.agent_name, config.agent_version, config.contact_url
    )
}

/// Fetches a remote document and returns its body as text
///
/// # Request Flow
///
/// 1. Send a single GET request (no retries)
/// 2. Reject non-2xx statuses
/// 3. Reject bodies whose Content-Type is not textual
/// 4. Read the body, enforcing `max_bytes`
/// 5. Decode using the declared charset (UTF-8 when absent)
///
/// # Error Mapping
///
/// | Condition | Error |
/// |-----------|-------|
/// | Timeout | `Timeout` |
/// | Connection refused / DNS failure | `Unreachable` |
/// | Other transport failure | `Http` |
/// | Non-2xx status | `Status` |
/// | Non-text Content-Type | `NotText` |
/// | Body larger than limit | `TooLarge` |
/// | Undecodable body | `Decode` |
pub async fn fetch_text(client: &Client, url: &str, max_bytes: u64) -> FetchResult<String> {
    tracing::debug!("Fetching {}", url);

    let mut response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());

    if let Some(content_type) = &content_type {
        if !is_text_content_type(content_type) {
            return Err(FetchError::NotText {
                url: url.to_string(),
                content_type: content_type.clone(),
            });
        }
    }

    if response.content_length().is_some_and(|len| len > max_bytes) {
        return Err(FetchError::TooLarge {
            url: url.to_string(),
            limit: max_bytes,
        });
    }

    let mut body = Vec::new();
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| classify_error(url, e))?
    {
        if (body.len() + chunk.len()) as u64 > max_bytes {
            return Err(FetchError::TooLarge {
                url: url.to_string(),
                limit: max_bytes,
            });
        }
        body.extend_from_slice(&chunk);
    }

    tracing::debug!("Fetched {} bytes from {}", body.len(), url);

    decode_body(url, body, content_type.as_deref())
}

/// Returns true for `text/*` and `application/octet-stream` media types
fn is_text_content_type(content_type: &str) -> bool {
    let media_type = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();

    media_type.starts_with("text/") || media_type == "application/octet-stream"
}

/// Extracts the lowercase charset parameter from a Content-Type value
fn charset_of(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        if key.trim().eq_ignore_ascii_case("charset") {
            Some(value.trim().trim_matches('"').to_ascii_lowercase())
        } else {
            None
        }
    })
}

/// Decodes a response body according to its declared charset
fn decode_body(url: &str, body: Vec<u8>, content_type: Option<&str>) -> FetchResult<String> {
    let charset = content_type.and_then(charset_of);

    match charset.as_deref() {
        None | Some("utf-8") | Some("utf8") | Some("us-ascii") => {
            String::from_utf8(body).map_err(|e| FetchError::Decode {
                url: url.to_string(),
                message: e.to_string(),
            })
        }
        // Latin-1 maps each byte directly onto the first 256 code points
        Some("iso-8859-1") | Some("latin1") | Some("latin-1") => {
            Ok(body.into_iter().map(char::from).collect())
        }
        Some(other) => Err(FetchError::Decode {
            url: url.to_string(),
            message: format!("unsupported charset '{}'", other),
        }),
    }
}

/// Maps a transport-level reqwest error onto a `FetchError`
fn classify_error(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else if error.is_connect() {
        FetchError::Unreachable {
            url: url.to_string(),
            message: error.to_string(),
        }
    } else {
        FetchError::Http {
            url: url.to_string(),
            source: error,
        }
    }
}
