use serde::Deserialize;

/// Main configuration structure for Text-Sieve
///
/// Every section is optional; missing sections fall back to their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub fetcher: FetcherConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub summary: SummaryConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on (e.g. "0.0.0.0:5000")
    #[serde(rename = "bind-address")]
    pub bind_address: String,

    /// Maximum accepted request body size in bytes
    #[serde(rename = "max-request-bytes")]
    pub max_request_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
            max_request_bytes: 2 * 1024 * 1024,
        }
    }
}

/// Remote document fetching configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// Total request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Connection establishment timeout (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,

    /// Largest document body that will be accepted, in bytes
    #[serde(rename = "max-body-bytes")]
    pub max_body_bytes: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            connect_timeout_secs: 10,
            max_body_bytes: 20 * 1024 * 1024,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name sent in the User-Agent header
    #[serde(rename = "agent-name")]
    pub agent_name: String,

    /// Version sent in the User-Agent header
    #[serde(rename = "agent-version")]
    pub agent_version: String,

    /// URL with information about the service operator
    #[serde(rename = "contact-url")]
    pub contact_url: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            agent_name: "TextSieve".to_string(),
            agent_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: "https://example.com/about".to_string(),
        }
    }
}

/// Summary generation configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Number of sentences selected for `/api/clean` summaries
    #[serde(rename = "sentence-count")]
    pub sentence_count: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self { sentence_count: 3 }
    }
}
