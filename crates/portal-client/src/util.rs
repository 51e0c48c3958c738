use crate::constants::USER_AGENT;

/// HTTP client with compressed responses and the portal client's user agent.
pub fn default_http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .gzip(true)
        .brotli(true)
        .build()
}
