// src/core/net.rs
// Blocking HTTP GET. One client per run, shared by all shop fetches.

use reqwest::blocking::Client;
use tracing::debug;

use crate::config::options::FetchOptions;
use crate::error::FetchError;

/// Anything that can turn a URL into page markup.
///
/// Errors are returned, never logged here; the scrape layer decides that a
/// failed source simply contributes nothing.
pub trait Fetch: Send + Sync {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Fails if the client can't be built, including an unusable user agent.
    pub fn new(opts: &FetchOptions) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(opts.timeout)
            .user_agent(opts.user_agent.as_str())
            .build()
            .map_err(|source| FetchError::Transport { url: s!(), source })?;

        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let transport = |source| FetchError::Transport { url: s!(url), source };

        let resp = self.client.get(url).send().map_err(transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { status: status.as_u16(), url: s!(url) });
        }

        let body = resp.text().map_err(transport)?;
        debug!(url, status = status.as_u16(), bytes = body.len(), "fetched");
        Ok(body)
    }
}
