use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, trace};
use crate::error::{FetchCause, FetchError, Result};
use crate::request::{Record, RunConfig};

/// Fetches one numbered resource
///
/// Runners only see this trait, so tests can drive them with stubs.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, id: u32) -> std::result::Result<Record, FetchError>;
}

/// Fetches posts over HTTP with one client shared by every request of a run
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: Client,
    config: RunConfig,
}

pub(crate) fn create_client(config: &RunConfig) -> Result<Client> {
    let mut builder = Client::builder()
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));

    if let Some(timeout) = config.request_timeout {
        builder = builder.timeout(timeout);
    }

    Ok(builder.build()?)
}

impl HttpFetcher {
    pub fn new(config: RunConfig) -> Result<Self> {
        let client = create_client(&config)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, id: u32) -> std::result::Result<Record, FetchError> {
        let url = self
            .config
            .post_url(id)
            .map_err(|e| FetchError::new(id, FetchCause::Other(e.to_string())))?;

        trace!(id, %url, "sending request");
        let res = self.client.get(url).send().await.map_err(|e| FetchError::new(id, e))?;
        let status = res.status();
        let body = res.bytes().await.map_err(|e| FetchError::new(id, e))?;

        // status is not inspected, the body decides
        let record: Record = serde_json::from_slice(&body).map_err(|e| FetchError::new(id, e))?;
        debug!(id, %status, bytes = body.len(), "fetched");
        Ok(record)
    }
}
