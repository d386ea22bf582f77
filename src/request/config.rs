use std::num::NonZeroUsize;
use std::time::Duration;
use url::Url;
use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_LIMIT: u32 = 100;

/// Fixed parameters of one run, shared read-only by the fetcher and runners
#[derive(Clone, Debug)]
pub struct RunConfig {
    base_url: Url,
    /// Ids `1..=limit` are fetched
    pub limit: u32,
    /// Cap on fetches in flight at once (None = one task per id, all at once)
    pub max_in_flight: Option<NonZeroUsize>,
    /// Per-request timeout (None = wait indefinitely)
    pub request_timeout: Option<Duration>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            base_url: normalize(Url::parse(DEFAULT_BASE_URL).expect("default base url is valid")),
            limit: DEFAULT_LIMIT,
            max_in_flight: None,
            request_timeout: None,
        }
    }
}

impl RunConfig {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self { base_url: parse_base_url(base_url)?, ..Self::default() })
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_max_in_flight(mut self, max_in_flight: usize) -> Self {
        self.max_in_flight = NonZeroUsize::new(max_in_flight);
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/posts/{id}`
    pub fn post_url(&self, id: u32) -> Result<Url> {
        Ok(self.base_url.join(&format!("posts/{}", id))?)
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let parsed = Url::parse(raw)?;
    if parsed.cannot_be_a_base() {
        return Err(Error::CannotBeABase(raw.to_string()));
    }
    Ok(normalize(parsed))
}

// Url::join replaces the last segment unless the path ends with '/'.
fn normalize(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
