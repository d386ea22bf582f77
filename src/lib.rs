//! Fetches a fixed range of numbered posts from an HTTP API, either one at a
//! time or all at once, and reports how many succeeded, which ids failed and
//! how long the whole run took.
//!
//! ```no_run
//! use std::sync::Arc;
//! use rusty_fetch::{run, HttpFetcher, Mode, RunConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RunConfig::default();
//! let fetcher = Arc::new(HttpFetcher::new(config.clone())?);
//! let summary = run(Mode::Concurrent, fetcher, &config).await;
//! println!("{}", summary);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod request;
pub mod summary;
pub mod utils;

pub use error::{Error, FetchCause, FetchError, Result};
pub use request::{
    run, run_concurrent, run_sequential, Fetch, FetchOutcome, FetchRequest, HttpFetcher, Mode,
    Record, RunConfig,
};
pub use summary::Summary;
