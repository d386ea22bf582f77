// request/mod.rs

pub mod request_item;
pub mod executor;
pub mod concurrency;
pub mod config;

// 重新导出，方便上层直接使用
pub use request_item::{FetchOutcome, FetchRequest, Record};
pub use executor::{Fetch, HttpFetcher};
pub use concurrency::{run, run_concurrent, run_sequential, Mode};
pub use config::RunConfig;
