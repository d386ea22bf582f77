use std::sync::Arc;
use futures::future::join_all;
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info, warn};
use crate::error::{FetchCause, FetchError};
use crate::request::{Fetch, FetchOutcome, FetchRequest, RunConfig};
use crate::summary::Summary;

/// How a run dispatches its fetches
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// One fetch at a time, ids in ascending order
    Sequential,
    /// One task per id, all started at once
    Concurrent,
}

impl Mode {
    /// Maps a command line flag to a mode; unknown flags map to `None`
    pub fn from_arg(arg: &str) -> Option<Mode> {
        match arg {
            "--without-concurrent" => Some(Mode::Sequential),
            "--with-concurrent" => Some(Mode::Concurrent),
            _ => None,
        }
    }

    pub fn banner(&self) -> &'static str {
        match self {
            Mode::Sequential => "start API calls without concurrent, please wait...",
            Mode::Concurrent => "start API calls with concurrent, please wait...",
        }
    }
}

pub async fn run<F>(mode: Mode, fetcher: Arc<F>, config: &RunConfig) -> Summary
where
    F: Fetch + ?Sized + 'static,
{
    info!(?mode, limit = config.limit, "run started");
    let summary = match mode {
        Mode::Sequential => run_sequential(&*fetcher, config).await,
        Mode::Concurrent => run_concurrent(fetcher, config).await,
    };
    if !summary.is_complete(config.limit) {
        warn!(total = summary.total(), limit = config.limit, "summary does not cover every id");
    }
    info!(
        success = summary.success,
        fail = summary.fail,
        duration = ?summary.total_duration,
        "run finished"
    );
    summary
}

pub async fn run_sequential<F>(fetcher: &F, config: &RunConfig) -> Summary
where
    F: Fetch + ?Sized,
{
    let start = Instant::now();
    let mut summary = Summary::new();

    for request in FetchRequest::range(config.limit) {
        let id = request.id();
        let outcome = FetchOutcome::from_result(id, fetcher.fetch(id).await);
        if let FetchOutcome::Failure { error, .. } = &outcome {
            debug!(id, %error, "fetch failed");
        }
        summary.record(&outcome);
    }

    summary.finalize(start);
    summary
}

/// Fans out one task per id and merges their outcomes on a single channel.
///
/// The channel closes only after the completion watcher has seen every fetch
/// task finish and dropped the last sender, so `recv` returning `None` means
/// every outcome has already been recorded.
pub async fn run_concurrent<F>(fetcher: Arc<F>, config: &RunConfig) -> Summary
where
    F: Fetch + ?Sized + 'static,
{
    let start = Instant::now();
    let (tx, mut rx) = mpsc::unbounded_channel::<FetchOutcome>();
    let limiter = config.max_in_flight.map(|n| Arc::new(Semaphore::new(n.get())));

    let handles: Vec<(u32, JoinHandle<()>)> = FetchRequest::range(config.limit)
        .map(|request| {
            let id = request.id();
            let fetcher = Arc::clone(&fetcher);
            let limiter = limiter.clone();
            let tx = tx.clone();
            let handle = tokio::spawn(async move {
                // never closed, so acquire cannot fail
                let _permit = match limiter {
                    Some(limiter) => limiter.acquire_owned().await.ok(),
                    None => None,
                };
                let outcome = FetchOutcome::from_result(id, fetcher.fetch(id).await);
                // receiver lives until the channel closes
                let _ = tx.send(outcome);
            });
            (id, handle)
        })
        .collect();

    tokio::spawn(watch_completion(handles, tx));

    let mut summary = Summary::new();
    while let Some(outcome) = rx.recv().await {
        if let FetchOutcome::Failure { id, error } = &outcome {
            debug!(id, %error, "fetch failed");
            println!("{}", error);
        }
        summary.record(&outcome);
    }

    summary.finalize(start);
    summary
}

/// Counting barrier over the fetch tasks. Owns the last sender.
async fn watch_completion(handles: Vec<(u32, JoinHandle<()>)>, tx: UnboundedSender<FetchOutcome>) {
    let (ids, handles): (Vec<u32>, Vec<JoinHandle<()>>) = handles.into_iter().unzip();
    let results = join_all(handles).await;

    for (id, result) in ids.into_iter().zip(results) {
        if let Err(e) = result {
            warn!(id, error = %e, "fetch task did not complete");
            let error = FetchError::new(id, FetchCause::TaskFailed(e.to_string()));
            let _ = tx.send(FetchOutcome::Failure { id, error });
        }
    }
    debug!("all fetch tasks finished");
}
