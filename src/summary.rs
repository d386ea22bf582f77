//! Aggregate result of one run.
//!
//! A [`Summary`] has exactly one owner: the sequential loop, or the merge
//! loop of the concurrent runner. Producers never touch it.

use std::collections::HashSet;
use std::fmt;
use std::time::{Duration, SystemTime};
use tokio::time::Instant;
use crate::request::FetchOutcome;
use crate::utils::{format_datetime, format_ids};

#[derive(Clone, Debug)]
pub struct Summary {
    pub success: usize,
    pub fail: usize,
    /// Ids in the order their outcomes were recorded
    pub success_ids: Vec<u32>,
    pub fail_ids: Vec<u32>,
    pub total_duration: Duration,
    pub started_at: SystemTime,
    finalized: bool,
}

impl Default for Summary {
    fn default() -> Self {
        Self::new()
    }
}

impl Summary {
    pub fn new() -> Self {
        Self {
            success: 0,
            fail: 0,
            success_ids: Vec::new(),
            fail_ids: Vec::new(),
            total_duration: Duration::ZERO,
            started_at: SystemTime::now(),
            finalized: false,
        }
    }

    pub fn record(&mut self, outcome: &FetchOutcome) {
        debug_assert!(!self.finalized, "outcome recorded after finalize");
        match outcome {
            FetchOutcome::Success { id, .. } => {
                self.success += 1;
                self.success_ids.push(*id);
            }
            FetchOutcome::Failure { id, .. } => {
                self.fail += 1;
                self.fail_ids.push(*id);
            }
        }
    }

    /// Stamps the elapsed time since `start`. Only the first call counts.
    pub fn finalize(&mut self, start: Instant) {
        if self.finalized {
            return;
        }
        self.total_duration = start.elapsed();
        self.finalized = true;
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub fn total(&self) -> usize {
        self.success + self.fail
    }

    /// True when the recorded ids are exactly `{1..=limit}`, each once
    pub fn is_complete(&self, limit: u32) -> bool {
        if self.total() != limit as usize {
            return false;
        }
        let mut seen = HashSet::with_capacity(self.total());
        self.success_ids
            .iter()
            .chain(self.fail_ids.iter())
            .all(|id| (1..=limit).contains(id) && seen.insert(*id))
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "API calls complete")?;
        writeln!(f, "Started at: {}", format_datetime(self.started_at))?;
        writeln!(f, "Total success: {}", self.success)?;
        writeln!(f, "Total fail: {}", self.fail)?;
        writeln!(f, "Total duration: {:?}", self.total_duration)?;
        writeln!(f, "Success IDs:")?;
        writeln!(f, "{}", format_ids(&self.success_ids))?;
        writeln!(f, "Fail IDs:")?;
        write!(f, "{}", format_ids(&self.fail_ids))
    }
}
