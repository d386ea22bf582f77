use serde::{Deserialize, Serialize};
use crate::error::FetchError;

/// One numbered resource to fetch
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FetchRequest {
    id: u32,
}

impl FetchRequest {
    pub fn new(id: u32) -> Self {
        Self { id }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Requests `1..=limit` in ascending order
    pub fn range(limit: u32) -> impl Iterator<Item = FetchRequest> {
        (1..=limit).map(FetchRequest::new)
    }
}

/// A decoded post
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u32,
    #[serde(rename = "userId")]
    pub user_id: u32,
    pub title: String,
    pub body: String,
}

/// Result of fetching one id; exactly one is produced per id
#[derive(Debug)]
pub enum FetchOutcome {
    Success { id: u32, record: Record },
    Failure { id: u32, error: FetchError },
}

impl FetchOutcome {
    pub fn from_result(id: u32, result: Result<Record, FetchError>) -> Self {
        match result {
            Ok(record) => FetchOutcome::Success { id, record },
            Err(error) => FetchOutcome::Failure { id, error },
        }
    }

    pub fn id(&self) -> u32 {
        match self {
            FetchOutcome::Success { id, .. } | FetchOutcome::Failure { id, .. } => *id,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success { .. })
    }
}
