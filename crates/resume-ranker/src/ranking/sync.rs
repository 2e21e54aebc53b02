use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::Candidate;

/// Outbound hook for pushing the visible shortlist to an HRMS.
///
/// Results are surfaced to the caller only; a sync never changes ranking state.
pub trait HrmsSync: Send + Sync {
    fn sync(&self, candidates: &[Candidate]) -> Result<SyncAcknowledgement, SyncError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncAcknowledgement {
    pub synced: usize,
    pub synced_at: DateTime<Utc>,
    pub message: String,
}

impl SyncAcknowledgement {
    pub fn demo(synced: usize) -> Self {
        Self {
            synced,
            synced_at: Utc::now(),
            message: "Synced shortlisted profiles to HRMS. (Demo)".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("hrms transport unavailable: {0}")]
    Transport(String),
    #[error("hrms rejected the batch: {0}")]
    Rejected(String),
}

/// Outcome returned to the display layer. Failures carry a reason instead of an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SyncOutcome {
    Acknowledged(SyncAcknowledgement),
    Failed { reason: String },
}

impl From<Result<SyncAcknowledgement, SyncError>> for SyncOutcome {
    fn from(value: Result<SyncAcknowledgement, SyncError>) -> Self {
        match value {
            Ok(ack) => Self::Acknowledged(ack),
            Err(err) => Self::Failed {
                reason: err.to_string(),
            },
        }
    }
}
