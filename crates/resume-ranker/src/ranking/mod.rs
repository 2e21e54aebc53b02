//! Candidate ranking: scoring, filtering, anonymized projection, and the session service
//! that serialises mutations for the HTTP and CLI front ends.

pub mod analytics;
pub mod anonymize;
pub mod domain;
pub mod export;
pub mod filter;
pub mod ingestion;
pub mod router;
pub mod scoring;
pub mod service;
pub mod session;
pub mod store;
pub mod sync;

#[cfg(test)]
mod tests;

pub use analytics::{any_duplicate, average_score, AnalyticsSnapshot};
pub use anonymize::{project, DisplayRecord, MASKED_EMAIL};
pub use domain::{
    AcknowledgedAction, Acknowledgement, Candidate, CandidateId, Client, FilterCriteria,
    JobDescription, ScoringWeights, Theme,
};
pub use export::ExportError;
pub use filter::visible;
pub use ingestion::{CandidateGenerator, SeededGenerator, UploadedFile};
pub use router::ranking_router;
pub use scoring::{recompute, ScoringEngine};
pub use service::{RankingService, SessionObserver, ThemeApplier};
pub use session::{RankingSession, SessionEvent};
pub use store::{CandidateDraft, CandidateStore};
pub use sync::{HrmsSync, SyncAcknowledgement, SyncError, SyncOutcome};
