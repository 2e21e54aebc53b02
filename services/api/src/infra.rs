use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use resume_ranker::config::RankingConfig;
use resume_ranker::ranking::{
    Candidate, CandidateGenerator, CandidateId, HrmsSync, RankingService, RankingSession,
    SeededGenerator, SessionEvent, SessionObserver, SyncAcknowledgement, SyncError, Theme,
};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// One batch handed to the demo HRMS hook.
#[derive(Debug, Clone)]
pub(crate) struct SyncedBatch {
    pub(crate) candidates: Vec<CandidateId>,
    pub(crate) at: DateTime<Utc>,
}

/// HRMS stand-in that records batches in memory and always acknowledges.
#[derive(Default, Clone)]
pub(crate) struct InMemoryHrmsSync {
    batches: Arc<Mutex<Vec<SyncedBatch>>>,
}

impl HrmsSync for InMemoryHrmsSync {
    fn sync(&self, candidates: &[Candidate]) -> Result<SyncAcknowledgement, SyncError> {
        let ack = SyncAcknowledgement::demo(candidates.len());
        let mut guard = self.batches.lock().unwrap_or_else(PoisonError::into_inner);
        guard.push(SyncedBatch {
            candidates: candidates.iter().map(|candidate| candidate.id).collect(),
            at: ack.synced_at,
        });
        Ok(ack)
    }
}

impl InMemoryHrmsSync {
    pub(crate) fn batches(&self) -> Vec<SyncedBatch> {
        self.batches
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Forwards session events to the tracing pipeline.
pub(crate) struct TracingObserver;

impl SessionObserver for TracingObserver {
    fn notify(&self, event: &SessionEvent) {
        debug!(?event, "session updated");
    }
}

pub(crate) fn log_theme(theme: Theme) {
    info!(theme = theme.label(), "display theme applied");
}

pub(crate) fn generator(config: &RankingConfig) -> Box<dyn CandidateGenerator> {
    match config.seed {
        Some(seed) => Box::new(SeededGenerator::new(seed)),
        None => Box::new(SeededGenerator::from_entropy()),
    }
}

pub(crate) fn build_service(
    session: RankingSession,
    config: &RankingConfig,
    sync: Arc<InMemoryHrmsSync>,
) -> RankingService<InMemoryHrmsSync> {
    RankingService::new(session, generator(config), sync)
        .with_observer(Arc::new(TracingObserver))
        .with_theme_applier(Arc::new(log_theme))
        .with_shortlist_limit(config.shortlist_limit)
}
