use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::ranking::domain::{Candidate, CandidateId, Theme};
use crate::ranking::ingestion::CandidateGenerator;
use crate::ranking::service::{RankingService, SessionObserver};
use crate::ranking::session::{RankingSession, SessionEvent};
use crate::ranking::sync::{HrmsSync, SyncAcknowledgement, SyncError};

/// Generator replaying fixed picks, scores, and duplicate flags.
#[derive(Default)]
pub(super) struct ScriptedGenerator {
    picks: VecDeque<usize>,
    scores: VecDeque<u8>,
    duplicates: VecDeque<bool>,
}

impl ScriptedGenerator {
    pub(super) fn new(picks: &[usize], scores: &[u8], duplicates: &[bool]) -> Self {
        Self {
            picks: picks.iter().copied().collect(),
            scores: scores.iter().copied().collect(),
            duplicates: duplicates.iter().copied().collect(),
        }
    }
}

impl CandidateGenerator for ScriptedGenerator {
    fn pick(&mut self, _len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0)
    }

    fn score_in(&mut self, low: u8, _high: u8) -> u8 {
        self.scores.pop_front().unwrap_or(low)
    }

    fn chance(&mut self, _probability: f64) -> bool {
        self.duplicates.pop_front().unwrap_or(false)
    }
}

#[derive(Default)]
pub(super) struct MemorySync {
    pub(super) batches: Mutex<Vec<Vec<CandidateId>>>,
}

impl HrmsSync for MemorySync {
    fn sync(&self, candidates: &[Candidate]) -> Result<SyncAcknowledgement, SyncError> {
        self.batches
            .lock()
            .expect("sync mutex poisoned")
            .push(candidates.iter().map(|candidate| candidate.id).collect());
        Ok(SyncAcknowledgement::demo(candidates.len()))
    }
}

pub(super) struct OfflineSync;

impl HrmsSync for OfflineSync {
    fn sync(&self, _candidates: &[Candidate]) -> Result<SyncAcknowledgement, SyncError> {
        Err(SyncError::Transport("connection refused".to_string()))
    }
}

#[derive(Default)]
pub(super) struct RecordingObserver {
    pub(super) events: Mutex<Vec<SessionEvent>>,
}

impl RecordingObserver {
    pub(super) fn events(&self) -> Vec<SessionEvent> {
        self.events.lock().expect("observer mutex poisoned").clone()
    }
}

impl SessionObserver for RecordingObserver {
    fn notify(&self, event: &SessionEvent) {
        self.events
            .lock()
            .expect("observer mutex poisoned")
            .push(event.clone());
    }
}

pub(super) fn build_service(
    generator: ScriptedGenerator,
) -> (
    RankingService<MemorySync>,
    Arc<MemorySync>,
    Arc<RecordingObserver>,
    Arc<Mutex<Vec<Theme>>>,
) {
    let sync = Arc::new(MemorySync::default());
    let observer = Arc::new(RecordingObserver::default());
    let applied = Arc::new(Mutex::new(Vec::new()));
    let sink = applied.clone();
    let service = RankingService::new(RankingSession::demo(), Box::new(generator), sync.clone())
        .with_observer(observer.clone())
        .with_theme_applier(Arc::new(move |theme: Theme| {
            sink.lock().expect("theme mutex poisoned").push(theme);
        }));
    (service, sync, observer, applied)
}

pub(super) fn candidate(id: u64, name: &str, score: u8) -> Candidate {
    Candidate {
        id: CandidateId(id),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        client: "Al Noor Holdings".to_string(),
        job_description: "Senior Angular Developer".to_string(),
        score,
        duplicate: false,
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
