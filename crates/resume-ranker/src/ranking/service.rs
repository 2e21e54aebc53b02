use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use super::analytics::{self, AnalyticsSnapshot};
use super::anonymize::DisplayRecord;
use super::domain::{
    AcknowledgedAction, Acknowledgement, CandidateId, Client, FilterCriteria, JobDescription,
    ScoringWeights, Theme,
};
use super::ingestion::{CandidateGenerator, UploadedFile};
use super::session::{RankingSession, SessionEvent};
use super::sync::{HrmsSync, SyncOutcome};

pub const DEFAULT_SHORTLIST_LIMIT: usize = 10;

/// Receives change notifications after each committed mutation.
pub trait SessionObserver: Send + Sync {
    fn notify(&self, event: &SessionEvent);
}

/// Side-effecting hook invoked when the display theme changes.
pub trait ThemeApplier: Send + Sync {
    fn apply(&self, theme: Theme);
}

impl<F> ThemeApplier for F
where
    F: Fn(Theme) + Send + Sync,
{
    fn apply(&self, theme: Theme) {
        self(theme)
    }
}

struct ServiceState {
    session: RankingSession,
    generator: Box<dyn CandidateGenerator>,
}

/// Service serialising every session mutation behind a single lock.
///
/// Readers always observe a complete collection: scoring, ingestion, and appends swap state
/// while holding the lock, and observers are notified only after it is released.
pub struct RankingService<S> {
    state: Mutex<ServiceState>,
    sync: Arc<S>,
    observers: Vec<Arc<dyn SessionObserver>>,
    theme_applier: Option<Arc<dyn ThemeApplier>>,
    shortlist_limit: usize,
}

impl<S> RankingService<S>
where
    S: HrmsSync + 'static,
{
    pub fn new(
        session: RankingSession,
        generator: Box<dyn CandidateGenerator>,
        sync: Arc<S>,
    ) -> Self {
        Self {
            state: Mutex::new(ServiceState { session, generator }),
            sync,
            observers: Vec::new(),
            theme_applier: None,
            shortlist_limit: DEFAULT_SHORTLIST_LIMIT,
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn SessionObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn with_theme_applier(mut self, applier: Arc<dyn ThemeApplier>) -> Self {
        self.theme_applier = Some(applier);
        self
    }

    pub fn with_shortlist_limit(mut self, limit: usize) -> Self {
        self.shortlist_limit = limit;
        self
    }

    /// Cloned copy of the full session state.
    pub fn snapshot(&self) -> RankingSession {
        self.lock().session.clone()
    }

    pub fn rows(&self) -> Vec<DisplayRecord> {
        self.lock().session.rows()
    }

    pub fn analytics(&self) -> AnalyticsSnapshot {
        self.lock().session.analytics()
    }

    pub fn weights(&self) -> ScoringWeights {
        self.lock().session.weights
    }

    pub fn filter(&self) -> FilterCriteria {
        self.lock().session.filter.clone()
    }

    pub fn job_descriptions(&self) -> Vec<JobDescription> {
        self.lock().session.store.job_descriptions().to_vec()
    }

    pub fn clients(&self) -> Vec<Client> {
        self.lock().session.store.clients().to_vec()
    }

    pub fn set_weights(&self, weights: ScoringWeights) -> ScoringWeights {
        let event = self.lock().session.set_weights(weights);
        debug!(?weights, "pending scoring weights updated");
        self.publish(event);
        self.weights()
    }

    /// Rescores every candidate with the pending weights.
    pub fn apply_weights(&self) -> Vec<DisplayRecord> {
        let (event, rows) = {
            let mut guard = self.lock();
            let event = guard.session.apply_weights();
            (event, guard.session.rows())
        };
        if let SessionEvent::WeightsApplied { weights, rescored } = &event {
            info!(?weights, rescored, "scoring weights applied");
        }
        self.publish(event);
        rows
    }

    pub fn set_filter(&self, filter: FilterCriteria) -> Vec<DisplayRecord> {
        let (event, rows) = {
            let mut guard = self.lock();
            let event = guard.session.set_filter(filter);
            (event, guard.session.rows())
        };
        self.publish(event);
        rows
    }

    pub fn toggle_anonymize(&self) -> bool {
        let (event, anonymize) = {
            let mut guard = self.lock();
            let event = guard.session.toggle_anonymize();
            (event, guard.session.anonymize)
        };
        info!(anonymize, "anonymize mode toggled");
        self.publish(event);
        anonymize
    }

    pub fn toggle_theme(&self) -> Theme {
        let (event, theme) = {
            let mut guard = self.lock();
            let event = guard.session.toggle_theme();
            (event, guard.session.theme)
        };
        if let Some(applier) = &self.theme_applier {
            applier.apply(theme);
        }
        debug!(theme = theme.label(), "theme switched");
        self.publish(event);
        theme
    }

    /// Appends a job description; blank or repeated titles are ignored.
    pub fn add_job_description(&self, title: &str) -> Vec<JobDescription> {
        let (event, titles) = {
            let mut guard = self.lock();
            let event = guard.session.add_job_description(title);
            (event, guard.session.store.job_descriptions().to_vec())
        };
        if let Some(event) = event {
            info!(title = title.trim(), "job description added");
            self.publish(event);
        }
        titles
    }

    /// Appends a client; blank or repeated names are ignored.
    pub fn add_client(&self, name: &str) -> Vec<Client> {
        let (event, clients) = {
            let mut guard = self.lock();
            let event = guard.session.add_client(name);
            (event, guard.session.store.clients().to_vec())
        };
        if let Some(event) = event {
            info!(client = name.trim(), "client added");
            self.publish(event);
        }
        clients
    }

    /// Returns the identifiers of the admitted candidates; empty when no file was supplied.
    pub fn upload_single(&self, file: Option<UploadedFile>) -> Vec<CandidateId> {
        let event = {
            let mut guard = self.lock();
            let ServiceState { session, generator } = &mut *guard;
            session.ingest_single(file.as_ref(), generator.as_mut())
        };
        self.finish_ingest(event)
    }

    pub fn upload_bulk(&self, files: Vec<UploadedFile>) -> Vec<CandidateId> {
        let event = {
            let mut guard = self.lock();
            let ServiceState { session, generator } = &mut *guard;
            session.ingest_bulk(&files, generator.as_mut())
        };
        self.finish_ingest(event)
    }

    pub fn shortlist(&self) -> (Vec<DisplayRecord>, Acknowledgement) {
        let rows = self.rows();
        let shortlisted = analytics::shortlist(&rows, self.shortlist_limit);
        let ack = Acknowledgement {
            action: AcknowledgedAction::Shortlist,
            message: format!(
                "Shortlisted {} candidates to Top {}. (Demo)",
                shortlisted.len(),
                self.shortlist_limit
            ),
        };
        info!(count = shortlisted.len(), "shortlist generated");
        (shortlisted, ack)
    }

    /// Pushes the visible candidates to the HRMS hook. Never alters session state.
    pub fn sync_hrms(&self) -> SyncOutcome {
        let visible: Vec<_> = {
            let guard = self.lock();
            guard.session.visible().into_iter().cloned().collect()
        };
        let outcome = SyncOutcome::from(self.sync.sync(&visible));
        match &outcome {
            SyncOutcome::Acknowledged(ack) => info!(synced = ack.synced, "hrms sync acknowledged"),
            SyncOutcome::Failed { reason } => warn!(%reason, "hrms sync failed"),
        }
        outcome
    }

    pub fn generate_company_format(&self) -> Acknowledgement {
        Acknowledgement {
            action: AcknowledgedAction::CompanyFormat,
            message: "Generated company-format resume. (Demo)".to_string(),
        }
    }

    /// `None` when the id is unknown.
    pub fn view_candidate(&self, id: CandidateId) -> Option<Acknowledgement> {
        let guard = self.lock();
        let candidate = guard.session.store.candidate(id)?;
        Some(Acknowledgement {
            action: AcknowledgedAction::ViewCandidate,
            message: format!("Open parsed view for {}", candidate.name),
        })
    }

    pub fn edit_job_description(&self, title: &str) -> Acknowledgement {
        Acknowledgement {
            action: AcknowledgedAction::EditJobDescription,
            message: format!("Editing '{}' is not available in the demo", title.trim()),
        }
    }

    pub fn edit_client(&self, name: &str) -> Acknowledgement {
        Acknowledgement {
            action: AcknowledgedAction::EditClient,
            message: format!("Editing '{}' is not available in the demo", name.trim()),
        }
    }

    fn finish_ingest(&self, event: Option<SessionEvent>) -> Vec<CandidateId> {
        let Some(event) = event else {
            debug!("upload ignored: no files supplied");
            return Vec::new();
        };
        let ids = match &event {
            SessionEvent::CandidatesIngested { ids } => ids.clone(),
            _ => Vec::new(),
        };
        info!(count = ids.len(), "candidates ingested");
        self.publish(event);
        ids
    }

    fn publish(&self, event: SessionEvent) {
        for observer in &self.observers {
            observer.notify(&event);
        }
    }

    fn lock(&self) -> MutexGuard<'_, ServiceState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
