use serde::{Deserialize, Serialize};

use super::analytics::{self, AnalyticsSnapshot};
use super::anonymize::{project, DisplayRecord};
use super::domain::{Candidate, CandidateId, FilterCriteria, ScoringWeights, Theme};
use super::filter;
use super::ingestion::{self, CandidateGenerator, UploadedFile};
use super::scoring::ScoringEngine;
use super::store::{CandidateDraft, CandidateStore};

/// Everything the display layer needs to render, held as plain data.
///
/// Mutations return the [`SessionEvent`] they produced, or `None` when the input was a
/// no-op. Derived views (`rows`, `analytics`) are recomputed on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingSession {
    pub store: CandidateStore,
    pub weights: ScoringWeights,
    pub filter: FilterCriteria,
    pub anonymize: bool,
    pub theme: Theme,
    pub uploads: u32,
}

/// Change notification published to observers after a mutation commits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    WeightsUpdated { weights: ScoringWeights },
    WeightsApplied { weights: ScoringWeights, rescored: usize },
    FilterChanged { filter: FilterCriteria },
    AnonymizeToggled { anonymize: bool },
    ThemeChanged { theme: Theme },
    JobDescriptionAdded { title: String },
    ClientAdded { name: String },
    CandidatesIngested { ids: Vec<CandidateId> },
}

impl RankingSession {
    pub fn new(store: CandidateStore) -> Self {
        Self {
            store,
            weights: ScoringWeights::default(),
            filter: FilterCriteria::default(),
            anonymize: false,
            theme: Theme::default(),
            uploads: 0,
        }
    }

    pub fn demo() -> Self {
        Self::new(CandidateStore::demo())
    }

    /// Stores pending weights; scores are untouched until [`Self::apply_weights`].
    pub fn set_weights(&mut self, weights: ScoringWeights) -> SessionEvent {
        self.weights = weights.clamped();
        SessionEvent::WeightsUpdated {
            weights: self.weights,
        }
    }

    pub fn apply_weights(&mut self) -> SessionEvent {
        let engine = ScoringEngine::new(self.weights);
        let rescored = engine.recompute(self.store.candidates());
        let count = rescored.len();
        self.store.replace_candidates(rescored);
        SessionEvent::WeightsApplied {
            weights: engine.weights(),
            rescored: count,
        }
    }

    pub fn set_filter(&mut self, filter: FilterCriteria) -> SessionEvent {
        self.filter = filter;
        SessionEvent::FilterChanged {
            filter: self.filter.clone(),
        }
    }

    pub fn toggle_anonymize(&mut self) -> SessionEvent {
        self.anonymize = !self.anonymize;
        SessionEvent::AnonymizeToggled {
            anonymize: self.anonymize,
        }
    }

    pub fn toggle_theme(&mut self) -> SessionEvent {
        self.theme = self.theme.toggle();
        SessionEvent::ThemeChanged { theme: self.theme }
    }

    pub fn add_job_description(&mut self, title: &str) -> Option<SessionEvent> {
        self.store
            .add_job_description(title)
            .then(|| SessionEvent::JobDescriptionAdded {
                title: title.trim().to_string(),
            })
    }

    pub fn add_client(&mut self, name: &str) -> Option<SessionEvent> {
        self.store
            .add_client(name)
            .then(|| SessionEvent::ClientAdded {
                name: name.trim().to_string(),
            })
    }

    pub fn ingest_single(
        &mut self,
        file: Option<&UploadedFile>,
        generator: &mut dyn CandidateGenerator,
    ) -> Option<SessionEvent> {
        let draft = ingestion::single_upload(file, &self.store, generator)?;
        Some(self.admit(vec![draft]))
    }

    pub fn ingest_bulk(
        &mut self,
        files: &[UploadedFile],
        generator: &mut dyn CandidateGenerator,
    ) -> Option<SessionEvent> {
        if files.is_empty() {
            return None;
        }
        let drafts = ingestion::bulk_upload(files, &self.store, generator);
        Some(self.admit(drafts))
    }

    /// Visible candidates in ranking order, before projection.
    pub fn visible(&self) -> Vec<&Candidate> {
        filter::visible(self.store.candidates(), &self.filter, self.anonymize)
    }

    pub fn rows(&self) -> Vec<DisplayRecord> {
        self.visible()
            .into_iter()
            .map(|candidate| project(candidate, self.anonymize))
            .collect()
    }

    pub fn analytics(&self) -> AnalyticsSnapshot {
        analytics::snapshot(self.store.candidates(), self.uploads)
    }

    fn admit(&mut self, drafts: Vec<CandidateDraft>) -> SessionEvent {
        let admitted = self.store.admit(drafts);
        self.uploads = self.uploads.saturating_add(admitted.len() as u32);
        SessionEvent::CandidatesIngested {
            ids: admitted.iter().map(|candidate| candidate.id).collect(),
        }
    }
}

impl Default for RankingSession {
    fn default() -> Self {
        Self::new(CandidateStore::new())
    }
}
