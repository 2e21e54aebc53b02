use serde::{Deserialize, Serialize};

use super::domain::{Candidate, CandidateId, Client, JobDescription};

/// Candidate fields produced by ingestion before the store assigns an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateDraft {
    pub name: String,
    pub email: String,
    pub client: String,
    pub job_description: String,
    pub score: u8,
    pub duplicate: bool,
}

/// Owner of the candidate, job description, and client collections for a session.
///
/// Job descriptions and clients are append-only and keep insertion order. Candidates are
/// never removed; scoring replaces the collection wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateStore {
    candidates: Vec<Candidate>,
    job_descriptions: Vec<JobDescription>,
    clients: Vec<Client>,
    next_id: u64,
}

impl CandidateStore {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Self::default()
        }
    }

    /// Seed data used by the demo UI.
    pub fn demo() -> Self {
        let mut store = Self::new();
        for title in [
            "Senior Angular Developer",
            "FastAPI Engineer",
            "Vector DB Specialist",
            "Azure ML Engineer",
        ] {
            store.add_job_description(title);
        }
        for name in [
            "Speridian Internal",
            "Al Noor Holdings",
            "Desert Tech LLC",
            "Emerald Systems",
        ] {
            store.add_client(name);
        }
        store.admit(vec![
            draft(
                "Aisha Khan",
                "aisha.khan@example.com",
                "Al Noor Holdings",
                "Senior Angular Developer",
                87,
                false,
            ),
            draft(
                "Rohan Mehta",
                "rohan.mehta@example.com",
                "Speridian Internal",
                "FastAPI Engineer",
                78,
                true,
            ),
            draft(
                "Fatima Al Suwaidi",
                "fatima.s@example.com",
                "Desert Tech LLC",
                "Vector DB Specialist",
                91,
                false,
            ),
            draft(
                "Neha Sharma",
                "neha.sharma@example.com",
                "Emerald Systems",
                "Azure ML Engineer",
                73,
                false,
            ),
        ]);
        store
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn job_descriptions(&self) -> &[JobDescription] {
        &self.job_descriptions
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn candidate(&self, id: CandidateId) -> Option<&Candidate> {
        self.candidates.iter().find(|candidate| candidate.id == id)
    }

    /// Appends a title unless it is blank or already present. Returns whether it was added.
    pub fn add_job_description(&mut self, title: &str) -> bool {
        let title = title.trim();
        if title.is_empty() || self.job_descriptions.iter().any(|jd| jd.title == title) {
            return false;
        }
        self.job_descriptions.push(JobDescription {
            title: title.to_string(),
        });
        true
    }

    /// Appends a client unless it is blank or already present. Returns whether it was added.
    pub fn add_client(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.clients.iter().any(|client| client.name == name) {
            return false;
        }
        self.clients.push(Client {
            name: name.to_string(),
        });
        true
    }

    /// Assigns fresh identifiers to the drafts and appends them in order.
    pub fn admit(&mut self, drafts: Vec<CandidateDraft>) -> Vec<Candidate> {
        let admitted: Vec<Candidate> = drafts
            .into_iter()
            .map(|draft| {
                let id = self.allocate_id();
                Candidate {
                    id,
                    name: draft.name,
                    email: draft.email,
                    client: draft.client,
                    job_description: draft.job_description,
                    score: draft.score,
                    duplicate: draft.duplicate,
                }
            })
            .collect();
        self.candidates.extend(admitted.iter().cloned());
        admitted
    }

    /// Swaps in a recomputed collection in one step.
    pub fn replace_candidates(&mut self, candidates: Vec<Candidate>) {
        if let Some(max) = candidates.iter().map(|candidate| candidate.id.0).max() {
            self.next_id = self.next_id.max(max + 1);
        }
        self.candidates = candidates;
    }

    fn allocate_id(&mut self) -> CandidateId {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        CandidateId(id)
    }
}

fn draft(
    name: &str,
    email: &str,
    client: &str,
    job_description: &str,
    score: u8,
    duplicate: bool,
) -> CandidateDraft {
    CandidateDraft {
        name: name.to_string(),
        email: email.to_string(),
        client: client.to_string(),
        job_description: job_description.to_string(),
        score,
        duplicate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_store_matches_seed_data() {
        let store = CandidateStore::demo();
        assert_eq!(store.candidates().len(), 4);
        assert_eq!(store.job_descriptions()[0].title, "Senior Angular Developer");
        assert_eq!(store.clients()[0].name, "Speridian Internal");
        assert_eq!(store.candidates()[1].id, CandidateId(2));
        assert!(store.candidates()[1].duplicate);
    }

    #[test]
    fn blank_and_duplicate_entries_are_ignored() {
        let mut store = CandidateStore::demo();
        assert!(!store.add_job_description("   "));
        assert!(!store.add_client(""));
        assert!(!store.add_client("Emerald Systems"));
        assert!(store.add_client("  Gulf Ventures "));
        assert_eq!(store.clients().len(), 5);
        assert_eq!(store.clients()[4].name, "Gulf Ventures");
    }

    #[test]
    fn admitted_candidates_get_fresh_ids() {
        let mut store = CandidateStore::demo();
        let admitted = store.admit(vec![draft(
            "Resume Candidate",
            "upload@demo.com",
            "Speridian Internal",
            "General",
            70,
            false,
        )]);
        assert_eq!(admitted[0].id, CandidateId(5));
        assert_eq!(store.candidate(CandidateId(5)), Some(&admitted[0]));
    }

    #[test]
    fn empty_store_starts_ids_at_one() {
        let mut store = CandidateStore::default();
        let admitted = store.admit(vec![draft("A B", "a@b", "C", "D", 60, false)]);
        assert_eq!(admitted[0].id, CandidateId(1));
    }
}
