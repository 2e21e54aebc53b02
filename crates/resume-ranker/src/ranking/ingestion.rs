//! Simulated resume ingestion.
//!
//! No file is read. Uploads only contribute their names, and every other field comes from a
//! [`CandidateGenerator`] so tests can script exact outcomes.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::store::{CandidateDraft, CandidateStore};

pub const FALLBACK_CLIENT: &str = "Speridian Internal";
pub const FALLBACK_JOB_DESCRIPTION: &str = "General";
pub const SINGLE_UPLOAD_EMAIL: &str = "upload@demo.com";

const SINGLE_SCORE_RANGE: (u8, u8) = (60, 95);
const SINGLE_DUPLICATE_PROBABILITY: f64 = 0.25;
const BULK_SCORE_RANGE: (u8, u8) = (55, 95);
const BULK_DUPLICATE_PROBABILITY: f64 = 0.20;

/// Descriptor for an uploaded resume file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub name: String,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Source of the pseudo-random choices made while synthesising candidates.
pub trait CandidateGenerator: Send {
    /// Index into a non-empty collection of length `len`.
    fn pick(&mut self, len: usize) -> usize;
    /// Integer in the inclusive range `[low, high]`.
    fn score_in(&mut self, low: u8, high: u8) -> u8;
    fn chance(&mut self, probability: f64) -> bool;
}

/// Deterministic generator backed by ChaCha8.
#[derive(Debug, Clone)]
pub struct SeededGenerator {
    rng: ChaCha8Rng,
}

impl SeededGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl CandidateGenerator for SeededGenerator {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len.max(1))
    }

    fn score_in(&mut self, low: u8, high: u8) -> u8 {
        self.rng.gen_range(low..=high.max(low))
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability.clamp(0.0, 1.0))
    }
}

/// Builds the draft for a single upload. A missing file yields nothing.
pub fn single_upload(
    file: Option<&UploadedFile>,
    store: &CandidateStore,
    generator: &mut dyn CandidateGenerator,
) -> Option<CandidateDraft> {
    let file = file?;
    let (client, job_description) = assignment(store, generator);
    let score = generator.score_in(SINGLE_SCORE_RANGE.0, SINGLE_SCORE_RANGE.1);
    let duplicate = generator.chance(SINGLE_DUPLICATE_PROBABILITY);

    Some(CandidateDraft {
        name: format!("{} Candidate", strip_extension(&file.name)),
        email: SINGLE_UPLOAD_EMAIL.to_string(),
        client,
        job_description,
        score,
        duplicate,
    })
}

/// Builds one draft per file, named by ordinal position starting at 1.
pub fn bulk_upload(
    files: &[UploadedFile],
    store: &CandidateStore,
    generator: &mut dyn CandidateGenerator,
) -> Vec<CandidateDraft> {
    (1..=files.len())
        .map(|ordinal| {
            let (client, job_description) = assignment(store, generator);
            let score = generator.score_in(BULK_SCORE_RANGE.0, BULK_SCORE_RANGE.1);
            let duplicate = generator.chance(BULK_DUPLICATE_PROBABILITY);
            CandidateDraft {
                name: format!("Bulk {ordinal} Candidate"),
                email: format!("bulk{ordinal}@demo.com"),
                client,
                job_description,
                score,
                duplicate,
            }
        })
        .collect()
}

fn assignment(store: &CandidateStore, generator: &mut dyn CandidateGenerator) -> (String, String) {
    let client = match store.clients() {
        [] => FALLBACK_CLIENT.to_string(),
        clients => clients[generator.pick(clients.len()).min(clients.len() - 1)]
            .name
            .clone(),
    };
    let job_description = match store.job_descriptions() {
        [] => FALLBACK_JOB_DESCRIPTION.to_string(),
        jds => jds[generator.pick(jds.len()).min(jds.len() - 1)]
            .title
            .clone(),
    };
    (client, job_description)
}

/// Drops everything from the first `.` that is followed by at least one character.
fn strip_extension(file_name: &str) -> &str {
    match file_name.find('.') {
        Some(index) if index + 1 < file_name.len() => &file_name[..index],
        _ => file_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_extension_cuts_at_first_dot() {
        assert_eq!(strip_extension("resume.pdf"), "resume");
        assert_eq!(strip_extension("jane.doe.docx"), "jane");
        assert_eq!(strip_extension("notes"), "notes");
        assert_eq!(strip_extension("trailing."), "trailing.");
    }

    #[test]
    fn seeded_generator_is_reproducible_and_in_range() {
        let store = CandidateStore::demo();
        let files: Vec<UploadedFile> = (0..20)
            .map(|i| UploadedFile::new(format!("cv-{i}.pdf")))
            .collect();

        let first = bulk_upload(&files, &store, &mut SeededGenerator::new(7));
        let second = bulk_upload(&files, &store, &mut SeededGenerator::new(7));
        assert_eq!(first, second);

        for draft in &first {
            assert!((55..=95).contains(&draft.score));
            assert!(store
                .clients()
                .iter()
                .any(|client| client.name == draft.client));
        }
    }

    #[test]
    fn empty_sets_fall_back_to_defaults() {
        let store = CandidateStore::new();
        let draft = single_upload(
            Some(&UploadedFile::new("cv.pdf")),
            &store,
            &mut SeededGenerator::new(1),
        )
        .expect("draft built");
        assert_eq!(draft.client, FALLBACK_CLIENT);
        assert_eq!(draft.job_description, FALLBACK_JOB_DESCRIPTION);
        assert!((60..=95).contains(&draft.score));
    }

    #[test]
    fn missing_file_builds_nothing() {
        let store = CandidateStore::demo();
        assert!(single_upload(None, &store, &mut SeededGenerator::new(1)).is_none());
        assert!(bulk_upload(&[], &store, &mut SeededGenerator::new(1)).is_empty());
    }
}
