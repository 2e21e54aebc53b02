//! End-to-end scenarios driven through the public session and service facade.

use std::sync::Arc;

use resume_ranker::ranking::{
    average_score, CandidateId, FilterCriteria, HrmsSync, RankingService, RankingSession,
    ScoringWeights, SeededGenerator, SyncAcknowledgement, SyncError, UploadedFile,
};
use resume_ranker::ranking::{export, Candidate};

struct AckSync;

impl HrmsSync for AckSync {
    fn sync(&self, candidates: &[Candidate]) -> Result<SyncAcknowledgement, SyncError> {
        Ok(SyncAcknowledgement::demo(candidates.len()))
    }
}

fn seeded_service(seed: u64) -> RankingService<AckSync> {
    RankingService::new(
        RankingSession::demo(),
        Box::new(SeededGenerator::new(seed)),
        Arc::new(AckSync),
    )
}

#[test]
fn repeated_apply_compounds_scores() {
    let mut session = RankingSession::demo();
    session.set_weights(ScoringWeights::new(40, 30, 15, 15));

    session.apply_weights();
    let aisha = session.store.candidate(CandidateId(1)).expect("aisha present");
    assert_eq!(aisha.score, 64);

    session.apply_weights();
    let aisha = session.store.candidate(CandidateId(1)).expect("aisha present");
    assert_eq!(aisha.score, 47);

    assert!(session
        .store
        .candidates()
        .iter()
        .all(|candidate| (40..=99).contains(&candidate.score)));
}

#[test]
fn seeded_ingestion_is_reproducible() {
    let files: Vec<UploadedFile> = (1..=5)
        .map(|i| UploadedFile::new(format!("resume-{i}.pdf")))
        .collect();

    let first = seeded_service(2024);
    let second = seeded_service(2024);
    first.upload_bulk(files.clone());
    second.upload_bulk(files);

    assert_eq!(first.snapshot(), second.snapshot());
    let session = first.snapshot();
    assert_eq!(session.uploads, 5);
    assert_eq!(session.store.candidates().len(), 9);
    for candidate in &session.store.candidates()[4..] {
        assert!((55..=95).contains(&candidate.score));
        assert!(candidate.name.starts_with("Bulk "));
    }
}

#[test]
fn analytics_follow_the_store() {
    let service = seeded_service(9);
    let before = service.analytics();
    assert_eq!(before.average_score, 82);
    assert!(before.any_duplicate);

    service.upload_single(Some(UploadedFile::new("khalid.docx")));
    let session = service.snapshot();
    assert_eq!(
        service.analytics().average_score,
        average_score(session.store.candidates())
    );
}

#[test]
fn filtered_anonymized_export_round_trips_through_csv() {
    let mut session = RankingSession::demo();
    session.toggle_anonymize();
    session.set_filter(FilterCriteria {
        query: "engineer".to_string(),
        ..FilterCriteria::default()
    });

    let rows = session.rows();
    assert_eq!(rows.len(), 2);

    let mut buffer = Vec::new();
    export::write_csv(&mut buffer, &rows).expect("csv written");
    let mut reader = csv::Reader::from_reader(buffer.as_slice());
    let names: Vec<String> = reader
        .records()
        .map(|record| record.expect("record")[1].to_string())
        .collect();
    assert_eq!(names, vec!["Rohan •••", "Neha •••"]);
}
