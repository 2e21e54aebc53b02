use super::common::*;
use crate::ranking::analytics::any_duplicate;
use crate::ranking::anonymize::project;
use crate::ranking::domain::{FilterCriteria, ScoringWeights};
use crate::ranking::filter::visible;
use crate::ranking::scoring::recompute;
use crate::ranking::store::CandidateStore;

fn criteria_variants() -> Vec<FilterCriteria> {
    let mut variants = Vec::new();
    for query in ["", "an", "ENGINEER", "zzz"] {
        for client in ["", "Al Noor Holdings", "Emerald Systems"] {
            for job_description in ["", "FastAPI Engineer", "Senior Angular Developer"] {
                for anonymized_only in [false, true] {
                    variants.push(FilterCriteria {
                        query: query.to_string(),
                        client: client.to_string(),
                        job_description: job_description.to_string(),
                        anonymized_only,
                    });
                }
            }
        }
    }
    variants
}

#[test]
fn worked_example_compounds_on_repeated_apply() {
    let weights = ScoringWeights::new(40, 30, 15, 15);
    let first = recompute(&[candidate(1, "Aisha Khan", 87)], weights);
    assert_eq!(first[0].score, 64);
    let second = recompute(&first, weights);
    assert_eq!(second[0].score, 47);
}

#[test]
fn adding_a_constraint_never_grows_the_result() {
    let store = CandidateStore::demo();
    for anonymize in [false, true] {
        for criteria in criteria_variants() {
            let base = visible(store.candidates(), &criteria, anonymize).len();

            let mut narrowed = criteria.clone();
            narrowed.client = "Desert Tech LLC".to_string();
            assert!(visible(store.candidates(), &narrowed, anonymize).len() <= base);

            let mut narrowed = criteria.clone();
            narrowed.anonymized_only = true;
            assert!(visible(store.candidates(), &narrowed, anonymize).len() <= base);

            let mut narrowed = criteria.clone();
            narrowed.query.push('x');
            assert!(visible(store.candidates(), &narrowed, anonymize).len() <= base);
        }
    }
}

#[test]
fn every_substring_matches_in_any_case() {
    let store = CandidateStore::demo();
    for candidate in store.candidates() {
        for field in [&candidate.name, &candidate.client, &candidate.job_description] {
            let chars: Vec<char> = field.chars().collect();
            for start in 0..chars.len() {
                for end in (start + 1)..=chars.len().min(start + 6) {
                    let needle: String = chars[start..end].iter().collect();
                    for query in [needle.to_uppercase(), needle.to_lowercase()] {
                        let criteria = FilterCriteria {
                            query,
                            ..FilterCriteria::default()
                        };
                        let rows = visible(store.candidates(), &criteria, false);
                        assert!(rows.iter().any(|row| row.id == candidate.id));
                    }
                }
            }
        }
    }
}

#[test]
fn anonymized_only_without_global_flag_is_always_empty() {
    let store = CandidateStore::demo();
    for mut criteria in criteria_variants() {
        criteria.anonymized_only = true;
        assert!(visible(store.candidates(), &criteria, false).is_empty());
    }
}

#[test]
fn equal_scores_keep_source_order_after_filtering() {
    let candidates = vec![
        candidate(10, "Zara Ali", 70),
        candidate(11, "Omar Farouk", 85),
        candidate(12, "Anya Roy", 70),
        candidate(13, "Bilal Noor", 70),
    ];
    let rows = visible(&candidates, &FilterCriteria::default(), false);
    let ids: Vec<u64> = rows.iter().map(|row| row.id.0).collect();
    assert_eq!(ids, vec![11, 10, 12, 13]);
}

#[test]
fn filtering_leaves_source_untouched() {
    let store = CandidateStore::demo();
    let before = store.candidates().to_vec();
    let _ = visible(store.candidates(), &FilterCriteria::default(), true);
    assert_eq!(store.candidates(), before.as_slice());
}

#[test]
fn duplicate_aggregate_tracks_flags() {
    let mut candidates = vec![candidate(1, "Aisha Khan", 87), candidate(2, "Neha Sharma", 73)];
    assert!(!any_duplicate(&candidates));
    candidates[1].duplicate = true;
    assert!(any_duplicate(&candidates));
}

#[test]
fn anonymized_projection_uses_first_token() {
    let record = project(&candidate(1, "Aisha Khan", 87), true);
    assert_eq!(record.name, "Aisha •••");
}
