use serde::{Deserialize, Serialize};

use super::domain::Candidate;
use super::scoring::round_half_up;

/// Snapshot backing the analytics panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub average_score: u8,
    pub uploads: u32,
    pub any_duplicate: bool,
    pub candidate_count: usize,
}

pub fn any_duplicate(candidates: &[Candidate]) -> bool {
    candidates.iter().any(|candidate| candidate.duplicate)
}

/// Mean score rounded to the nearest integer; `0` for an empty collection.
pub fn average_score(candidates: &[Candidate]) -> u8 {
    if candidates.is_empty() {
        return 0;
    }
    let total: u64 = candidates
        .iter()
        .map(|candidate| u64::from(candidate.score))
        .sum();
    round_half_up(total as f64 / candidates.len() as f64) as u8
}

/// First `limit` entries of an already ordered view.
pub fn shortlist<T: Clone>(visible: &[T], limit: usize) -> Vec<T> {
    visible.iter().take(limit).cloned().collect()
}

pub fn snapshot(candidates: &[Candidate], uploads: u32) -> AnalyticsSnapshot {
    AnalyticsSnapshot {
        average_score: average_score(candidates),
        uploads,
        any_duplicate: any_duplicate(candidates),
        candidate_count: candidates.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::store::CandidateStore;

    #[test]
    fn empty_collection_has_defined_defaults() {
        assert_eq!(average_score(&[]), 0);
        assert!(!any_duplicate(&[]));
    }

    #[test]
    fn demo_data_average_rounds_half_up() {
        // (87 + 78 + 91 + 73) / 4 = 82.25
        let store = CandidateStore::demo();
        assert_eq!(average_score(store.candidates()), 82);
        assert!(any_duplicate(store.candidates()));
    }

    #[test]
    fn average_rounds_midpoint_up() {
        let store = CandidateStore::demo();
        let mut pair = store.candidates()[..2].to_vec();
        pair[0].score = 80;
        pair[1].score = 81;
        assert_eq!(average_score(&pair), 81);
    }

    #[test]
    fn shortlist_caps_at_limit() {
        let items = vec![1, 2, 3];
        assert_eq!(shortlist(&items, 10), vec![1, 2, 3]);
        assert_eq!(shortlist(&items, 2), vec![1, 2]);
    }
}
