use super::domain::{Candidate, FilterCriteria};

/// Derives the visible ordering from the candidate collection and the active filters.
///
/// `anonymize` is the global display flag. When `criteria.anonymized_only` is set and the
/// flag is off, nothing is visible.
pub fn visible<'a>(
    candidates: &'a [Candidate],
    criteria: &FilterCriteria,
    anonymize: bool,
) -> Vec<&'a Candidate> {
    let query = criteria.query.to_lowercase();
    let mut rows: Vec<&Candidate> = candidates
        .iter()
        .filter(|candidate| matches_query(candidate, &query))
        .filter(|candidate| {
            criteria.client.is_empty() || candidate.client == criteria.client
        })
        .filter(|candidate| {
            criteria.job_description.is_empty()
                || candidate.job_description == criteria.job_description
        })
        .filter(|_| !criteria.anonymized_only || anonymize)
        .collect();

    // `sort_by` is stable, so equal scores keep their insertion order.
    rows.sort_by(|a, b| b.score.cmp(&a.score));
    rows
}

/// `query` must already be lowercased.
fn matches_query(candidate: &Candidate, query: &str) -> bool {
    query.is_empty()
        || candidate.name.to_lowercase().contains(query)
        || candidate.job_description.to_lowercase().contains(query)
        || candidate.client.to_lowercase().contains(query)
}
