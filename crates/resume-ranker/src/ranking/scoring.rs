use super::domain::{Candidate, ScoringWeights};

pub const MIN_WEIGHTED_SCORE: u8 = 40;
pub const MAX_SCORE: u8 = 99;

const SKILLS_SHARE: f64 = 0.6;
const EXPERIENCE_SHARE: f64 = 0.25;
const EDUCATION_SHARE: f64 = 0.10;
const CERTIFICATIONS_SHARE: f64 = 0.05;
const BASE_FACTOR: f64 = 0.4;

/// Stateless scorer that rescales candidate scores by the configured weights.
///
/// The factor is applied to the score currently held by each candidate, so applying the
/// same weights twice compounds rather than converging.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine {
    weights: ScoringWeights,
}

impl ScoringEngine {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            weights: weights.clamped(),
        }
    }

    pub fn weights(&self) -> ScoringWeights {
        self.weights
    }

    pub fn factor(&self) -> f64 {
        weight_factor(&self.weights)
    }

    pub fn rescore(&self, score: u8) -> u8 {
        let scaled = round_half_up(f64::from(score) * self.factor());
        scaled.clamp(f64::from(MIN_WEIGHTED_SCORE), f64::from(MAX_SCORE)) as u8
    }

    /// Returns a new collection in which only `score` differs from the input.
    pub fn recompute(&self, candidates: &[Candidate]) -> Vec<Candidate> {
        candidates
            .iter()
            .map(|candidate| Candidate {
                score: self.rescore(candidate.score),
                ..candidate.clone()
            })
            .collect()
    }
}

pub fn recompute(candidates: &[Candidate], weights: ScoringWeights) -> Vec<Candidate> {
    ScoringEngine::new(weights).recompute(candidates)
}

/// Multiplier derived from the weights; `0.4` when every weight is zero.
pub fn weight_factor(weights: &ScoringWeights) -> f64 {
    let total = f64::from(weights.sum().max(1));
    f64::from(weights.skills) / total * SKILLS_SHARE
        + f64::from(weights.experience) / total * EXPERIENCE_SHARE
        + f64::from(weights.education) / total * EDUCATION_SHARE
        + f64::from(weights.certifications) / total * CERTIFICATIONS_SHARE
        + BASE_FACTOR
}

pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
