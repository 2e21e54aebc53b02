use serde::{Deserialize, Serialize};

/// Stable identifier assigned to a candidate at ingestion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(pub u64);

/// A parsed resume tracked against one client and one job description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub email: String,
    pub client: String,
    pub job_description: String,
    pub score: u8,
    /// Supplied by the upstream parser; never derived here.
    pub duplicate: bool,
}

/// Role profile candidates are scored against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDescription {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub name: String,
}

/// Relative importance of the four scoring criteria. The values need not sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skills: u8,
    pub experience: u8,
    pub education: u8,
    pub certifications: u8,
}

impl ScoringWeights {
    pub const MAX: u8 = 100;

    /// Build a weight set, clamping each control into `[0, 100]`.
    pub fn new(skills: u8, experience: u8, education: u8, certifications: u8) -> Self {
        Self {
            skills: skills.min(Self::MAX),
            experience: experience.min(Self::MAX),
            education: education.min(Self::MAX),
            certifications: certifications.min(Self::MAX),
        }
    }

    pub fn clamped(self) -> Self {
        Self::new(
            self.skills,
            self.experience,
            self.education,
            self.certifications,
        )
    }

    pub fn sum(&self) -> u32 {
        u32::from(self.skills)
            + u32::from(self.experience)
            + u32::from(self.education)
            + u32::from(self.certifications)
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::new(40, 30, 15, 15)
    }
}

/// Display branding. Lives outside the ranking core and only drives the theme callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Dubai,
    India,
}

impl Theme {
    pub const fn toggle(self) -> Self {
        match self {
            Self::Dubai => Self::India,
            Self::India => Self::Dubai,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Dubai => "Dubai",
            Self::India => "India",
        }
    }
}

/// Active search and filter state applied by the filter pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub query: String,
    pub client: String,
    pub job_description: String,
    pub anonymized_only: bool,
}

/// User-visible acknowledgment for actions that have no effect on ranking state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub action: AcknowledgedAction,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcknowledgedAction {
    Shortlist,
    CompanyFormat,
    HrmsSync,
    ViewCandidate,
    EditJobDescription,
    EditClient,
}

impl AcknowledgedAction {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Shortlist => "Top 10 Shortlist",
            Self::CompanyFormat => "Generate Company Format",
            Self::HrmsSync => "HRMS Sync",
            Self::ViewCandidate => "View",
            Self::EditJobDescription => "Edit JD",
            Self::EditClient => "Edit Client",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_clamp_into_range() {
        let weights = ScoringWeights::new(140, 30, 255, 0);
        assert_eq!(weights.skills, 100);
        assert_eq!(weights.education, 100);
        assert_eq!(weights.sum(), 230);
    }

    #[test]
    fn theme_toggles_between_variants() {
        assert_eq!(Theme::default(), Theme::Dubai);
        assert_eq!(Theme::Dubai.toggle(), Theme::India);
        assert_eq!(Theme::India.toggle().label(), "Dubai");
    }
}
