use serde::{Deserialize, Serialize};

use super::domain::{Candidate, CandidateId};

pub const MASKED_EMAIL: &str = "hidden@company.com";
const MASK_SUFFIX: &str = " •••";

/// Row handed to the display layer; name and email are masked when anonymizing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRecord {
    pub id: CandidateId,
    pub name: String,
    pub email: String,
    pub client: String,
    pub job_description: String,
    pub score: u8,
    pub duplicate: bool,
}

pub fn project(candidate: &Candidate, anonymize: bool) -> DisplayRecord {
    let (name, email) = if anonymize {
        (masked_name(&candidate.name), MASKED_EMAIL.to_string())
    } else {
        (candidate.name.clone(), candidate.email.clone())
    };

    DisplayRecord {
        id: candidate.id,
        name,
        email,
        client: candidate.client.clone(),
        job_description: candidate.job_description.clone(),
        score: candidate.score,
        duplicate: candidate.duplicate,
    }
}

pub fn masked_name(name: &str) -> String {
    let first = name.split(' ').next().unwrap_or_default();
    format!("{first}{MASK_SUFFIX}")
}
