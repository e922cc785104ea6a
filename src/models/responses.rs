use serde::{Deserialize, Serialize};

use crate::core::analysis::MatchSummary;
use crate::models::domain::MatchResult;

/// One job in an applicant's ranked feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedJob {
    #[serde(rename = "jobId")]
    pub job_id: String,
    pub title: String,
    pub score: u8,
    #[serde(rename = "matchingSkills")]
    pub matching_skills: Vec<String>,
}

/// One applicant in a recruiter's ranked list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicantMatch {
    #[serde(rename = "applicantId")]
    pub applicant_id: String,
    pub name: String,
    pub score: u8,
    #[serde(rename = "matchingSkills")]
    pub matching_skills: Vec<String>,
}

/// Ranked jobs for one applicant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedJobs {
    pub matches: Vec<MatchedJob>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Ranked applicants for one job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedApplicants {
    pub matches: Vec<ApplicantMatch>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Full breakdown for one applicant/job pair, for the match-analysis view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchAnalysis {
    #[serde(rename = "applicantId")]
    pub applicant_id: String,
    #[serde(rename = "jobId")]
    pub job_id: String,
    pub result: MatchResult,
    pub summary: MatchSummary,
}
