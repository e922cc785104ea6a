use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to rank open jobs for an applicant.
///
/// `limit` falls back to the configured default page size and is capped at
/// the configured maximum.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankJobsRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "applicant_id", rename = "applicantId")]
    pub applicant_id: String,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Request to rank applicants for a job
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankApplicantsRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "job_id", rename = "jobId")]
    pub job_id: String,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<usize>,
}
