use thiserror::Error;

use crate::models::{ApplicantRecord, JobPosting, Profile};

/// Errors surfaced by the portal's storage services
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Store backend error: {0}")]
    Backend(String),
}

/// Applicant-side storage as the scorer needs it.
///
/// The portal's real profile service sits behind this trait; the engine
/// never talks to it directly and only consumes the records it returns.
pub trait ProfileStore {
    /// Fetch one applicant's profile
    fn fetch_profile(&self, applicant_id: &str) -> Result<Profile, StoreError>;

    /// List every applicant visible to recruiters
    fn list_applicants(&self) -> Result<Vec<ApplicantRecord>, StoreError>;
}

/// Job-side storage as the scorer needs it
pub trait JobStore {
    /// Fetch one job posting
    fn fetch_job(&self, job_id: &str) -> Result<JobPosting, StoreError>;

    /// List every open job posting
    fn list_open_jobs(&self) -> Result<Vec<JobPosting>, StoreError>;
}
