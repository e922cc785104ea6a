use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;
use validator::Validate;

use crate::config::{MatchingSettings, Settings};
use crate::core::{analysis, compute_match, Matcher};
use crate::models::{
    ApplicationScore, MatchAnalysis, RankApplicantsRequest, RankJobsRequest, RankedApplicants,
    RankedJobs,
};
use crate::services::providers::{JobStore, ProfileStore, StoreError};

/// Errors surfaced by the match service
#[derive(Debug, Error)]
pub enum MatchServiceError {
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Orchestrates the portal's matching flows over the storage interfaces:
/// the applicant jobs feed, the recruiter candidate list, the per-pair
/// match analysis, and score attachment on application submit.
pub struct MatchService<P, J> {
    profiles: P,
    jobs: J,
    matcher: Matcher,
    limits: MatchingSettings,
}

impl<P: ProfileStore, J: JobStore> MatchService<P, J> {
    pub fn new(profiles: P, jobs: J, matcher: Matcher) -> Self {
        Self {
            profiles,
            jobs,
            matcher,
            limits: MatchingSettings::default(),
        }
    }

    /// Build the service from loaded configuration
    pub fn from_settings(profiles: P, jobs: J, settings: &Settings) -> Self {
        Self {
            profiles,
            jobs,
            matcher: Matcher::new(settings.matching.min_score),
            limits: settings.matching.clone(),
        }
    }

    /// Rank open jobs for an applicant ("view matching jobs")
    pub fn matching_jobs(&self, req: &RankJobsRequest) -> Result<RankedJobs, MatchServiceError> {
        req.validate()?;
        let limit = self.resolve_limit(req.limit);

        let profile = self.profiles.fetch_profile(&req.applicant_id)?;
        let jobs = self.jobs.list_open_jobs()?;

        tracing::info!(
            applicant_id = %req.applicant_id,
            candidates = jobs.len(),
            limit,
            "ranking jobs for applicant"
        );

        Ok(self.matcher.rank_jobs(&profile, jobs, limit))
    }

    /// Rank applicants for a job (recruiter side)
    pub fn matching_applicants(
        &self,
        req: &RankApplicantsRequest,
    ) -> Result<RankedApplicants, MatchServiceError> {
        req.validate()?;
        let limit = self.resolve_limit(req.limit);

        let job = self.jobs.fetch_job(&req.job_id)?;
        let applicants = self.profiles.list_applicants()?;

        tracing::info!(
            job_id = %req.job_id,
            candidates = applicants.len(),
            limit,
            "ranking applicants for job"
        );

        Ok(self
            .matcher
            .rank_applicants(&job.requirements, applicants, limit))
    }

    /// Full factor breakdown for one applicant/job pair
    pub fn match_analysis(
        &self,
        applicant_id: &str,
        job_id: &str,
    ) -> Result<MatchAnalysis, MatchServiceError> {
        let profile = self.profiles.fetch_profile(applicant_id)?;
        let job = self.jobs.fetch_job(job_id)?;

        let result = compute_match(&profile, &job.requirements);
        let summary = analysis::summarize(&result);

        tracing::debug!(applicant_id, job_id, score = result.score, "match analysis");

        Ok(MatchAnalysis {
            applicant_id: applicant_id.to_string(),
            job_id: job_id.to_string(),
            result,
            summary,
        })
    }

    /// Score an application on submit: a fresh application record id with
    /// the computed score attached.
    pub fn score_application(
        &self,
        applicant_id: &str,
        job_id: &str,
    ) -> Result<ApplicationScore, MatchServiceError> {
        let profile = self.profiles.fetch_profile(applicant_id)?;
        let job = self.jobs.fetch_job(job_id)?;

        let result = compute_match(&profile, &job.requirements);

        tracing::info!(
            applicant_id,
            job_id,
            score = result.score,
            "scored application"
        );

        Ok(ApplicationScore {
            application_id: Uuid::new_v4(),
            applicant_id: applicant_id.to_string(),
            job_id: job_id.to_string(),
            score: result.score,
            matching_skills: result.matching_skills,
            scored_at: Utc::now(),
        })
    }

    fn resolve_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.limits.default_limit)
            .min(self.limits.max_limit)
    }
}
