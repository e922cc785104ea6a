//! Portal Match - match scoring engine for the recruiting portal
//!
//! This library scores applicant profiles against job requirements and
//! produces explainable 0-100 results with per-factor breakdowns. Around
//! the scorer it provides the ranking pipeline behind the applicant jobs
//! feed and the recruiter candidate list, plus storage interfaces the
//! portal's services plug into.

pub mod config;
pub mod core;
pub mod logging;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use self::core::{compute_match, compute_match_as_of, summarize, MatchSummary, Matcher};
pub use models::{
    ApplicantRecord, ApplicationScore, JobPosting, JobRequirements, MatchAnalysis, MatchResult,
    Profile, RankApplicantsRequest, RankJobsRequest, RankedApplicants, RankedJobs,
};
pub use services::{InMemoryPortal, JobStore, MatchService, ProfileStore};
