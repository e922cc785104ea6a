// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    ApplicantRecord, ApplicationScore, Education, EducationDetail, EducationRequirement,
    ExperienceDetail, ExperienceRequirement, JobPosting, JobRequirements, JobTypeDetail,
    LocationDetail, MatchResult, Preferences, Profile, ScoreComponent, ScoreComponents, Skill,
    SkillDetail, SkillKind, WorkExperience,
};
pub use requests::{RankApplicantsRequest, RankJobsRequest};
pub use responses::{ApplicantMatch, MatchAnalysis, MatchedJob, RankedApplicants, RankedJobs};
