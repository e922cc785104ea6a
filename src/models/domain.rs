use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single skill on an applicant profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
}

/// One work-experience entry. Dates arrive as "YYYY-MM" or "YYYY" strings
/// from the portal; anything else is tolerated and skipped during scoring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkExperience {
    #[serde(rename = "startDate", default)]
    pub start_date: Option<String>,
    #[serde(rename = "endDate", default)]
    pub end_date: Option<String>,
    #[serde(rename = "isCurrent", default)]
    pub is_current: bool,
}

/// One education entry on an applicant profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(rename = "fieldOfStudy", default)]
    pub field_of_study: Option<String>,
}

/// Applicant job-search preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(rename = "willingToRelocate", default)]
    pub willing_to_relocate: bool,
    #[serde(rename = "remoteWork", default)]
    pub remote_work: bool,
    #[serde(rename = "jobTypes", default)]
    pub job_types: Vec<String>,
}

/// Applicant profile as supplied by the portal's profile store.
///
/// Every section is optional: profiles under construction can miss whole
/// sections, and a missing section skips the corresponding match factor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub skills: Option<Vec<Skill>>,
    #[serde(rename = "workExperience", default)]
    pub work_experience: Option<Vec<WorkExperience>>,
    #[serde(default)]
    pub education: Option<Vec<Education>>,
    #[serde(default)]
    pub preferences: Option<Preferences>,
}

/// Minimum-years experience requirement on a job
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceRequirement {
    #[serde(rename = "minYears", default)]
    pub min_years: u32,
}

/// Degree / field-of-study requirement on a job
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationRequirement {
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(rename = "fieldOfStudy", default)]
    pub field_of_study: Option<String>,
}

/// Job-side requirements consumed by the scorer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobRequirements {
    #[serde(rename = "requiredSkills", default)]
    pub required_skills: Option<Vec<String>>,
    #[serde(rename = "preferredSkills", default)]
    pub preferred_skills: Option<Vec<String>>,
    #[serde(default)]
    pub experience: Option<ExperienceRequirement>,
    #[serde(default)]
    pub education: Option<EducationRequirement>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub remote: bool,
    #[serde(rename = "jobType", default)]
    pub job_type: Option<String>,
}

/// Whether a skill requirement was required or merely preferred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillKind {
    Required,
    Preferred,
}

/// Per-skill match record kept for UI display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillDetail {
    pub skill: String,
    #[serde(rename = "type")]
    pub kind: SkillKind,
    pub matched: bool,
}

/// The single aggregate experience comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceDetail {
    pub required: u32,
    pub actual: i32,
    pub matched: bool,
}

/// Education comparison summary; absent requirements show as the literal "None"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationDetail {
    #[serde(rename = "requiredDegree")]
    pub required_degree: String,
    #[serde(rename = "requiredField")]
    pub required_field: String,
    #[serde(rename = "degreeMatch")]
    pub degree_match: bool,
    #[serde(rename = "fieldMatch")]
    pub field_match: bool,
}

/// Location comparison outcome with the rule that decided it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationDetail {
    #[serde(rename = "jobLocation")]
    pub job_location: String,
    pub remote: bool,
    pub matched: bool,
    pub reason: String,
}

/// Job-type comparison outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobTypeDetail {
    #[serde(rename = "jobType")]
    pub job_type: String,
    pub matched: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// One scored factor: points earned, points available, per-item records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreComponent<D> {
    pub score: f64,
    #[serde(rename = "maxScore")]
    pub max_score: f64,
    pub details: Vec<D>,
}

impl<D> ScoreComponent<D> {
    pub fn new(max_score: f64) -> Self {
        Self {
            score: 0.0,
            max_score,
            details: Vec::new(),
        }
    }
}

/// The five factor breakdowns of a match result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreComponents {
    pub skills: ScoreComponent<SkillDetail>,
    pub experience: ScoreComponent<ExperienceDetail>,
    pub education: ScoreComponent<EducationDetail>,
    pub location: ScoreComponent<LocationDetail>,
    #[serde(rename = "jobType")]
    pub job_type: ScoreComponent<JobTypeDetail>,
}

/// Result of scoring one applicant against one job.
///
/// Fully derived from the two inputs; freshly constructed on every call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u8,
    pub components: ScoreComponents,
    #[serde(rename = "matchingSkills")]
    pub matching_skills: Vec<String>,
}

/// A job posting as supplied by the portal's job store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(rename = "jobId")]
    pub job_id: String,
    pub title: String,
    pub requirements: JobRequirements,
}

/// An applicant as supplied by the portal's profile store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicantRecord {
    #[serde(rename = "applicantId")]
    pub applicant_id: String,
    pub name: String,
    pub profile: Profile,
}

/// Score attached to a submitted application record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationScore {
    #[serde(rename = "applicationId")]
    pub application_id: Uuid,
    #[serde(rename = "applicantId")]
    pub applicant_id: String,
    #[serde(rename = "jobId")]
    pub job_id: String,
    pub score: u8,
    #[serde(rename = "matchingSkills")]
    pub matching_skills: Vec<String>,
    #[serde(rename = "scoredAt")]
    pub scored_at: DateTime<Utc>,
}
