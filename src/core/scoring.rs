use chrono::{Datelike, Utc};

use crate::core::text::{fuzzy_any, fuzzy_eq, lowercase_all, parse_year};
use crate::models::{
    EducationDetail, ExperienceDetail, JobRequirements, JobTypeDetail, LocationDetail, MatchResult,
    Profile, ScoreComponent, ScoreComponents, SkillDetail, SkillKind, WorkExperience,
};

/// Factor point budgets. Fixed by the scoring contract; they sum to 100.
pub const SKILLS_MAX: f64 = 40.0;
pub const EXPERIENCE_MAX: f64 = 25.0;
pub const EDUCATION_MAX: f64 = 20.0;
pub const LOCATION_MAX: f64 = 10.0;
pub const JOB_TYPE_MAX: f64 = 5.0;

/// Split of the skills budget between required and preferred skills
const REQUIRED_SKILLS_WEIGHT: f64 = 30.0;
const PREFERRED_SKILLS_WEIGHT: f64 = 10.0;

/// Partial-credit multipliers
const DEGREE_ONLY_CREDIT: f64 = 0.7;
const FIELD_ONLY_CREDIT: f64 = 0.3;
const RELOCATION_CREDIT: f64 = 0.7;
const NO_JOB_TYPE_PREFERENCE_CREDIT: f64 = 0.5;

/// Score an applicant profile against a job's requirements (0-100)
///
/// Scoring budget:
/// ```text
/// skills      40   (30 required + 10 preferred, proportional)
/// experience  25   (full once total years reach the minimum)
/// education   20   (degree/field fuzzy match with partial credit)
/// location    10   (remote > direct match > willing to relocate)
/// job type     5   (half credit when no preference is stated)
/// ```
///
/// Pure and total: absent profile sections or job requirements skip their
/// factor instead of failing, and malformed dates are ignored.
pub fn compute_match(profile: &Profile, job: &JobRequirements) -> MatchResult {
    compute_match_as_of(profile, job, Utc::now().year())
}

/// Deterministic variant of [`compute_match`]: `reference_year` stands in
/// for the current calendar year when totalling open-ended work entries.
pub fn compute_match_as_of(
    profile: &Profile,
    job: &JobRequirements,
    reference_year: i32,
) -> MatchResult {
    let skills = score_skills(profile, job);
    let experience = score_experience(profile, job, reference_year);
    let education = score_education(profile, job);
    let location = score_location(profile, job);
    let job_type = score_job_type(profile, job);

    // A factor whose inputs are absent keeps score 0 while its budget stays
    // in the denominator, so sparse profiles cap below 100. Long-standing
    // portal behavior; kept as-is rather than renormalizing.
    let total_score =
        skills.score + experience.score + education.score + location.score + job_type.score;
    let total_max_score = skills.max_score
        + experience.max_score
        + education.max_score
        + location.max_score
        + job_type.max_score;

    let score = ((total_score / total_max_score) * 100.0).round() as u8;

    let matching_skills = skills
        .details
        .iter()
        .filter(|detail| detail.matched)
        .map(|detail| detail.skill.clone())
        .collect();

    MatchResult {
        score,
        components: ScoreComponents {
            skills,
            experience,
            education,
            location,
            job_type,
        },
        matching_skills,
    }
}

/// Skills factor: proportional credit over required and preferred lists.
/// An empty list means "no requirement" and awards its full weight.
fn score_skills(profile: &Profile, job: &JobRequirements) -> ScoreComponent<SkillDetail> {
    let mut component = ScoreComponent::new(SKILLS_MAX);

    let (Some(skills), Some(required)) = (&profile.skills, &job.required_skills) else {
        return component;
    };

    let applicant_skills: Vec<String> = skills.iter().map(|s| s.name.to_lowercase()).collect();
    let required_skills = lowercase_all(required);
    let preferred_skills = lowercase_all(job.preferred_skills.as_deref().unwrap_or(&[]));

    let mut matched_required = 0usize;
    for skill in &required_skills {
        let matched = fuzzy_any(&applicant_skills, skill);
        if matched {
            matched_required += 1;
        }
        component.details.push(SkillDetail {
            skill: skill.clone(),
            kind: SkillKind::Required,
            matched,
        });
    }

    let mut matched_preferred = 0usize;
    for skill in &preferred_skills {
        let matched = fuzzy_any(&applicant_skills, skill);
        if matched {
            matched_preferred += 1;
        }
        component.details.push(SkillDetail {
            skill: skill.clone(),
            kind: SkillKind::Preferred,
            matched,
        });
    }

    component.score += if required_skills.is_empty() {
        REQUIRED_SKILLS_WEIGHT
    } else {
        (matched_required as f64 / required_skills.len() as f64) * REQUIRED_SKILLS_WEIGHT
    };

    component.score += if preferred_skills.is_empty() {
        PREFERRED_SKILLS_WEIGHT
    } else {
        (matched_preferred as f64 / preferred_skills.len() as f64) * PREFERRED_SKILLS_WEIGHT
    };

    component
}

/// Experience factor: full credit once the summed years reach the minimum,
/// proportional credit below it, full credit when nothing is required.
fn score_experience(
    profile: &Profile,
    job: &JobRequirements,
    reference_year: i32,
) -> ScoreComponent<ExperienceDetail> {
    let mut component = ScoreComponent::new(EXPERIENCE_MAX);

    let (Some(entries), Some(requirement)) = (&profile.work_experience, &job.experience) else {
        return component;
    };

    let required_years = requirement.min_years;
    let total_years = total_experience_years(entries, reference_year);

    if total_years >= required_years as i32 {
        component.score = component.max_score;
        component.details.push(ExperienceDetail {
            required: required_years,
            actual: total_years,
            matched: true,
        });
    } else if required_years > 0 {
        // Clamped at both ends: a backwards date range can drive the year
        // sum negative, and the component must stay within its budget.
        let ratio = (total_years as f64 / required_years as f64).clamp(0.0, 1.0);
        component.score = ratio * component.max_score;
        component.details.push(ExperienceDetail {
            required: required_years,
            actual: total_years,
            matched: false,
        });
    } else {
        component.score = component.max_score;
        component.details.push(ExperienceDetail {
            required: 0,
            actual: total_years,
            matched: true,
        });
    }

    component
}

/// Sum whole-year spans across the work history. Overlapping jobs
/// double-count and months are ignored; an entry without a parsable year
/// (start, or a present end date) is skipped rather than failing the sum.
fn total_experience_years(entries: &[WorkExperience], reference_year: i32) -> i32 {
    let mut total = 0;

    for entry in entries {
        let start = entry
            .start_date
            .as_deref()
            .filter(|s| !s.is_empty())
            .and_then(parse_year);
        let Some(start_year) = start else {
            continue;
        };

        let end_year = if entry.is_current {
            reference_year
        } else {
            match entry.end_date.as_deref().filter(|s| !s.is_empty()) {
                Some(end) => match parse_year(end) {
                    Some(year) => year,
                    None => continue,
                },
                // Open entry that is not current: zero-length contribution
                None => start_year,
            }
        };

        total += end_year - start_year;
    }

    total
}

/// Education factor: degree and field are matched independently across all
/// entries, then credited once for the whole factor.
fn score_education(profile: &Profile, job: &JobRequirements) -> ScoreComponent<EducationDetail> {
    let mut component = ScoreComponent::new(EDUCATION_MAX);

    let (Some(entries), Some(requirement)) = (&profile.education, &job.education) else {
        return component;
    };

    let required_degree = requirement.degree.as_deref().map(str::to_lowercase);
    let required_field = requirement.field_of_study.as_deref().map(str::to_lowercase);

    let mut degree_match = false;
    let mut field_match = false;

    for entry in entries {
        if let (Some(required), Some(degree)) = (&required_degree, &entry.degree) {
            if fuzzy_eq(&degree.to_lowercase(), required) {
                degree_match = true;
            }
        }
        if let (Some(required), Some(field)) = (&required_field, &entry.field_of_study) {
            if fuzzy_eq(&field.to_lowercase(), required) {
                field_match = true;
            }
        }
    }

    component.score = match (&required_degree, &required_field) {
        (Some(_), Some(_)) => {
            if degree_match && field_match {
                component.max_score
            } else if degree_match {
                component.max_score * DEGREE_ONLY_CREDIT
            } else if field_match {
                component.max_score * FIELD_ONLY_CREDIT
            } else {
                0.0
            }
        }
        (Some(_), None) => {
            if degree_match {
                component.max_score
            } else {
                0.0
            }
        }
        (None, Some(_)) => {
            if field_match {
                component.max_score
            } else {
                0.0
            }
        }
        // No education requirement at all
        (None, None) => component.max_score,
    };

    component.details.push(EducationDetail {
        required_degree: required_degree.unwrap_or_else(|| "None".to_string()),
        required_field: required_field.unwrap_or_else(|| "None".to_string()),
        degree_match,
        field_match,
    });

    component
}

/// Location factor. Rule priority: remote match, direct location match,
/// willingness to relocate, nothing.
fn score_location(profile: &Profile, job: &JobRequirements) -> ScoreComponent<LocationDetail> {
    let mut component = ScoreComponent::new(LOCATION_MAX);

    let (Some(preferences), Some(location)) = (&profile.preferences, &job.location) else {
        return component;
    };

    let job_location = location.to_lowercase();
    let applicant_locations = lowercase_all(&preferences.locations);
    let location_match = fuzzy_any(&applicant_locations, &job_location);

    if job.remote && preferences.remote_work {
        component.score = component.max_score;
        component.details.push(LocationDetail {
            job_location,
            remote: true,
            matched: true,
            reason: "Remote job match".to_string(),
        });
    } else if location_match {
        component.score = component.max_score;
        component.details.push(LocationDetail {
            job_location,
            remote: false,
            matched: true,
            reason: "Location match".to_string(),
        });
    } else if preferences.willing_to_relocate {
        component.score = component.max_score * RELOCATION_CREDIT;
        component.details.push(LocationDetail {
            job_location,
            remote: false,
            matched: false,
            reason: "Willing to relocate".to_string(),
        });
    } else {
        component.details.push(LocationDetail {
            job_location,
            remote: job.remote,
            matched: false,
            reason: "No location match".to_string(),
        });
    }

    component
}

/// Job-type factor: full credit on a preference match, half credit when the
/// applicant stated no preference at all.
fn score_job_type(profile: &Profile, job: &JobRequirements) -> ScoreComponent<JobTypeDetail> {
    let mut component = ScoreComponent::new(JOB_TYPE_MAX);

    let (Some(preferences), Some(job_type)) = (&profile.preferences, &job.job_type) else {
        return component;
    };

    let job_type = job_type.to_lowercase();
    let applicant_types = lowercase_all(&preferences.job_types);

    if fuzzy_any(&applicant_types, &job_type) {
        component.score = component.max_score;
        component.details.push(JobTypeDetail {
            job_type,
            matched: true,
            reason: None,
        });
    } else if applicant_types.is_empty() {
        component.score = component.max_score * NO_JOB_TYPE_PREFERENCE_CREDIT;
        component.details.push(JobTypeDetail {
            job_type,
            matched: false,
            reason: Some("No preferences specified".to_string()),
        });
    } else {
        component.details.push(JobTypeDetail {
            job_type,
            matched: false,
            reason: Some("Job type mismatch".to_string()),
        });
    }

    component
}
