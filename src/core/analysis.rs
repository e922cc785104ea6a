use crate::models::{MatchResult, SkillKind};
use serde::{Deserialize, Serialize};

/// Strengths and gaps of a scored match, phrased for the recruiter view
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSummary {
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
}

/// Turn a match result's factor details into recruiter-facing strength and
/// gap statements. Purely derived from the result; factors that were skipped
/// during scoring (no detail records) produce no statements.
pub fn summarize(result: &MatchResult) -> MatchSummary {
    let mut summary = MatchSummary::default();

    summarize_skills(result, &mut summary);
    summarize_experience(result, &mut summary);
    summarize_education(result, &mut summary);
    summarize_location(result, &mut summary);
    summarize_job_type(result, &mut summary);

    summary
}

fn summarize_skills(result: &MatchResult, summary: &mut MatchSummary) {
    let details = &result.components.skills.details;

    let required: Vec<_> = details
        .iter()
        .filter(|d| d.kind == SkillKind::Required)
        .collect();
    let matched: Vec<&str> = required
        .iter()
        .filter(|d| d.matched)
        .map(|d| d.skill.as_str())
        .collect();
    let missing: Vec<&str> = required
        .iter()
        .filter(|d| !d.matched)
        .map(|d| d.skill.as_str())
        .collect();

    if !matched.is_empty() {
        summary.strengths.push(format!(
            "Matches {} of {} required skills: {}",
            matched.len(),
            required.len(),
            matched.join(", ")
        ));
    }
    if !missing.is_empty() {
        summary.gaps.push(format!(
            "Missing {} required skills: {}",
            missing.len(),
            missing.join(", ")
        ));
    }

    let preferred_matched: Vec<&str> = details
        .iter()
        .filter(|d| d.kind == SkillKind::Preferred && d.matched)
        .map(|d| d.skill.as_str())
        .collect();
    let preferred_total = details
        .iter()
        .filter(|d| d.kind == SkillKind::Preferred)
        .count();
    if !preferred_matched.is_empty() {
        summary.strengths.push(format!(
            "Matches {} of {} preferred skills: {}",
            preferred_matched.len(),
            preferred_total,
            preferred_matched.join(", ")
        ));
    }
}

fn summarize_experience(result: &MatchResult, summary: &mut MatchSummary) {
    let Some(detail) = result.components.experience.details.first() else {
        return;
    };

    if detail.actual > detail.required as i32 {
        summary.strengths.push(format!(
            "Experience exceeds requirements ({} years vs required {})",
            detail.actual, detail.required
        ));
    } else if detail.actual == detail.required as i32 {
        summary.strengths.push(format!(
            "Experience matches requirements ({} years)",
            detail.actual
        ));
    } else {
        summary.gaps.push(format!(
            "Experience below requirements ({} years vs required {})",
            detail.actual, detail.required
        ));
    }
}

fn summarize_education(result: &MatchResult, summary: &mut MatchSummary) {
    let Some(detail) = result.components.education.details.first() else {
        return;
    };

    if detail.required_degree != "None" {
        if detail.degree_match {
            summary.strengths.push(format!(
                "Degree matches requirement ({})",
                detail.required_degree
            ));
        } else {
            summary.gaps.push(format!(
                "Missing required degree ({})",
                detail.required_degree
            ));
        }
    }

    if detail.required_field != "None" {
        if detail.field_match {
            summary.strengths.push(format!(
                "Field of study matches requirement ({})",
                detail.required_field
            ));
        } else {
            summary.gaps.push(format!(
                "Field of study does not match requirement ({})",
                detail.required_field
            ));
        }
    }
}

fn summarize_location(result: &MatchResult, summary: &mut MatchSummary) {
    let Some(detail) = result.components.location.details.first() else {
        return;
    };

    if detail.matched {
        summary.strengths.push(detail.reason.clone());
    } else if detail.reason == "Willing to relocate" {
        summary.strengths.push("Willing to relocate".to_string());
    } else {
        summary.gaps.push(format!(
            "Location ({}) does not match",
            detail.job_location
        ));
    }
}

fn summarize_job_type(result: &MatchResult, summary: &mut MatchSummary) {
    let Some(detail) = result.components.job_type.details.first() else {
        return;
    };

    if detail.matched {
        summary
            .strengths
            .push(format!("Preferred job type ({})", detail.job_type));
    } else if detail.reason.as_deref() == Some("Job type mismatch") {
        summary
            .gaps
            .push(format!("Job type ({}) not among preferences", detail.job_type));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scoring::compute_match_as_of;
    use crate::models::{
        Education, EducationRequirement, ExperienceRequirement, JobRequirements, Preferences,
        Profile, Skill, WorkExperience,
    };

    fn profile() -> Profile {
        Profile {
            skills: Some(vec![
                Skill {
                    name: "JavaScript".to_string(),
                },
                Skill {
                    name: "React".to_string(),
                },
            ]),
            work_experience: Some(vec![WorkExperience {
                start_date: Some("2017".to_string()),
                end_date: Some("2023".to_string()),
                is_current: false,
            }]),
            education: Some(vec![Education {
                degree: Some("Bachelor of Science".to_string()),
                field_of_study: Some("History".to_string()),
            }]),
            preferences: Some(Preferences {
                locations: vec!["Lisbon".to_string()],
                willing_to_relocate: false,
                remote_work: false,
                job_types: vec!["Contract".to_string()],
            }),
        }
    }

    fn job() -> JobRequirements {
        JobRequirements {
            required_skills: Some(vec!["javascript".to_string(), "kubernetes".to_string()]),
            preferred_skills: Some(vec!["react".to_string()]),
            experience: Some(ExperienceRequirement { min_years: 4 }),
            education: Some(EducationRequirement {
                degree: Some("Bachelor".to_string()),
                field_of_study: Some("Computer Science".to_string()),
            }),
            location: Some("Austin".to_string()),
            remote: false,
            job_type: Some("Full-time".to_string()),
        }
    }

    #[test]
    fn test_summary_mixes_strengths_and_gaps() {
        let result = compute_match_as_of(&profile(), &job(), 2025);
        let summary = summarize(&result);

        assert!(summary
            .strengths
            .iter()
            .any(|s| s == "Matches 1 of 2 required skills: javascript"));
        assert!(summary
            .gaps
            .iter()
            .any(|g| g == "Missing 1 required skills: kubernetes"));
        assert!(summary
            .strengths
            .iter()
            .any(|s| s == "Matches 1 of 1 preferred skills: react"));
        assert!(summary
            .strengths
            .iter()
            .any(|s| s == "Experience exceeds requirements (6 years vs required 4)"));
        assert!(summary
            .strengths
            .iter()
            .any(|s| s == "Degree matches requirement (bachelor)"));
        assert!(summary
            .gaps
            .iter()
            .any(|g| g == "Field of study does not match requirement (computer science)"));
        assert!(summary.gaps.iter().any(|g| g == "Location (austin) does not match"));
        assert!(summary
            .gaps
            .iter()
            .any(|g| g == "Job type (full-time) not among preferences"));
    }

    #[test]
    fn test_summary_empty_for_skipped_factors() {
        let result =
            compute_match_as_of(&Profile::default(), &JobRequirements::default(), 2025);
        let summary = summarize(&result);

        assert!(summary.strengths.is_empty());
        assert!(summary.gaps.is_empty());
    }
}
