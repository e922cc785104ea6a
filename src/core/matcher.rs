use crate::core::scoring::compute_match;
use crate::models::{
    ApplicantMatch, ApplicantRecord, JobPosting, JobRequirements, MatchedJob, Profile, RankedApplicants,
    RankedJobs,
};

/// Results below this score are not worth surfacing
pub const DEFAULT_MIN_SCORE: u8 = 30;

/// Ranking pipeline around the scorer: score every candidate, drop weak
/// matches, sort the rest by score, truncate to the requested page size.
#[derive(Debug, Clone)]
pub struct Matcher {
    min_score: u8,
}

impl Matcher {
    /// `min_score` is a strict cutoff: results scoring exactly the cutoff
    /// are excluded.
    pub fn new(min_score: u8) -> Self {
        Self { min_score }
    }

    /// Rank open jobs for one applicant ("view matching jobs")
    pub fn rank_jobs(&self, profile: &Profile, jobs: Vec<JobPosting>, limit: usize) -> RankedJobs {
        let total_candidates = jobs.len();

        let mut matches: Vec<MatchedJob> = jobs
            .into_iter()
            .filter_map(|job| {
                let result = compute_match(profile, &job.requirements);
                if result.score > self.min_score {
                    Some(MatchedJob {
                        job_id: job.job_id,
                        title: job.title,
                        score: result.score,
                        matching_skills: result.matching_skills,
                    })
                } else {
                    None
                }
            })
            .collect();

        sort_and_truncate(&mut matches, |m| m.score, limit);

        tracing::debug!(
            total_candidates,
            returned = matches.len(),
            "ranked jobs for applicant"
        );

        RankedJobs {
            matches,
            total_candidates,
        }
    }

    /// Rank applicants for one job (recruiter side)
    pub fn rank_applicants(
        &self,
        job: &JobRequirements,
        applicants: Vec<ApplicantRecord>,
        limit: usize,
    ) -> RankedApplicants {
        let total_candidates = applicants.len();

        let mut matches: Vec<ApplicantMatch> = applicants
            .into_iter()
            .filter_map(|applicant| {
                let result = compute_match(&applicant.profile, job);
                if result.score > self.min_score {
                    Some(ApplicantMatch {
                        applicant_id: applicant.applicant_id,
                        name: applicant.name,
                        score: result.score,
                        matching_skills: result.matching_skills,
                    })
                } else {
                    None
                }
            })
            .collect();

        sort_and_truncate(&mut matches, |m| m.score, limit);

        tracing::debug!(
            total_candidates,
            returned = matches.len(),
            "ranked applicants for job"
        );

        RankedApplicants {
            matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SCORE)
    }
}

/// Stable descending sort by score, then cut to the page size. Stability
/// keeps store order among equal scores.
fn sort_and_truncate<T>(matches: &mut Vec<T>, score: impl Fn(&T) -> u8, limit: usize) {
    matches.sort_by(|a, b| score(b).cmp(&score(a)));
    matches.truncate(limit);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExperienceRequirement, Preferences, Skill, WorkExperience};

    fn strong_profile() -> Profile {
        Profile {
            skills: Some(vec![
                Skill {
                    name: "Rust".to_string(),
                },
                Skill {
                    name: "PostgreSQL".to_string(),
                },
            ]),
            work_experience: Some(vec![WorkExperience {
                start_date: Some("2015".to_string()),
                end_date: Some("2023".to_string()),
                is_current: false,
            }]),
            education: None,
            preferences: Some(Preferences {
                locations: vec!["Berlin".to_string()],
                willing_to_relocate: false,
                remote_work: true,
                job_types: vec!["Full-time".to_string()],
            }),
        }
    }

    fn job(id: &str, required: &[&str]) -> JobPosting {
        JobPosting {
            job_id: id.to_string(),
            title: format!("Job {}", id),
            requirements: JobRequirements {
                required_skills: Some(required.iter().map(|s| s.to_string()).collect()),
                experience: Some(ExperienceRequirement { min_years: 3 }),
                location: Some("Berlin".to_string()),
                remote: true,
                job_type: Some("Full-time".to_string()),
                ..JobRequirements::default()
            },
        }
    }

    #[test]
    fn test_rank_jobs_sorts_descending_and_reports_total() {
        let matcher = Matcher::default();
        let jobs = vec![
            job("partial", &["rust", "kubernetes", "go", "terraform"]),
            job("perfect", &["rust", "postgresql"]),
        ];

        let ranked = matcher.rank_jobs(&strong_profile(), jobs, 10);

        assert_eq!(ranked.total_candidates, 2);
        assert_eq!(ranked.matches.len(), 2);
        assert_eq!(ranked.matches[0].job_id, "perfect");
        assert!(ranked.matches[0].score >= ranked.matches[1].score);
    }

    #[test]
    fn test_rank_jobs_applies_cutoff() {
        // High cutoff excludes everything
        let matcher = Matcher::new(99);
        let ranked = matcher.rank_jobs(&strong_profile(), vec![job("a", &["rust"])], 10);

        assert_eq!(ranked.total_candidates, 1);
        assert!(ranked.matches.is_empty());
    }

    #[test]
    fn test_rank_jobs_cutoff_is_strict() {
        // This pairing scores exactly 80 (education section absent), and
        // 80 is not > 80
        let matcher = Matcher::new(80);
        let ranked = matcher.rank_jobs(
            &strong_profile(),
            vec![job("perfect", &["rust", "postgresql"])],
            10,
        );
        assert!(ranked.matches.is_empty());
    }

    #[test]
    fn test_rank_jobs_respects_limit() {
        let matcher = Matcher::default();
        let jobs: Vec<JobPosting> = (0..20).map(|i| job(&i.to_string(), &["rust"])).collect();

        let ranked = matcher.rank_jobs(&strong_profile(), jobs, 5);

        assert_eq!(ranked.total_candidates, 20);
        assert_eq!(ranked.matches.len(), 5);
    }

    #[test]
    fn test_rank_applicants_orders_by_score() {
        let matcher = Matcher::default();
        let posting = job("j1", &["rust", "postgresql"]);

        let weak = ApplicantRecord {
            applicant_id: "weak".to_string(),
            name: "Weak Match".to_string(),
            profile: Profile {
                skills: Some(vec![Skill {
                    name: "Rust".to_string(),
                }]),
                ..strong_profile()
            },
        };
        let strong = ApplicantRecord {
            applicant_id: "strong".to_string(),
            name: "Strong Match".to_string(),
            profile: strong_profile(),
        };

        let ranked = matcher.rank_applicants(&posting.requirements, vec![weak, strong], 10);

        assert_eq!(ranked.matches.len(), 2);
        assert_eq!(ranked.matches[0].applicant_id, "strong");
        assert_eq!(ranked.matches[1].applicant_id, "weak");
    }
}
