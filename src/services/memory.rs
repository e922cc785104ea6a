use std::collections::HashMap;

use serde_json::Value;

use crate::models::{ApplicantRecord, JobPosting, Profile};
use crate::services::providers::{JobStore, ProfileStore, StoreError};

/// In-memory store backing both provider traits.
///
/// Used by tests and embedders that already hold the portal's records;
/// production deployments substitute their own store implementations.
#[derive(Debug, Default, Clone)]
pub struct InMemoryPortal {
    applicants: HashMap<String, ApplicantRecord>,
    jobs: HashMap<String, JobPosting>,
}

impl InMemoryPortal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_applicant(&mut self, record: ApplicantRecord) {
        self.applicants.insert(record.applicant_id.clone(), record);
    }

    pub fn insert_job(&mut self, job: JobPosting) {
        self.jobs.insert(job.job_id.clone(), job);
    }

    /// Seed the store from exported portal documents: a JSON object with
    /// "applicants" and "jobs" arrays. Documents that fail to parse are
    /// skipped, mirroring how the portal tolerates partial exports.
    pub fn from_json(raw: &str) -> Result<Self, StoreError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| StoreError::Backend(e.to_string()))?;

        let mut store = Self::new();

        if let Some(docs) = value.get("applicants").and_then(Value::as_array) {
            for doc in docs {
                if let Ok(record) = serde_json::from_value::<ApplicantRecord>(doc.clone()) {
                    store.insert_applicant(record);
                }
            }
        }

        if let Some(docs) = value.get("jobs").and_then(Value::as_array) {
            for doc in docs {
                if let Ok(job) = serde_json::from_value::<JobPosting>(doc.clone()) {
                    store.insert_job(job);
                }
            }
        }

        Ok(store)
    }
}

impl ProfileStore for InMemoryPortal {
    fn fetch_profile(&self, applicant_id: &str) -> Result<Profile, StoreError> {
        self.applicants
            .get(applicant_id)
            .map(|record| record.profile.clone())
            .ok_or_else(|| StoreError::NotFound(format!("applicant {}", applicant_id)))
    }

    fn list_applicants(&self) -> Result<Vec<ApplicantRecord>, StoreError> {
        let mut records: Vec<ApplicantRecord> = self.applicants.values().cloned().collect();
        // HashMap order is arbitrary; keep listings reproducible
        records.sort_by(|a, b| a.applicant_id.cmp(&b.applicant_id));
        Ok(records)
    }
}

impl JobStore for InMemoryPortal {
    fn fetch_job(&self, job_id: &str) -> Result<JobPosting, StoreError> {
        self.jobs
            .get(job_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("job {}", job_id)))
    }

    fn list_open_jobs(&self) -> Result<Vec<JobPosting>, StoreError> {
        let mut jobs: Vec<JobPosting> = self.jobs.values().cloned().collect();
        jobs.sort_by(|a, b| a.job_id.cmp(&b.job_id));
        Ok(jobs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_applicant_is_not_found() {
        let store = InMemoryPortal::new();
        let err = store.fetch_profile("nobody").unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn test_from_json_skips_bad_documents() {
        let raw = r#"{
            "applicants": [
                {"applicantId": "a1", "name": "Ada", "profile": {}},
                {"name": "missing id"}
            ],
            "jobs": [
                {"jobId": "j1", "title": "Engineer", "requirements": {"remote": true}}
            ]
        }"#;

        let store = InMemoryPortal::from_json(raw).unwrap();

        assert_eq!(store.list_applicants().unwrap().len(), 1);
        assert_eq!(store.list_open_jobs().unwrap().len(), 1);
        assert!(store.fetch_job("j1").unwrap().requirements.remote);
    }

    #[test]
    fn test_from_json_rejects_invalid_json() {
        assert!(InMemoryPortal::from_json("not json").is_err());
    }
}
