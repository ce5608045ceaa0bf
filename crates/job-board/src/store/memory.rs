use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use super::RepositoryError;
use crate::workflows::applications::{
    ApplicationDetails, ApplicationId, ApplicationRepository, JobApplication, NewApplication,
};
use crate::workflows::jobs::{Job, JobId, JobPosting, JobRepository};
use crate::workflows::users::{Registration, User, UserId, UserRepository};

const USERS_EMAIL_KEY: &str = "users.email";
const APPLICATIONS_JOB_USER_KEY: &str = "job_applications.job_id_user_id";

#[derive(Default)]
struct Tables {
    users: BTreeMap<UserId, User>,
    jobs: BTreeMap<JobId, Job>,
    applications: BTreeMap<ApplicationId, JobApplication>,
    user_sequence: u64,
    job_sequence: u64,
    application_sequence: u64,
}

fn next_id(sequence: &mut u64) -> u64 {
    *sequence += 1;
    *sequence
}

impl Tables {
    fn details(&self, application: &JobApplication) -> Option<ApplicationDetails> {
        let job = self.jobs.get(&application.job_id)?;
        let applicant = self.users.get(&application.user_id)?;
        Some(ApplicationDetails {
            application: application.clone(),
            job: job.clone(),
            applicant: applicant.clone(),
        })
    }

    fn join_where<F>(&self, predicate: F) -> Vec<ApplicationDetails>
    where
        F: Fn(&JobApplication) -> bool,
    {
        self.applications
            .values()
            .filter(|application| predicate(application))
            .filter_map(|application| self.details(application))
            .collect()
    }
}

/// Process-local relational store. Identity columns start at 1 and the unique
/// constraints on user email and on (job, user) applications are enforced under the
/// same lock as the write, so concurrent duplicate inserts cannot both land.
///
/// Emails are stored as submitted but compared ignoring ASCII case.
#[derive(Default, Clone)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    fn lock(&self) -> Result<MutexGuard<'_, Tables>, RepositoryError> {
        self.tables
            .lock()
            .map_err(|_| RepositoryError::Unavailable("store mutex poisoned".to_string()))
    }
}

impl UserRepository for MemoryStore {
    fn insert_user(
        &self,
        registration: Registration,
        created_at: DateTime<Utc>,
    ) -> Result<User, RepositoryError> {
        let mut tables = self.lock()?;
        if tables
            .users
            .values()
            .any(|user| user.email.eq_ignore_ascii_case(&registration.email))
        {
            return Err(RepositoryError::Conflict(USERS_EMAIL_KEY));
        }

        let id = UserId(next_id(&mut tables.user_sequence));
        let user = User {
            id,
            name: registration.name,
            email: registration.email,
            password: registration.password,
            role: registration.role,
            created_at,
        };
        tables.users.insert(id, user.clone());
        Ok(user)
    }

    fn fetch_user(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        Ok(self.lock()?.users.get(&id).cloned())
    }

    fn find_user_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let tables = self.lock()?;
        Ok(tables
            .users
            .values()
            .find(|user| user.email.eq_ignore_ascii_case(email))
            .cloned())
    }
}

impl JobRepository for MemoryStore {
    fn insert_job(
        &self,
        posting: JobPosting,
        posted_at: DateTime<Utc>,
    ) -> Result<Job, RepositoryError> {
        let mut tables = self.lock()?;
        let id = JobId(next_id(&mut tables.job_sequence));
        let job = Job {
            id,
            title: posting.title,
            description: posting.description,
            location: posting.location,
            company_name: posting.company_name,
            salary: posting.salary,
            job_type: posting.job_type,
            posted_by: posting.posted_by,
            posted_at,
        };
        tables.jobs.insert(id, job.clone());
        Ok(job)
    }

    fn fetch_job(&self, id: JobId) -> Result<Option<Job>, RepositoryError> {
        Ok(self.lock()?.jobs.get(&id).cloned())
    }

    fn list_jobs(&self) -> Result<Vec<Job>, RepositoryError> {
        Ok(self.lock()?.jobs.values().cloned().collect())
    }

    fn jobs_posted_by(&self, poster: UserId) -> Result<Vec<Job>, RepositoryError> {
        let tables = self.lock()?;
        Ok(tables
            .jobs
            .values()
            .filter(|job| job.posted_by == poster)
            .cloned()
            .collect())
    }

    fn delete_job(&self, id: JobId) -> Result<(), RepositoryError> {
        let mut tables = self.lock()?;
        if tables.jobs.remove(&id).is_none() {
            return Err(RepositoryError::NotFound);
        }
        tables
            .applications
            .retain(|_, application| application.job_id != id);
        Ok(())
    }
}

impl ApplicationRepository for MemoryStore {
    fn insert_application(
        &self,
        application: NewApplication,
    ) -> Result<JobApplication, RepositoryError> {
        let mut tables = self.lock()?;
        if tables.applications.values().any(|existing| {
            existing.job_id == application.job_id && existing.user_id == application.user_id
        }) {
            return Err(RepositoryError::Conflict(APPLICATIONS_JOB_USER_KEY));
        }

        let id = ApplicationId(next_id(&mut tables.application_sequence));
        let stored = JobApplication {
            id,
            job_id: application.job_id,
            user_id: application.user_id,
            status: application.status,
            applied_at: application.applied_at,
        };
        tables.applications.insert(id, stored.clone());
        Ok(stored)
    }

    fn fetch_application(
        &self,
        id: ApplicationId,
    ) -> Result<Option<JobApplication>, RepositoryError> {
        Ok(self.lock()?.applications.get(&id).cloned())
    }

    fn application_exists(&self, job: JobId, user: UserId) -> Result<bool, RepositoryError> {
        let tables = self.lock()?;
        Ok(tables
            .applications
            .values()
            .any(|application| application.job_id == job && application.user_id == user))
    }

    fn update_application(&self, application: JobApplication) -> Result<(), RepositoryError> {
        let mut tables = self.lock()?;
        match tables.applications.get_mut(&application.id) {
            Some(slot) => {
                *slot = application;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn joined_by_user(&self, user: UserId) -> Result<Vec<ApplicationDetails>, RepositoryError> {
        Ok(self
            .lock()?
            .join_where(|application| application.user_id == user))
    }

    fn joined_by_job(&self, job: JobId) -> Result<Vec<ApplicationDetails>, RepositoryError> {
        Ok(self
            .lock()?
            .join_where(|application| application.job_id == job))
    }
}
