use job_board::error::ServiceError;
use job_board::store::MemoryStore;
use job_board::workflows::applications::ApplicationWorkflow;
use job_board::workflows::jobs::{Job, JobCatalogue, JobPosting, JobType};
use job_board::workflows::users::{Registration, Role, User, UserDirectory};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Services wired once at startup and shared with every handler.
#[derive(Clone)]
pub(crate) struct BoardServices {
    pub(crate) directory: Arc<UserDirectory<MemoryStore>>,
    pub(crate) catalogue: Arc<JobCatalogue<MemoryStore, MemoryStore>>,
    pub(crate) workflow: Arc<ApplicationWorkflow<MemoryStore, MemoryStore, MemoryStore>>,
}

impl BoardServices {
    pub(crate) fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::default());
        Self {
            directory: Arc::new(UserDirectory::new(store.clone())),
            catalogue: Arc::new(JobCatalogue::new(store.clone(), store.clone())),
            workflow: Arc::new(ApplicationWorkflow::new(
                store.clone(),
                store.clone(),
                store,
            )),
        }
    }
}

/// Rows inserted by `--seed-demo` / `APP_SEED_DEMO`.
pub(crate) struct DemoSeed {
    pub(crate) employer: User,
    pub(crate) seeker: User,
    pub(crate) job: Job,
}

pub(crate) fn demo_employer() -> Registration {
    Registration {
        name: "Bob".to_string(),
        email: "bob@example.com".to_string(),
        password: "hunter22".to_string(),
        role: Role::Employer,
    }
}

pub(crate) fn demo_seeker() -> Registration {
    Registration {
        name: "Alice".to_string(),
        email: "a@x.com".to_string(),
        password: "secret1".to_string(),
        role: Role::Jobseeker,
    }
}

pub(crate) fn seed_demo_data(services: &BoardServices) -> Result<DemoSeed, ServiceError> {
    let employer = services.directory.register(demo_employer())?;
    let seeker = services.directory.register(demo_seeker())?;
    let job = services.catalogue.post(JobPosting {
        posted_by: employer.id,
        title: "Backend Engineer".to_string(),
        description: "Build and run the job board API".to_string(),
        location: "Remote".to_string(),
        company_name: "Acme Staffing".to_string(),
        salary: Some("$120k".to_string()),
        job_type: JobType::FullTime,
    })?;

    info!(employer = %employer.id, seeker = %seeker.id, job = %job.id, "demo data seeded");
    Ok(DemoSeed {
        employer,
        seeker,
        job,
    })
}
