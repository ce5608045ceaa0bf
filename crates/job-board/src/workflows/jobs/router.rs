use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::domain::{Job, JobId, JobPosting};
use super::repository::JobRepository;
use super::service::JobCatalogue;
use crate::envelope::ApiResponse;
use crate::error::ServiceError;
use crate::extract::{ApiJson, ApiPath};
use crate::validation::validate_job_posting;
use crate::workflows::users::{UserId, UserRepository};

type Catalogue<J, U> = State<Arc<JobCatalogue<J, U>>>;

pub fn job_router<J, U>(catalogue: Arc<JobCatalogue<J, U>>) -> Router
where
    J: JobRepository + 'static,
    U: UserRepository + 'static,
{
    Router::new()
        .route(
            "/jobs",
            get(list_handler::<J, U>).post(post_handler::<J, U>),
        )
        .route(
            "/jobs/:job_id",
            get(get_handler::<J, U>).delete(delete_handler::<J, U>),
        )
        .route("/jobs/poster/:user_id", get(poster_handler::<J, U>))
        .with_state(catalogue)
}

pub(crate) async fn post_handler<J, U>(
    State(catalogue): Catalogue<J, U>,
    ApiJson(posting): ApiJson<JobPosting>,
) -> Result<(StatusCode, Json<ApiResponse<Job>>), ServiceError>
where
    J: JobRepository + 'static,
    U: UserRepository + 'static,
{
    validate_job_posting(&posting)?;
    let job = catalogue.post(posting)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Job posted", job)),
    ))
}

pub(crate) async fn list_handler<J, U>(
    State(catalogue): Catalogue<J, U>,
) -> Result<Json<ApiResponse<Vec<Job>>>, ServiceError>
where
    J: JobRepository + 'static,
    U: UserRepository + 'static,
{
    let jobs = catalogue.list()?;
    Ok(Json(ApiResponse::success("All jobs", jobs)))
}

pub(crate) async fn get_handler<J, U>(
    State(catalogue): Catalogue<J, U>,
    ApiPath(job_id): ApiPath<u64>,
) -> Result<Json<ApiResponse<Job>>, ServiceError>
where
    J: JobRepository + 'static,
    U: UserRepository + 'static,
{
    let job = catalogue.get(JobId(job_id))?;
    Ok(Json(ApiResponse::success(format!("Job {job_id}"), job)))
}

pub(crate) async fn poster_handler<J, U>(
    State(catalogue): Catalogue<J, U>,
    ApiPath(user_id): ApiPath<u64>,
) -> Result<Json<ApiResponse<Vec<Job>>>, ServiceError>
where
    J: JobRepository + 'static,
    U: UserRepository + 'static,
{
    let jobs = catalogue.list_by_poster(UserId(user_id))?;
    Ok(Json(ApiResponse::success(
        format!("Jobs posted by USER {user_id}"),
        jobs,
    )))
}

pub(crate) async fn delete_handler<J, U>(
    State(catalogue): Catalogue<J, U>,
    ApiPath(job_id): ApiPath<u64>,
) -> Result<Json<ApiResponse<()>>, ServiceError>
where
    J: JobRepository + 'static,
    U: UserRepository + 'static,
{
    catalogue.delete(JobId(job_id))?;
    Ok(Json(ApiResponse::message("Job deleted")))
}
