use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};

use super::domain::{ApplicationId, ApplicationRequest, ApplicationStatus, JobApplication};
use super::repository::{ApplicationRepository, ApplicationView};
use super::service::ApplicationWorkflow;
use crate::envelope::ApiResponse;
use crate::error::ServiceError;
use crate::extract::{ApiJson, ApiPath};
use crate::workflows::jobs::{JobId, JobRepository};
use crate::workflows::users::{UserId, UserRepository};

type Workflow<A, J, U> = State<Arc<ApplicationWorkflow<A, J, U>>>;

/// Router builder exposing the application endpoints under `/app`.
pub fn application_router<A, J, U>(workflow: Arc<ApplicationWorkflow<A, J, U>>) -> Router
where
    A: ApplicationRepository + 'static,
    J: JobRepository + 'static,
    U: UserRepository + 'static,
{
    Router::new()
        .route("/app", post(apply_handler::<A, J, U>))
        .route("/app/:application_id", get(get_handler::<A, J, U>))
        .route("/app/user/:user_id", get(by_user_handler::<A, J, U>))
        .route("/app/job/:job_id", get(by_job_handler::<A, J, U>))
        .route(
            "/app/status/:application_id",
            put(status_handler::<A, J, U>),
        )
        .with_state(workflow)
}

pub(crate) async fn apply_handler<A, J, U>(
    State(workflow): Workflow<A, J, U>,
    ApiJson(request): ApiJson<ApplicationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ServiceError>
where
    A: ApplicationRepository + 'static,
    J: JobRepository + 'static,
    U: UserRepository + 'static,
{
    let receipt = workflow.apply(request)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::message(receipt.message())),
    ))
}

pub(crate) async fn get_handler<A, J, U>(
    State(workflow): Workflow<A, J, U>,
    ApiPath(application_id): ApiPath<u64>,
) -> Result<Json<ApiResponse<JobApplication>>, ServiceError>
where
    A: ApplicationRepository + 'static,
    J: JobRepository + 'static,
    U: UserRepository + 'static,
{
    let application = workflow.get(ApplicationId(application_id))?;
    Ok(Json(ApiResponse::success(
        format!("Application {application_id}"),
        application,
    )))
}

pub(crate) async fn by_user_handler<A, J, U>(
    State(workflow): Workflow<A, J, U>,
    ApiPath(user_id): ApiPath<u64>,
) -> Result<Json<ApiResponse<Vec<ApplicationView>>>, ServiceError>
where
    A: ApplicationRepository + 'static,
    J: JobRepository + 'static,
    U: UserRepository + 'static,
{
    let views = workflow.list_by_user(UserId(user_id))?;
    Ok(Json(ApiResponse::success(
        format!("Applications by USER {user_id}"),
        views,
    )))
}

pub(crate) async fn by_job_handler<A, J, U>(
    State(workflow): Workflow<A, J, U>,
    ApiPath(job_id): ApiPath<u64>,
) -> Result<Json<ApiResponse<Vec<ApplicationView>>>, ServiceError>
where
    A: ApplicationRepository + 'static,
    J: JobRepository + 'static,
    U: UserRepository + 'static,
{
    let views = workflow.list_by_job(JobId(job_id))?;
    Ok(Json(ApiResponse::success(
        format!("Applications for JOB {job_id}"),
        views,
    )))
}

/// The body is a bare JSON string such as `"SHORTLISTED"`.
pub(crate) async fn status_handler<A, J, U>(
    State(workflow): Workflow<A, J, U>,
    ApiPath(application_id): ApiPath<u64>,
    ApiJson(status): ApiJson<ApplicationStatus>,
) -> Result<Json<ApiResponse<()>>, ServiceError>
where
    A: ApplicationRepository + 'static,
    J: JobRepository + 'static,
    U: UserRepository + 'static,
{
    workflow.update_status(ApplicationId(application_id), status)?;
    Ok(Json(ApiResponse::message("Application status updated")))
}
