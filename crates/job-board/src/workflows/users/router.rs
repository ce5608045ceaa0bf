use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use super::domain::{Credentials, Registration, UserId, UserView};
use super::repository::UserRepository;
use super::service::UserDirectory;
use crate::envelope::ApiResponse;
use crate::error::ServiceError;
use crate::extract::{ApiJson, ApiPath};
use crate::validation::{validate_credentials, validate_registration};

/// Login, signup and profile lookup. Both login/signup spellings the frontend has used are served.
pub fn user_router<R>(directory: Arc<UserDirectory<R>>) -> Router
where
    R: UserRepository + 'static,
{
    Router::new()
        .route("/users/login", post(login_handler::<R>))
        .route("/login", post(login_handler::<R>))
        .route("/users/signup", post(signup_handler::<R>))
        .route("/signup", post(signup_handler::<R>))
        .route("/users/:user_id", get(profile_handler::<R>))
        .with_state(directory)
}

pub(crate) async fn login_handler<R>(
    State(directory): State<Arc<UserDirectory<R>>>,
    ApiJson(credentials): ApiJson<Credentials>,
) -> Result<Json<ApiResponse<()>>, ServiceError>
where
    R: UserRepository + 'static,
{
    validate_credentials(&credentials)?;
    directory.authenticate(&credentials.email, &credentials.password)?;
    Ok(Json(ApiResponse::message("Login successful")))
}

pub(crate) async fn signup_handler<R>(
    State(directory): State<Arc<UserDirectory<R>>>,
    ApiJson(registration): ApiJson<Registration>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ServiceError>
where
    R: UserRepository + 'static,
{
    validate_registration(&registration)?;
    directory.register(registration)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::message("Signup successful")),
    ))
}

pub(crate) async fn profile_handler<R>(
    State(directory): State<Arc<UserDirectory<R>>>,
    ApiPath(user_id): ApiPath<u64>,
) -> Result<Json<ApiResponse<UserView>>, ServiceError>
where
    R: UserRepository + 'static,
{
    let user = directory.get(UserId(user_id))?;
    Ok(Json(ApiResponse::success(format!("User {user_id}"), user.view())))
}
