use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{ChangePasswordDto, FindIdDto, FoundIdDto, LogInDto, SignUpDto, TokenDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::{ChangePasswordParams, FindIdParams, SignUpParams},
        service::user::UserService,
        state::AppState,
    },
};

pub static USER_TAG: &str = "user";

/// POST /users/sign-up - Register a new account
///
/// # Returns
/// - `201 Created`: The created user
/// - `400 Bad Request`: Password and confirmation differ
/// - `409 Conflict`: Email, nickname or phone number already registered
/// - `422 Unprocessable Entity`: A field failed validation
#[utoipa::path(
    post,
    path = "/users/sign-up",
    tag = USER_TAG,
    request_body = SignUpDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Password confirmation mismatch", body = ErrorDto),
        (status = 409, description = "Email, nickname or phone number in use", body = ErrorDto),
        (status = 422, description = "Invalid sign-up data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_up(
    State(state): State<AppState>,
    payload: Result<Json<SignUpDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let user = UserService::new(&state.db, &state.config)
        .sign_up(SignUpParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// POST /users/log-in - Exchange email and password for an access token
#[utoipa::path(
    post,
    path = "/users/log-in",
    tag = USER_TAG,
    request_body = LogInDto,
    responses(
        (status = 200, description = "Logged in", body = TokenDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn log_in(
    State(state): State<AppState>,
    payload: Result<Json<LogInDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let access_token = UserService::new(&state.db, &state.config)
        .log_in(&payload.email, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(TokenDto { access_token })))
}

/// GET /users/me - Get the authenticated user
#[utoipa::path(
    get,
    path = "/users/me",
    tag = USER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 404, description = "Token subject has no account", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config, &headers)
        .require()
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// PATCH /users/password - Change the authenticated user's password
///
/// # Returns
/// - `204 No Content`: Password changed
/// - `400 Bad Request`: Confirmation mismatch, unchanged or out of range password
/// - `401 Unauthorized`: Not logged in or current password wrong
#[utoipa::path(
    patch,
    path = "/users/password",
    tag = USER_TAG,
    security(("bearer" = [])),
    request_body = ChangePasswordDto,
    responses(
        (status = 204, description = "Password changed"),
        (status = 400, description = "New password rejected", body = ErrorDto),
        (status = 401, description = "Not authenticated or current password wrong", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ChangePasswordDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config, &headers)
        .require()
        .await?;
    let Json(payload) = payload?;

    UserService::new(&state.db, &state.config)
        .change_password(&user, ChangePasswordParams::from_dto(payload))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /users/find-id - Look up the email registered for a name, birth date and phone
#[utoipa::path(
    post,
    path = "/users/find-id",
    tag = USER_TAG,
    request_body = FindIdDto,
    responses(
        (status = 200, description = "Registered email", body = FoundIdDto),
        (status = 404, description = "No matching account", body = ErrorDto),
        (status = 422, description = "Invalid phone number", body = ErrorDto)
    ),
)]
pub async fn find_id(
    State(state): State<AppState>,
    payload: Result<Json<FindIdDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let email = UserService::new(&state.db, &state.config)
        .find_id(FindIdParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(FoundIdDto { email })))
}

/// DELETE /users/me - Withdraw the authenticated account
///
/// The account is deactivated rather than removed; its token stops working immediately.
#[utoipa::path(
    delete,
    path = "/users/me",
    tag = USER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Account withdrawn"),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn withdraw(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config, &headers)
        .require()
        .await?;

    UserService::new(&state.db, &state.config)
        .withdraw(&user)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
