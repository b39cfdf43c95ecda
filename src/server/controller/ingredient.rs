use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        ingredient::{
            CategoryDto, CreateIngredientDto, ExpirationAlertDto, IngredientDto,
            IngredientListDto, IngredientNamesDto,
        },
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::ingredient::IngredientService,
        state::AppState,
    },
};

pub static INGREDIENT_TAG: &str = "ingredient";

#[derive(Deserialize)]
pub struct DeleteIngredientQuery {
    pub ingredient_id: i32,
}

/// POST /ingredients - Register an ingredient
///
/// The expiration date is derived from the category shelf life and an expiration alert is
/// scheduled alongside the ingredient.
///
/// # Returns
/// - `201 Created`: The stored ingredient with its d-day
/// - `404 Not Found`: Unknown category
/// - `422 Unprocessable Entity`: Name empty or too long
#[utoipa::path(
    post,
    path = "/ingredients",
    tag = INGREDIENT_TAG,
    security(("bearer" = [])),
    request_body = CreateIngredientDto,
    responses(
        (status = 201, description = "Ingredient registered", body = IngredientDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 422, description = "Invalid ingredient data", body = ErrorDto)
    ),
)]
pub async fn create_ingredient(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateIngredientDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config, &headers)
        .require()
        .await?;
    let Json(payload) = payload?;

    let ingredient = IngredientService::new(&state.db, state.config.expiration_alert_days)
        .create(user.id, payload)
        .await?;

    let today = Utc::now().date_naive();

    Ok((StatusCode::CREATED, Json(ingredient.into_dto(today))))
}

#[utoipa::path(
    get,
    path = "/ingredients",
    tag = INGREDIENT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Names of the caller's ingredients", body = IngredientNamesDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_ingredient_names(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config, &headers)
        .require()
        .await?;

    let ingredient_list = IngredientService::new(&state.db, state.config.expiration_alert_days)
        .names(user.id)
        .await?;

    Ok((StatusCode::OK, Json(IngredientNamesDto { ingredient_list })))
}

#[utoipa::path(
    get,
    path = "/ingredients/detail",
    tag = INGREDIENT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Caller's ingredients, soonest expiration first", body = IngredientListDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_ingredient_details(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config, &headers)
        .require()
        .await?;

    let ingredients = IngredientService::new(&state.db, state.config.expiration_alert_days)
        .list(user.id)
        .await?;

    let today = Utc::now().date_naive();
    let ingredients = ingredients
        .into_iter()
        .map(|ingredient| ingredient.into_dto(today))
        .collect();

    Ok((StatusCode::OK, Json(IngredientListDto { ingredients })))
}

#[utoipa::path(
    get,
    path = "/ingredients/categories",
    tag = INGREDIENT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All ingredient categories", body = Vec<CategoryDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_categories(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.config, &headers)
        .require()
        .await?;

    let categories = IngredientService::new(&state.db, state.config.expiration_alert_days)
        .categories()
        .await?;

    let dto: Vec<CategoryDto> = categories.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// GET /ingredients/alerts - Get the caller's due, unread expiration alerts
#[utoipa::path(
    get,
    path = "/ingredients/alerts",
    tag = INGREDIENT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Alerts due today or earlier", body = Vec<ExpirationAlertDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_alerts(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config, &headers)
        .require()
        .await?;

    let today = Utc::now().date_naive();
    let alerts = IngredientService::new(&state.db, state.config.expiration_alert_days)
        .due_alerts(user.id, today)
        .await?;

    let dto: Vec<ExpirationAlertDto> = alerts.into_iter().map(|a| a.into_dto(today)).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    patch,
    path = "/ingredients/alerts/{alert_id}/read",
    tag = INGREDIENT_TAG,
    security(("bearer" = [])),
    params(
        ("alert_id" = i32, Path, description = "Alert ID")
    ),
    responses(
        (status = 204, description = "Alert marked as read"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Alert not found", body = ErrorDto)
    ),
)]
pub async fn mark_alert_read(
    State(state): State<AppState>,
    headers: HeaderMap,
    alert_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config, &headers)
        .require()
        .await?;
    let Path(alert_id) = alert_id?;

    IngredientService::new(&state.db, state.config.expiration_alert_days)
        .mark_alert_read(user.id, alert_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/ingredients/{ingredient_id}",
    tag = INGREDIENT_TAG,
    security(("bearer" = [])),
    params(
        ("ingredient_id" = i32, Path, description = "Ingredient ID")
    ),
    responses(
        (status = 200, description = "One of the caller's ingredients", body = IngredientDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Ingredient not found", body = ErrorDto)
    ),
)]
pub async fn get_ingredient(
    State(state): State<AppState>,
    headers: HeaderMap,
    ingredient_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config, &headers)
        .require()
        .await?;
    let Path(ingredient_id) = ingredient_id?;

    let ingredient = IngredientService::new(&state.db, state.config.expiration_alert_days)
        .get(user.id, ingredient_id)
        .await?;

    let today = Utc::now().date_naive();

    Ok((StatusCode::OK, Json(ingredient.into_dto(today))))
}

/// DELETE /ingredients?ingredient_id= - Remove an ingredient and its alerts
#[utoipa::path(
    delete,
    path = "/ingredients",
    tag = INGREDIENT_TAG,
    security(("bearer" = [])),
    params(
        ("ingredient_id" = i32, Query, description = "Ingredient ID")
    ),
    responses(
        (status = 204, description = "Ingredient deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Ingredient not found", body = ErrorDto)
    ),
)]
pub async fn delete_ingredient(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<DeleteIngredientQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let user = AuthGuard::new(&state.db, &state.config, &headers)
        .require()
        .await?;

    IngredientService::new(&state.db, state.config.expiration_alert_days)
        .delete(user.id, query.ingredient_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
