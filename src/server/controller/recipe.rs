use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        recipe::{
            ChatDto, CookDto, FoodRankingDto, SaveRecipeDto, SavedRecipeDto, SavedRecipeItemDto,
        },
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::recipe::RecipeService,
        state::AppState,
    },
};

pub static RECIPE_TAG: &str = "recipe";

const DEFAULT_RANKING_LIMIT: u64 = 10;

#[derive(Deserialize)]
pub struct RankingQuery {
    #[serde(default = "default_ranking_limit")]
    pub limit: u64,
}

fn default_ranking_limit() -> u64 {
    DEFAULT_RANKING_LIMIT
}

/// GET /recipe/suggest - Suggest dishes from the caller's ingredients
///
/// # Returns
/// - `200 OK`: Model reply, normally `{recipes: [...]}` tagged with `_ai_provider`
/// - `400 Bad Request`: The caller has no ingredients registered
/// - `502 Bad Gateway`: Model returned nothing or invalid JSON
/// - `503 Service Unavailable`: No model reachable
#[utoipa::path(
    get,
    path = "/recipe/suggest",
    tag = RECIPE_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Suggested dishes", body = Object),
        (status = 400, description = "No ingredients registered", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 502, description = "Unusable model reply", body = ErrorDto),
        (status = 503, description = "Model unavailable", body = ErrorDto)
    ),
)]
pub async fn suggest(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config, &headers)
        .require()
        .await?;

    let reply = RecipeService::new(&state.db, &state.http_client, &state.config.ai)
        .suggest(user.id)
        .await?;

    Ok((StatusCode::OK, Json(reply)))
}

#[utoipa::path(
    post,
    path = "/recipe/cook",
    tag = RECIPE_TAG,
    security(("bearer" = [])),
    request_body = CookDto,
    responses(
        (status = 200, description = "Detailed recipe", body = Object),
        (status = 400, description = "Missing dish or malformed ingredient list", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 502, description = "Unusable model reply", body = ErrorDto),
        (status = 503, description = "Model unavailable", body = ErrorDto)
    ),
)]
pub async fn cook(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CookDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.config, &headers)
        .require()
        .await?;
    let Json(payload) = payload?;

    let reply = RecipeService::new(&state.db, &state.http_client, &state.config.ai)
        .cook(payload)
        .await?;

    Ok((StatusCode::OK, Json(reply)))
}

/// POST /recipe/ingredient-cook - Quick recipe from a free-text list of ingredients
#[utoipa::path(
    post,
    path = "/recipe/ingredient-cook",
    tag = RECIPE_TAG,
    security(("bearer" = [])),
    request_body = ChatDto,
    responses(
        (status = 200, description = "Quick recipe", body = Object),
        (status = 400, description = "Chat empty or too long", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 502, description = "Unusable model reply", body = ErrorDto),
        (status = 503, description = "Model unavailable", body = ErrorDto)
    ),
)]
pub async fn ingredient_cook(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ChatDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.config, &headers)
        .require()
        .await?;
    let Json(payload) = payload?;

    let reply = RecipeService::new(&state.db, &state.http_client, &state.config.ai)
        .ingredient_cook(&payload.chat)
        .await?;

    Ok((StatusCode::OK, Json(reply)))
}

/// POST /recipe/food-cook - Recipe for a named dish
///
/// A successful reply counts towards the dish popularity ranking.
#[utoipa::path(
    post,
    path = "/recipe/food-cook",
    tag = RECIPE_TAG,
    security(("bearer" = [])),
    request_body = ChatDto,
    responses(
        (status = 200, description = "Recipe for the dish", body = Object),
        (status = 400, description = "Chat empty or too long", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 502, description = "Unusable model reply", body = ErrorDto),
        (status = 503, description = "Model unavailable", body = ErrorDto)
    ),
)]
pub async fn food_cook(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ChatDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.config, &headers)
        .require()
        .await?;
    let Json(payload) = payload?;

    let reply = RecipeService::new(&state.db, &state.http_client, &state.config.ai)
        .food_cook(&payload.chat)
        .await?;

    Ok((StatusCode::OK, Json(reply)))
}

#[utoipa::path(
    post,
    path = "/recipe/like",
    tag = RECIPE_TAG,
    security(("bearer" = [])),
    request_body = SaveRecipeDto,
    responses(
        (status = 201, description = "Recipe saved", body = SavedRecipeDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 422, description = "Recipe is not a JSON object", body = ErrorDto)
    ),
)]
pub async fn save_recipe(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<SaveRecipeDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config, &headers)
        .require()
        .await?;
    let Json(payload) = payload?;

    let saved = RecipeService::new(&state.db, &state.http_client, &state.config.ai)
        .save(user.id, payload.recipe)
        .await?;

    Ok((StatusCode::CREATED, Json(saved.into_dto())))
}

#[utoipa::path(
    get,
    path = "/recipe/like",
    tag = RECIPE_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Saved recipes, newest first", body = Vec<SavedRecipeItemDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_saved_recipes(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config, &headers)
        .require()
        .await?;

    let saved = RecipeService::new(&state.db, &state.http_client, &state.config.ai)
        .saved(user.id)
        .await?;

    let dto: Vec<SavedRecipeItemDto> = saved.into_iter().map(|r| r.into_item_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    delete,
    path = "/recipe/like/{recipe_id}",
    tag = RECIPE_TAG,
    security(("bearer" = [])),
    params(
        ("recipe_id" = i32, Path, description = "Saved recipe ID")
    ),
    responses(
        (status = 204, description = "Recipe removed from saved list"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Saved recipe not found", body = ErrorDto)
    ),
)]
pub async fn unsave_recipe(
    State(state): State<AppState>,
    headers: HeaderMap,
    recipe_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config, &headers)
        .require()
        .await?;
    let Path(recipe_id) = recipe_id?;

    RecipeService::new(&state.db, &state.http_client, &state.config.ai)
        .unsave(user.id, recipe_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /recipe/ranking - Most requested dishes
///
/// Public endpoint, no token required.
#[utoipa::path(
    get,
    path = "/recipe/ranking",
    tag = RECIPE_TAG,
    params(
        ("limit" = Option<u64>, Query, description = "Entries to return, 1 to 100 (default: 10)")
    ),
    responses(
        (status = 200, description = "Dishes by request count, highest first", body = Vec<FoodRankingDto>)
    ),
)]
pub async fn get_ranking(
    State(state): State<AppState>,
    query: Result<Query<RankingQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;

    let ranking = RecipeService::new(&state.db, &state.http_client, &state.config.ai)
        .ranking(query.limit)
        .await?;

    let dto: Vec<FoodRankingDto> = ranking.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}
