use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, patch, post},
    Router,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{board, health, ingredient, recipe, social, user},
    state::AppState,
};

/// Request body cap, sized for a handful of board images.
const MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    info(title = "foodthing API"),
    modifiers(&BearerAuth),
    paths(
        health::health,
        user::sign_up,
        user::log_in,
        user::get_me,
        user::change_password,
        user::find_id,
        user::withdraw,
        social::auth_url,
        social::callback,
        board::list_boards,
        board::create_board,
        board::get_board,
        board::update_board,
        board::delete_board,
        board::toggle_like,
        board::add_comment,
        board::list_comments,
        board::delete_comment,
        ingredient::create_ingredient,
        ingredient::get_ingredient_names,
        ingredient::get_ingredient_details,
        ingredient::get_categories,
        ingredient::get_alerts,
        ingredient::mark_alert_read,
        ingredient::get_ingredient,
        ingredient::delete_ingredient,
        recipe::suggest,
        recipe::cook,
        recipe::ingredient_cook,
        recipe::food_cook,
        recipe::save_recipe,
        recipe::get_saved_recipes,
        recipe::unsave_recipe,
        recipe::get_ranking,
    ),
    tags(
        (name = "health", description = "Liveness"),
        (name = "user", description = "Accounts and password login"),
        (name = "social", description = "Google, Naver and Kakao login"),
        (name = "board", description = "Community board"),
        (name = "ingredient", description = "Ingredient inventory and expiration alerts"),
        (name = "recipe", description = "AI recipes, saved recipes and ranking"),
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::health))
        .route("/users/sign-up", post(user::sign_up))
        .route("/users/log-in", post(user::log_in))
        .route("/users/me", get(user::get_me).delete(user::withdraw))
        .route("/users/password", patch(user::change_password))
        .route("/users/find-id", post(user::find_id))
        .route("/social/{provider}", get(social::auth_url))
        .route("/social/{provider}/callback", get(social::callback))
        .route("/board", post(board::create_board))
        .route("/board/list", get(board::list_boards))
        .route(
            "/board/{board_id}",
            get(board::get_board)
                .patch(board::update_board)
                .delete(board::delete_board),
        )
        .route("/board/{board_id}/like", post(board::toggle_like))
        .route("/board/{board_id}/comment", post(board::add_comment))
        .route("/board/{board_id}/comments", get(board::list_comments))
        .route("/board/comment/{comment_id}", delete(board::delete_comment))
        .route(
            "/ingredients",
            post(ingredient::create_ingredient)
                .get(ingredient::get_ingredient_names)
                .delete(ingredient::delete_ingredient),
        )
        .route("/ingredients/detail", get(ingredient::get_ingredient_details))
        .route("/ingredients/categories", get(ingredient::get_categories))
        .route("/ingredients/alerts", get(ingredient::get_alerts))
        .route(
            "/ingredients/alerts/{alert_id}/read",
            patch(ingredient::mark_alert_read),
        )
        .route("/ingredients/{ingredient_id}", get(ingredient::get_ingredient))
        .route("/recipe/suggest", get(recipe::suggest))
        .route("/recipe/cook", post(recipe::cook))
        .route("/recipe/ingredient-cook", post(recipe::ingredient_cook))
        .route("/recipe/food-cook", post(recipe::food_cook))
        .route(
            "/recipe/like",
            post(recipe::save_recipe).get(recipe::get_saved_recipes),
        )
        .route("/recipe/like/{recipe_id}", delete(recipe::unsave_recipe))
        .route("/recipe/ranking", get(recipe::get_ranking))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}
