use axum::{
    extract::{
        multipart::{Field, MultipartError},
        rejection::{FormRejection, JsonRejection, PathRejection},
        Multipart, Path, Query, State,
    },
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Form, Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        board::{
            BoardDetailDto, BoardListItemDto, BoardMutationDto, CommentDto, CreateCommentForm,
            LikeToggleDto, UpdateBoardDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::board::{BoardSearchParams, ImageUpload, UpdateBoardParams},
        service::board::BoardService,
        state::AppState,
    },
};

pub static BOARD_TAG: &str = "board";

const DEFAULT_LIMIT: u64 = 10;

#[derive(Deserialize)]
pub struct BoardListQuery {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
    pub title: Option<String>,
    pub nickname: Option<String>,
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

fn multipart_error(e: MultipartError) -> AppError {
    AppError::Validation(format!("Invalid multipart body: {}", e.body_text()))
}

async fn text_field(field: Field<'_>) -> Result<String, AppError> {
    field.text().await.map_err(multipart_error)
}

#[utoipa::path(
    get,
    path = "/board/list",
    tag = BOARD_TAG,
    params(
        ("skip" = Option<u64>, Query, description = "Posts to skip (default: 0)"),
        ("limit" = Option<u64>, Query, description = "Page size, 1 to 100 (default: 10)"),
        ("title" = Option<String>, Query, description = "Title substring filter"),
        ("nickname" = Option<String>, Query, description = "Author nickname substring filter")
    ),
    responses(
        (status = 200, description = "Visible posts, newest first", body = Vec<BoardListItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_boards(
    State(state): State<AppState>,
    Query(query): Query<BoardListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let params = BoardSearchParams::new(query.skip, query.limit, query.title, query.nickname);

    let boards = BoardService::new(&state.db, &state.storage)
        .list(params)
        .await?;

    let dto: Vec<BoardListItemDto> = boards.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// POST /board - Create a post with optional images
///
/// Reads the multipart fields `title`, `content` and any number of `images` (or `images[]`)
/// files. Empty file parts, as sent by browsers for an untouched file input, are skipped.
///
/// # Returns
/// - `201 Created`: `{message, board_id}`
/// - `401 Unauthorized`: Not logged in
/// - `422 Unprocessable Entity`: Missing or invalid title or content
/// - `500 Internal Server Error`: Image upload failed
#[utoipa::path(
    post,
    path = "/board",
    tag = BOARD_TAG,
    security(("bearer" = [])),
    request_body(
        content_type = "multipart/form-data",
        description = "Fields `title`, `content` and repeated `images` files"
    ),
    responses(
        (status = 201, description = "Post created", body = BoardMutationDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 422, description = "Invalid post data", body = ErrorDto),
        (status = 500, description = "Image storage failure", body = ErrorDto)
    ),
)]
pub async fn create_board(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config, &headers)
        .require()
        .await?;

    let mut title = None;
    let mut content = None;
    let mut images = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_string);

        match name.as_deref() {
            Some("title") => title = Some(text_field(field).await?),
            Some("content") => content = Some(text_field(field).await?),
            Some("images") | Some("images[]") => {
                let filename = field.file_name().unwrap_or("image").to_string();
                let bytes = field.bytes().await.map_err(multipart_error)?;

                if !bytes.is_empty() {
                    images.push(ImageUpload { filename, bytes });
                }
            }
            _ => {}
        }
    }

    let title = title.ok_or_else(|| AppError::Validation("title is required".to_string()))?;
    let content =
        content.ok_or_else(|| AppError::Validation("content is required".to_string()))?;

    let board = BoardService::new(&state.db, &state.storage)
        .create(&user, title, content, images)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BoardMutationDto {
            message: "Board created".to_string(),
            board_id: board.id,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/board/{board_id}",
    tag = BOARD_TAG,
    params(
        ("board_id" = i32, Path, description = "Board ID")
    ),
    responses(
        (status = 200, description = "Post with images and author", body = BoardDetailDto),
        (status = 404, description = "Post not found", body = ErrorDto)
    ),
)]
pub async fn get_board(
    State(state): State<AppState>,
    board_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(board_id) = board_id?;

    let detail = BoardService::new(&state.db, &state.storage)
        .get_detail(board_id)
        .await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/board/{board_id}",
    tag = BOARD_TAG,
    security(("bearer" = [])),
    params(
        ("board_id" = i32, Path, description = "Board ID")
    ),
    request_body = UpdateBoardDto,
    responses(
        (status = 200, description = "Post updated", body = BoardMutationDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not the author", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 422, description = "Invalid post data", body = ErrorDto)
    ),
)]
pub async fn update_board(
    State(state): State<AppState>,
    headers: HeaderMap,
    board_id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateBoardDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config, &headers)
        .require()
        .await?;
    let Path(board_id) = board_id?;
    let Json(payload) = payload?;

    let board = BoardService::new(&state.db, &state.storage)
        .update(&user, board_id, UpdateBoardParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(BoardMutationDto {
            message: "Board updated".to_string(),
            board_id: board.id,
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/board/{board_id}",
    tag = BOARD_TAG,
    security(("bearer" = [])),
    params(
        ("board_id" = i32, Path, description = "Board ID")
    ),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not the author", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto)
    ),
)]
pub async fn delete_board(
    State(state): State<AppState>,
    headers: HeaderMap,
    board_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config, &headers)
        .require()
        .await?;
    let Path(board_id) = board_id?;

    BoardService::new(&state.db, &state.storage)
        .delete(&user, board_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /board/{board_id}/like - Like the post, or undo an existing like
#[utoipa::path(
    post,
    path = "/board/{board_id}/like",
    tag = BOARD_TAG,
    security(("bearer" = [])),
    params(
        ("board_id" = i32, Path, description = "Board ID")
    ),
    responses(
        (status = 201, description = "Like toggled", body = LikeToggleDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto)
    ),
)]
pub async fn toggle_like(
    State(state): State<AppState>,
    headers: HeaderMap,
    board_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config, &headers)
        .require()
        .await?;
    let Path(board_id) = board_id?;

    let toggle = BoardService::new(&state.db, &state.storage)
        .toggle_like(&user, board_id)
        .await?;

    Ok((StatusCode::CREATED, Json(toggle.into_dto())))
}

#[utoipa::path(
    post,
    path = "/board/{board_id}/comment",
    tag = BOARD_TAG,
    security(("bearer" = [])),
    params(
        ("board_id" = i32, Path, description = "Board ID")
    ),
    request_body(content = CreateCommentForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Comment added", body = CommentDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 422, description = "Comment empty or too long", body = ErrorDto)
    ),
)]
pub async fn add_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    board_id: Result<Path<i32>, PathRejection>,
    payload: Result<Form<CreateCommentForm>, FormRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config, &headers)
        .require()
        .await?;
    let Path(board_id) = board_id?;
    let Form(payload) = payload?;

    let comment = BoardService::new(&state.db, &state.storage)
        .add_comment(&user, board_id, payload.comment)
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

#[utoipa::path(
    get,
    path = "/board/{board_id}/comments",
    tag = BOARD_TAG,
    params(
        ("board_id" = i32, Path, description = "Board ID")
    ),
    responses(
        (status = 200, description = "Visible comments, oldest first", body = Vec<CommentDto>),
        (status = 404, description = "Post not found", body = ErrorDto)
    ),
)]
pub async fn list_comments(
    State(state): State<AppState>,
    board_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(board_id) = board_id?;

    let comments = BoardService::new(&state.db, &state.storage)
        .list_comments(board_id)
        .await?;

    let dto: Vec<CommentDto> = comments.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    delete,
    path = "/board/comment/{comment_id}",
    tag = BOARD_TAG,
    security(("bearer" = [])),
    params(
        ("comment_id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not the author", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    comment_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config, &headers)
        .require()
        .await?;
    let Path(comment_id) = comment_id?;

    BoardService::new(&state.db, &state.storage)
        .delete_comment(&user, comment_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
