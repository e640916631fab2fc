//! Post handlers
//!
//! Endpoints for the paginated feed and post creation.

use axum::{extract::State, Json};
use feed_service::dto::{CreatePostRequest, PostListQuery, PostPageResponse, PostResponse};
use feed_service::PostService;

use crate::extractors::{ApiQuery, PublicIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, ErrorBody};
use crate::state::AppState;

/// List posts, newest first
///
/// GET /posts?page=&page_size=
#[utoipa::path(
    get,
    path = "/posts",
    tag = "posts",
    params(PostListQuery),
    responses(
        (status = 200, description = "One page of the feed", body = PostPageResponse),
        (status = 400, description = "Invalid page size", body = ErrorBody),
        (status = 404, description = "Page not found", body = ErrorBody)
    )
)]
pub async fn list_posts(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<PostListQuery>,
) -> ApiResult<Json<PostPageResponse>> {
    let service = PostService::new(state.service_context());
    let page = service.list_posts(query).await?;
    Ok(Json(page))
}

/// Get a post by public id
///
/// GET /posts/{public_id}
#[utoipa::path(
    get,
    path = "/posts/{public_id}",
    tag = "posts",
    params(("public_id" = String, Path, description = "Public id of the post")),
    responses(
        (status = 200, description = "The post with signed artifact URLs", body = PostResponse),
        (status = 400, description = "Malformed public id", body = ErrorBody),
        (status = 404, description = "Post not found", body = ErrorBody)
    )
)]
pub async fn get_post(
    State(state): State<AppState>,
    PublicIdPath(public_id): PublicIdPath,
) -> ApiResult<Json<PostResponse>> {
    let service = PostService::new(state.service_context());
    let post = service.get_post(public_id).await?;
    Ok(Json(post))
}

/// Create a post with optional artifacts
///
/// POST /posts
#[utoipa::path(
    post,
    path = "/posts",
    tag = "posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = PostResponse),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 500, description = "Post could not be stored", body = ErrorBody)
    )
)]
pub async fn create_post(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Created<Json<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let post = service.create_post(request).await?;
    Ok(Created(Json(post)))
}
