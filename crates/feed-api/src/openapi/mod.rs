//! OpenAPI document served by the Swagger UI

use utoipa::OpenApi;

use feed_service::dto::{
    ArtifactResponse, CreateArtifactRequest, CreatePostRequest, HealthChecks, HealthResponse,
    PostPageResponse, PostResponse, ReadinessResponse, UploadAuthResponse, WelcomeResponse,
};

use crate::handlers::{health, media, posts, root};
use crate::response::{ErrorBody, ErrorDetail};

#[derive(OpenApi)]
#[openapi(
    info(title = "Feed API", description = "Posts with media artifacts hosted on ImageKit"),
    paths(
        root::welcome,
        posts::list_posts,
        posts::get_post,
        posts::create_post,
        media::upload_auth_params,
        media::signed_url,
        health::health_check,
        health::readiness_check,
    ),
    components(schemas(
        WelcomeResponse,
        CreatePostRequest,
        CreateArtifactRequest,
        PostResponse,
        ArtifactResponse,
        PostPageResponse,
        UploadAuthResponse,
        HealthResponse,
        ReadinessResponse,
        HealthChecks,
        ErrorBody,
        ErrorDetail,
    )),
    tags(
        (name = "posts", description = "Feed and post creation"),
        (name = "media", description = "Media host credentials and signed URLs"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;
