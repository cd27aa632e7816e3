use axum::{
    extract::{Extension, Path},
    Json,
};

use crate::domains::posts::actions::{self as post_actions, CreatePostRequest};
use crate::domains::posts::models::{Post, PostChanges};
use crate::server::app::AxumAppState;
use crate::server::routes::error::{ApiJson, ApiResult};

pub async fn list_posts_handler(Extension(state): Extension<AxumAppState>) -> Json<Vec<Post>> {
    Json(post_actions::list_posts(&state.store).await)
}

pub async fn get_post_handler(
    Extension(state): Extension<AxumAppState>,
    Path(id): Path<String>,
) -> ApiResult<Post> {
    Ok(Json(post_actions::get_post(&id, &state.store).await?))
}

pub async fn create_post_handler(
    Extension(state): Extension<AxumAppState>,
    ApiJson(input): ApiJson<CreatePostRequest>,
) -> ApiResult<Post> {
    Ok(Json(post_actions::create_post(input, &state.store).await?))
}

pub async fn change_post_handler(
    Extension(state): Extension<AxumAppState>,
    Path(id): Path<String>,
    ApiJson(changes): ApiJson<PostChanges>,
) -> ApiResult<Post> {
    Ok(Json(post_actions::change_post(&id, changes, &state.store).await?))
}

pub async fn delete_post_handler(
    Extension(state): Extension<AxumAppState>,
    Path(id): Path<String>,
) -> ApiResult<Post> {
    Ok(Json(post_actions::delete_post(&id, &state.store).await?))
}
