use axum::{
    extract::{Extension, Path},
    Json,
};
use serde::Deserialize;

use crate::domains::users::actions as user_actions;
use crate::domains::users::models::{NewUser, User, UserChanges};
use crate::server::app::AxumAppState;
use crate::server::routes::error::{ApiJson, ApiResult};

/// Body of the subscription endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SubscriptionBody {
    pub user_id: String,
}

pub async fn list_users_handler(Extension(state): Extension<AxumAppState>) -> Json<Vec<User>> {
    Json(user_actions::list_users(&state.store).await)
}

pub async fn get_user_handler(
    Extension(state): Extension<AxumAppState>,
    Path(id): Path<String>,
) -> ApiResult<User> {
    Ok(Json(user_actions::get_user(&id, &state.store).await?))
}

pub async fn create_user_handler(
    Extension(state): Extension<AxumAppState>,
    ApiJson(input): ApiJson<NewUser>,
) -> Json<User> {
    Json(user_actions::create_user(input, &state.store).await)
}

pub async fn change_user_handler(
    Extension(state): Extension<AxumAppState>,
    Path(id): Path<String>,
    ApiJson(changes): ApiJson<UserChanges>,
) -> ApiResult<User> {
    Ok(Json(user_actions::change_user(&id, changes, &state.store).await?))
}

pub async fn delete_user_handler(
    Extension(state): Extension<AxumAppState>,
    Path(id): Path<String>,
) -> ApiResult<User> {
    Ok(Json(user_actions::delete_user(&id, &state.store).await?))
}

/// `id` subscribes to `userId`. Responds with the updated publisher.
pub async fn subscribe_to_handler(
    Extension(state): Extension<AxumAppState>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<SubscriptionBody>,
) -> ApiResult<User> {
    let subscription = user_actions::subscribe_to(&id, &body.user_id, &state.store).await?;
    Ok(Json(subscription.publisher))
}

pub async fn unsubscribe_from_handler(
    Extension(state): Extension<AxumAppState>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<SubscriptionBody>,
) -> ApiResult<User> {
    let subscription = user_actions::unsubscribe_from(&id, &body.user_id, &state.store).await?;
    Ok(Json(subscription.publisher))
}
