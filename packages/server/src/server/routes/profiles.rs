use axum::{
    extract::{Extension, Path},
    Json,
};

use crate::domains::profiles::actions::{
    self as profile_actions, ChangeProfileRequest, CreateProfileRequest,
};
use crate::domains::profiles::models::Profile;
use crate::server::app::AxumAppState;
use crate::server::routes::error::{ApiJson, ApiResult};

pub async fn list_profiles_handler(
    Extension(state): Extension<AxumAppState>,
) -> Json<Vec<Profile>> {
    Json(profile_actions::list_profiles(&state.store).await)
}

pub async fn get_profile_handler(
    Extension(state): Extension<AxumAppState>,
    Path(id): Path<String>,
) -> ApiResult<Profile> {
    Ok(Json(profile_actions::get_profile(&id, &state.store).await?))
}

pub async fn create_profile_handler(
    Extension(state): Extension<AxumAppState>,
    ApiJson(input): ApiJson<CreateProfileRequest>,
) -> ApiResult<Profile> {
    Ok(Json(profile_actions::create_profile(input, &state.store).await?))
}

pub async fn change_profile_handler(
    Extension(state): Extension<AxumAppState>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<ChangeProfileRequest>,
) -> ApiResult<Profile> {
    Ok(Json(
        profile_actions::change_profile(&id, input, &state.store).await?,
    ))
}

pub async fn delete_profile_handler(
    Extension(state): Extension<AxumAppState>,
    Path(id): Path<String>,
) -> ApiResult<Profile> {
    Ok(Json(profile_actions::delete_profile(&id, &state.store).await?))
}
