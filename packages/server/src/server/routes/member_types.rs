use axum::{
    extract::{Extension, Path},
    Json,
};

use crate::domains::member_types::actions as member_type_actions;
use crate::domains::member_types::models::{MemberType, MemberTypeChanges};
use crate::server::app::AxumAppState;
use crate::server::routes::error::{ApiJson, ApiResult};

pub async fn list_member_types_handler(
    Extension(state): Extension<AxumAppState>,
) -> Json<Vec<MemberType>> {
    Json(member_type_actions::list_member_types(&state.store).await)
}

pub async fn get_member_type_handler(
    Extension(state): Extension<AxumAppState>,
    Path(id): Path<String>,
) -> ApiResult<MemberType> {
    Ok(Json(
        member_type_actions::get_member_type(&id, &state.store).await?,
    ))
}

pub async fn change_member_type_handler(
    Extension(state): Extension<AxumAppState>,
    Path(id): Path<String>,
    ApiJson(changes): ApiJson<MemberTypeChanges>,
) -> ApiResult<MemberType> {
    Ok(Json(
        member_type_actions::change_member_type(&id, changes, &state.store).await?,
    ))
}
