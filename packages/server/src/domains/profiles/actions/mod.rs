use serde::Deserialize;
use tracing::{debug, info};

use crate::common::{
    parse_id, parse_member_type_reference, parse_reference, DomainResult, EntityKind, ProfileId,
    UserId,
};
use crate::domains::integrity;
use crate::domains::profiles::models::{NewProfile, Profile, ProfileChanges};
use crate::kernel::EntityStore;

/// Create request for a profile; ids still in their wire form.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateProfileRequest {
    pub avatar: String,
    pub sex: String,
    pub birthday: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub member_type_id: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChangeProfileRequest {
    pub avatar: Option<String>,
    pub sex: Option<String>,
    pub birthday: Option<i32>,
    pub country: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub member_type_id: Option<String>,
}

pub async fn list_profiles(store: &EntityStore) -> Vec<Profile> {
    store.read().await.profiles.find_all()
}

pub async fn get_profile(id: &str, store: &EntityStore) -> DomainResult<Profile> {
    let id: ProfileId = parse_id(id, EntityKind::Profile)?;
    debug!(profile_id = %id, "get_profile");

    let tables = store.read().await;
    integrity::require_profile(&tables, id).cloned()
}

pub async fn create_profile(input: CreateProfileRequest, store: &EntityStore) -> DomainResult<Profile> {
    let user_id: UserId = parse_reference(&input.user_id, EntityKind::User)?;
    let member_type_id = parse_member_type_reference(&input.member_type_id)?;

    let mut tables = store.write().await;
    integrity::check_create_profile(&tables, user_id, member_type_id)?;

    let profile = tables.profiles.create(NewProfile {
        avatar: input.avatar,
        sex: input.sex,
        birthday: input.birthday,
        country: input.country,
        street: input.street,
        city: input.city,
        member_type_id,
        user_id,
    });
    info!(profile_id = %profile.id, %user_id, "Profile created");
    Ok(profile)
}

pub async fn change_profile(
    id: &str,
    input: ChangeProfileRequest,
    store: &EntityStore,
) -> DomainResult<Profile> {
    let id: ProfileId = parse_id(id, EntityKind::Profile)?;
    let member_type_id = input
        .member_type_id
        .as_deref()
        .map(parse_member_type_reference)
        .transpose()?;

    let mut tables = store.write().await;
    integrity::check_change_profile(&tables, id, member_type_id)?;

    let changes = ProfileChanges {
        avatar: input.avatar,
        sex: input.sex,
        birthday: input.birthday,
        country: input.country,
        street: input.street,
        city: input.city,
        member_type_id,
    };
    let profile = tables.profiles.change(id, |profile| changes.apply(profile))?;
    info!(profile_id = %id, "Profile updated");
    Ok(profile)
}

pub async fn delete_profile(id: &str, store: &EntityStore) -> DomainResult<Profile> {
    let id: ProfileId = parse_id(id, EntityKind::Profile)?;

    let profile = store.write().await.profiles.delete(id)?;
    info!(profile_id = %id, "Profile deleted");
    Ok(profile)
}
