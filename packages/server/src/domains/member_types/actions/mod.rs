use tracing::{debug, info};

use crate::common::{parse_member_type_id, DomainResult};
use crate::domains::integrity;
use crate::domains::member_types::models::{MemberType, MemberTypeChanges};
use crate::kernel::EntityStore;

pub async fn list_member_types(store: &EntityStore) -> Vec<MemberType> {
    store.read().await.member_types.find_all()
}

pub async fn get_member_type(id: &str, store: &EntityStore) -> DomainResult<MemberType> {
    let id = parse_member_type_id(id)?;
    debug!(member_type_id = %id, "get_member_type");

    let tables = store.read().await;
    integrity::require_member_type(&tables, id).cloned()
}

pub async fn change_member_type(
    id: &str,
    changes: MemberTypeChanges,
    store: &EntityStore,
) -> DomainResult<MemberType> {
    let id = parse_member_type_id(id)?;

    let member_type = store
        .write()
        .await
        .member_types
        .change(id, |member_type| changes.apply(member_type))?;
    info!(member_type_id = %id, "Member type updated");
    Ok(member_type)
}
