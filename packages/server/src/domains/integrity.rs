//! Referential integrity rules.
//!
//! Pure checks over a view of the store, run by the actions while they hold the
//! write guard and before any table is touched. A rule either accepts the
//! mutation or returns the [`DomainError`] it must be rejected with.

use crate::common::{
    DomainError, DomainResult, EntityKind, MemberTypeId, PostId, ProfileId, UserId,
};
use crate::domains::member_types::models::MemberType;
use crate::domains::posts::models::Post;
use crate::domains::profiles::models::{Profile, ProfileFilter};
use crate::domains::users::models::User;
use crate::kernel::Tables;

pub fn require_user(tables: &Tables, id: UserId) -> DomainResult<&User> {
    tables
        .users
        .get(id)
        .ok_or_else(|| DomainError::not_found(EntityKind::User, id))
}

pub fn require_profile(tables: &Tables, id: ProfileId) -> DomainResult<&Profile> {
    tables
        .profiles
        .get(id)
        .ok_or_else(|| DomainError::not_found(EntityKind::Profile, id))
}

pub fn require_post(tables: &Tables, id: PostId) -> DomainResult<&Post> {
    tables
        .posts
        .get(id)
        .ok_or_else(|| DomainError::not_found(EntityKind::Post, id))
}

pub fn require_member_type(tables: &Tables, id: MemberTypeId) -> DomainResult<&MemberType> {
    tables
        .member_types
        .get(id)
        .ok_or_else(|| DomainError::not_found(EntityKind::MemberType, id))
}

fn reference_user(tables: &Tables, id: UserId) -> DomainResult<()> {
    if tables.users.contains(id) {
        Ok(())
    } else {
        Err(DomainError::invalid_reference(EntityKind::User, id.to_string()))
    }
}

fn reference_member_type(tables: &Tables, id: MemberTypeId) -> DomainResult<()> {
    if tables.member_types.contains(id) {
        Ok(())
    } else {
        Err(DomainError::invalid_reference(
            EntityKind::MemberType,
            id.to_string(),
        ))
    }
}

/// A profile needs an existing owner and member type, and the owner must not
/// already have one.
pub fn check_create_profile(
    tables: &Tables,
    user_id: UserId,
    member_type_id: MemberTypeId,
) -> DomainResult<()> {
    reference_user(tables, user_id)?;
    reference_member_type(tables, member_type_id)?;

    if let Some(existing) = tables.profiles.find_one(&ProfileFilter::UserId(user_id)) {
        return Err(DomainError::Conflict(format!(
            "User has profile: profile id - {}",
            existing.id
        )));
    }

    Ok(())
}

pub fn check_change_profile(
    tables: &Tables,
    id: ProfileId,
    member_type_id: Option<MemberTypeId>,
) -> DomainResult<()> {
    if let Some(member_type_id) = member_type_id {
        reference_member_type(tables, member_type_id)?;
    }
    require_profile(tables, id)?;
    Ok(())
}

pub fn check_create_post(tables: &Tables, user_id: UserId) -> DomainResult<()> {
    reference_user(tables, user_id)
}

/// What a subscribe request has to do to the publisher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeOutcome {
    AlreadySubscribed,
    Append,
}

/// `subscriber` follows `publisher`: the subscriber's id is recorded in the
/// publisher's `subscribedToUserIds`.
pub fn check_subscribe(
    tables: &Tables,
    subscriber: UserId,
    publisher: UserId,
) -> DomainResult<SubscribeOutcome> {
    require_user(tables, subscriber)?;
    let publisher = require_user(tables, publisher)?;

    if publisher.is_subscribed_by(subscriber) {
        Ok(SubscribeOutcome::AlreadySubscribed)
    } else {
        Ok(SubscribeOutcome::Append)
    }
}

pub fn check_unsubscribe(tables: &Tables, subscriber: UserId, publisher: UserId) -> DomainResult<()> {
    require_user(tables, subscriber)?;
    let publisher = require_user(tables, publisher)?;

    if !publisher.is_subscribed_by(subscriber) {
        return Err(DomainError::PreconditionFailed(format!(
            "User {} is not subscribed to {}",
            subscriber, publisher.id
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::profiles::models::NewProfile;
    use crate::domains::users::models::NewUser;
    use crate::kernel::default_member_types;

    fn tables() -> Tables {
        let mut tables = Tables::default();
        for member_type in default_member_types() {
            tables.member_types.insert(member_type);
        }
        tables
    }

    fn add_user(tables: &mut Tables, first_name: &str) -> UserId {
        tables
            .users
            .create(NewUser {
                first_name: first_name.to_string(),
                last_name: "Test".to_string(),
                email: format!("{first_name}@example.com"),
            })
            .id
    }

    fn add_profile(tables: &mut Tables, user_id: UserId) -> ProfileId {
        tables
            .profiles
            .create(NewProfile {
                avatar: "a.png".to_string(),
                sex: "f".to_string(),
                birthday: 19900101,
                country: "NO".to_string(),
                street: "Main".to_string(),
                city: "Oslo".to_string(),
                member_type_id: MemberTypeId::Basic,
                user_id,
            })
            .id
    }

    #[test]
    fn test_create_profile_accepts_valid_references() {
        let mut tables = tables();
        let ann = add_user(&mut tables, "ann");

        assert_eq!(check_create_profile(&tables, ann, MemberTypeId::Basic), Ok(()));
    }

    #[test]
    fn test_create_profile_unknown_user_is_invalid_reference() {
        let tables = tables();
        let err = check_create_profile(&tables, UserId::new(), MemberTypeId::Basic).unwrap_err();
        assert_eq!(err.code(), "INVALID_REFERENCE");
    }

    #[test]
    fn test_create_profile_unseeded_member_type_is_invalid_reference() {
        let mut tables = Tables::default();
        let ann = add_user(&mut tables, "ann");

        let err = check_create_profile(&tables, ann, MemberTypeId::Business).unwrap_err();
        assert_eq!(
            err,
            DomainError::invalid_reference(EntityKind::MemberType, "business")
        );
    }

    #[test]
    fn test_create_profile_twice_is_conflict() {
        let mut tables = tables();
        let ann = add_user(&mut tables, "ann");
        let profile_id = add_profile(&mut tables, ann);

        let err = check_create_profile(&tables, ann, MemberTypeId::Business).unwrap_err();
        assert_eq!(
            err,
            DomainError::Conflict(format!("User has profile: profile id - {profile_id}"))
        );
    }

    #[test]
    fn test_change_profile_checks_reference_then_existence() {
        let mut tables = tables();
        let ann = add_user(&mut tables, "ann");
        let profile_id = add_profile(&mut tables, ann);

        assert_eq!(check_change_profile(&tables, profile_id, None), Ok(()));
        assert_eq!(
            check_change_profile(&tables, profile_id, Some(MemberTypeId::Business)),
            Ok(())
        );
        assert_eq!(
            check_change_profile(&tables, ProfileId::new(), None)
                .unwrap_err()
                .code(),
            "NOT_FOUND"
        );
    }

    #[test]
    fn test_create_post_requires_author() {
        let mut tables = tables();
        let ann = add_user(&mut tables, "ann");

        assert_eq!(check_create_post(&tables, ann), Ok(()));
        assert_eq!(
            check_create_post(&tables, UserId::new()).unwrap_err().code(),
            "INVALID_REFERENCE"
        );
    }

    #[test]
    fn test_subscribe_is_idempotent_decision() {
        let mut tables = tables();
        let ann = add_user(&mut tables, "ann");
        let bob = add_user(&mut tables, "bob");

        assert_eq!(check_subscribe(&tables, ann, bob), Ok(SubscribeOutcome::Append));

        tables
            .users
            .change(bob, |u| u.subscribed_to_user_ids.push(ann))
            .unwrap();
        assert_eq!(
            check_subscribe(&tables, ann, bob),
            Ok(SubscribeOutcome::AlreadySubscribed)
        );
    }

    #[test]
    fn test_subscribe_missing_user_is_not_found() {
        let mut tables = tables();
        let ann = add_user(&mut tables, "ann");
        let ghost = UserId::new();

        assert_eq!(
            check_subscribe(&tables, ghost, ann),
            Err(DomainError::not_found(EntityKind::User, ghost))
        );
        assert_eq!(
            check_subscribe(&tables, ann, ghost),
            Err(DomainError::not_found(EntityKind::User, ghost))
        );
    }

    #[test]
    fn test_self_subscription_is_allowed() {
        let mut tables = tables();
        let ann = add_user(&mut tables, "ann");

        assert_eq!(check_subscribe(&tables, ann, ann), Ok(SubscribeOutcome::Append));
    }

    #[test]
    fn test_unsubscribe_requires_existing_subscription() {
        let mut tables = tables();
        let ann = add_user(&mut tables, "ann");
        let bob = add_user(&mut tables, "bob");

        let err = check_unsubscribe(&tables, ann, bob).unwrap_err();
        assert_eq!(err.code(), "PRECONDITION_FAILED");

        tables
            .users
            .change(bob, |u| u.subscribed_to_user_ids.push(ann))
            .unwrap();
        assert_eq!(check_unsubscribe(&tables, ann, bob), Ok(()));
    }
}
