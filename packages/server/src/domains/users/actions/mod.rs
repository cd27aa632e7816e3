//! User actions - queries and mutations over the users table.
//!
//! Each mutation takes the store write guard once and runs its integrity
//! checks and writes under it.

use tracing::{debug, info};

use crate::common::{parse_id, DomainResult, EntityKind, UserId};
use crate::domains::integrity::{self, SubscribeOutcome};
use crate::domains::users::models::{NewUser, User, UserChanges, UserFilter};
use crate::kernel::EntityStore;

/// Both sides of a subscription change, as they are after the change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    pub subscriber: User,
    pub publisher: User,
}

pub async fn list_users(store: &EntityStore) -> Vec<User> {
    store.read().await.users.find_all()
}

pub async fn get_user(id: &str, store: &EntityStore) -> DomainResult<User> {
    let id: UserId = parse_id(id, EntityKind::User)?;
    debug!(user_id = %id, "get_user");

    let tables = store.read().await;
    integrity::require_user(&tables, id).cloned()
}

pub async fn create_user(input: NewUser, store: &EntityStore) -> User {
    let user = store.write().await.users.create(input);
    info!(user_id = %user.id, "User created");
    user
}

pub async fn change_user(id: &str, changes: UserChanges, store: &EntityStore) -> DomainResult<User> {
    let id: UserId = parse_id(id, EntityKind::User)?;

    let mut tables = store.write().await;
    let user = tables.users.change(id, |user| changes.apply(user))?;
    info!(user_id = %id, "User updated");
    Ok(user)
}

/// Deletes a user and strips its id from every remaining subscription list.
pub async fn delete_user(id: &str, store: &EntityStore) -> DomainResult<User> {
    let id: UserId = parse_id(id, EntityKind::User)?;

    let mut tables = store.write().await;
    let removed = tables.users.delete(id)?;
    let cascaded = tables
        .users
        .change_many(&UserFilter::SubscribedTo(id), |user| {
            user.subscribed_to_user_ids.retain(|subscribed| *subscribed != id)
        });

    info!(user_id = %id, cascaded, "User deleted");
    Ok(removed)
}

/// `id` subscribes to `user_id`. Repeating the call changes nothing.
pub async fn subscribe_to(id: &str, user_id: &str, store: &EntityStore) -> DomainResult<Subscription> {
    let subscriber_id: UserId = parse_id(id, EntityKind::User)?;
    let publisher_id: UserId = parse_id(user_id, EntityKind::User)?;

    let mut tables = store.write().await;
    let publisher = match integrity::check_subscribe(&tables, subscriber_id, publisher_id)? {
        SubscribeOutcome::AlreadySubscribed => {
            debug!(%subscriber_id, %publisher_id, "Already subscribed");
            integrity::require_user(&tables, publisher_id)?.clone()
        }
        SubscribeOutcome::Append => {
            let publisher = tables.users.change(publisher_id, |publisher| {
                publisher.subscribed_to_user_ids.push(subscriber_id)
            })?;
            info!(%subscriber_id, %publisher_id, "Subscribed");
            publisher
        }
    };
    let subscriber = integrity::require_user(&tables, subscriber_id)?.clone();

    Ok(Subscription {
        subscriber,
        publisher,
    })
}

pub async fn unsubscribe_from(
    id: &str,
    user_id: &str,
    store: &EntityStore,
) -> DomainResult<Subscription> {
    let subscriber_id: UserId = parse_id(id, EntityKind::User)?;
    let publisher_id: UserId = parse_id(user_id, EntityKind::User)?;

    let mut tables = store.write().await;
    integrity::check_unsubscribe(&tables, subscriber_id, publisher_id)?;

    let publisher = tables.users.change(publisher_id, |publisher| {
        publisher
            .subscribed_to_user_ids
            .retain(|subscribed| *subscribed != subscriber_id)
    })?;
    let subscriber = integrity::require_user(&tables, subscriber_id)?.clone();
    info!(%subscriber_id, %publisher_id, "Unsubscribed");

    Ok(Subscription {
        subscriber,
        publisher,
    })
}
