use serde::{Deserialize, Serialize};

use crate::common::{EntityKind, UserId};
use crate::kernel::{Entity, Filter, Generated};

/// User model - store row
///
/// `subscribed_to_user_ids` is ordered and may hold the user's own id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subscribed_to_user_ids: Vec<UserId>,
}

/// Create payload for a user.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Partial update for a user. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl UserChanges {
    pub fn apply(self, user: &mut User) {
        if let Some(first_name) = self.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            user.last_name = last_name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
    }
}

impl User {
    pub fn is_subscribed_by(&self, subscriber: UserId) -> bool {
        self.subscribed_to_user_ids.contains(&subscriber)
    }
}

impl Entity for User {
    type Key = UserId;

    const KIND: EntityKind = EntityKind::User;

    fn key(&self) -> UserId {
        self.id
    }
}

impl Generated for User {
    type Draft = NewUser;

    fn generate_key() -> UserId {
        UserId::new()
    }

    fn from_draft(id: UserId, draft: NewUser) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            subscribed_to_user_ids: Vec::new(),
        }
    }
}

/// Predicates over the users table.
#[derive(Debug, Clone)]
pub enum UserFilter {
    /// `id` equals the value.
    Id(UserId),
    /// `id` equals one of the values.
    IdIn(Vec<UserId>),
    /// `subscribedToUserIds` contains the value.
    SubscribedTo(UserId),
}

impl Filter<User> for UserFilter {
    fn matches(&self, user: &User) -> bool {
        match self {
            UserFilter::Id(id) => user.id == *id,
            UserFilter::IdIn(ids) => ids.contains(&user.id),
            UserFilter::SubscribedTo(id) => user.subscribed_to_user_ids.contains(id),
        }
    }
}
