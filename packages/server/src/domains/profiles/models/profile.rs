use serde::Serialize;

use crate::common::{EntityKind, MemberTypeId, ProfileId, UserId};
use crate::kernel::{Entity, Filter, Generated};

/// Profile model - store row. At most one per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: ProfileId,
    pub avatar: String,
    pub sex: String,
    pub birthday: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub member_type_id: MemberTypeId,
    pub user_id: UserId,
}

/// Create payload with references already resolved to typed ids.
#[derive(Debug, Clone)]
pub struct NewProfile {
    pub avatar: String,
    pub sex: String,
    pub birthday: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub member_type_id: MemberTypeId,
    pub user_id: UserId,
}

/// Partial update for a profile. The owning user cannot be changed.
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub avatar: Option<String>,
    pub sex: Option<String>,
    pub birthday: Option<i32>,
    pub country: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub member_type_id: Option<MemberTypeId>,
}

impl ProfileChanges {
    pub fn apply(self, profile: &mut Profile) {
        if let Some(avatar) = self.avatar {
            profile.avatar = avatar;
        }
        if let Some(sex) = self.sex {
            profile.sex = sex;
        }
        if let Some(birthday) = self.birthday {
            profile.birthday = birthday;
        }
        if let Some(country) = self.country {
            profile.country = country;
        }
        if let Some(street) = self.street {
            profile.street = street;
        }
        if let Some(city) = self.city {
            profile.city = city;
        }
        if let Some(member_type_id) = self.member_type_id {
            profile.member_type_id = member_type_id;
        }
    }
}

impl Entity for Profile {
    type Key = ProfileId;

    const KIND: EntityKind = EntityKind::Profile;

    fn key(&self) -> ProfileId {
        self.id
    }
}

impl Generated for Profile {
    type Draft = NewProfile;

    fn generate_key() -> ProfileId {
        ProfileId::new()
    }

    fn from_draft(id: ProfileId, draft: NewProfile) -> Self {
        Self {
            id,
            avatar: draft.avatar,
            sex: draft.sex,
            birthday: draft.birthday,
            country: draft.country,
            street: draft.street,
            city: draft.city,
            member_type_id: draft.member_type_id,
            user_id: draft.user_id,
        }
    }
}

/// Predicates over the profiles table.
#[derive(Debug, Clone)]
pub enum ProfileFilter {
    Id(ProfileId),
    UserId(UserId),
    UserIdIn(Vec<UserId>),
}

impl Filter<Profile> for ProfileFilter {
    fn matches(&self, profile: &Profile) -> bool {
        match self {
            ProfileFilter::Id(id) => profile.id == *id,
            ProfileFilter::UserId(user_id) => profile.user_id == *user_id,
            ProfileFilter::UserIdIn(user_ids) => user_ids.contains(&profile.user_id),
        }
    }
}
