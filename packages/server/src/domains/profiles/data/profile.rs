use juniper::{FieldResult, GraphQLInputObject, ID};

use crate::domains::member_types::data::MemberTypeData;
use crate::domains::profiles::actions::{ChangeProfileRequest, CreateProfileRequest};
use crate::domains::profiles::models::Profile;
use crate::domains::users::data::UserData;
use crate::server::graphql::GraphQLContext;

/// GraphQL type for a profile
#[derive(Debug, Clone)]
pub struct ProfileData {
    pub profile: Profile,
}

#[juniper::graphql_object(name = "Profile", context = GraphQLContext)]
impl ProfileData {
    fn id(&self) -> ID {
        self.profile.id.into()
    }

    fn avatar(&self) -> &str {
        &self.profile.avatar
    }

    fn sex(&self) -> &str {
        &self.profile.sex
    }

    fn birthday(&self) -> i32 {
        self.profile.birthday
    }

    fn country(&self) -> &str {
        &self.profile.country
    }

    fn street(&self) -> &str {
        &self.profile.street
    }

    fn city(&self) -> &str {
        &self.profile.city
    }

    fn member_type_id(&self) -> &str {
        self.profile.member_type_id.as_str()
    }

    fn user_id(&self) -> ID {
        self.profile.user_id.into()
    }

    async fn member_type(&self, ctx: &GraphQLContext) -> FieldResult<Option<MemberTypeData>> {
        let member_type = ctx
            .loaders
            .member_type
            .try_load(self.profile.member_type_id)
            .await?;
        Ok(member_type.map(MemberTypeData::from))
    }

    /// Owning user
    async fn user(&self, ctx: &GraphQLContext) -> Option<UserData> {
        let tables = ctx.store.read().await;
        tables
            .users
            .get(self.profile.user_id)
            .cloned()
            .map(UserData::from)
    }
}

impl From<Profile> for ProfileData {
    fn from(profile: Profile) -> Self {
        Self { profile }
    }
}

/// Input for creating a profile
#[derive(Debug, Clone, GraphQLInputObject)]
pub struct CreateProfileInput {
    pub avatar: String,
    pub sex: String,
    pub birthday: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub member_type_id: String,
    pub user_id: ID,
}

impl From<CreateProfileInput> for CreateProfileRequest {
    fn from(input: CreateProfileInput) -> Self {
        Self {
            avatar: input.avatar,
            sex: input.sex,
            birthday: input.birthday,
            country: input.country,
            street: input.street,
            city: input.city,
            member_type_id: input.member_type_id,
            user_id: input.user_id.to_string(),
        }
    }
}

/// Input for updating a profile; the owning user cannot change
#[derive(Debug, Clone, GraphQLInputObject)]
pub struct ChangeProfileInput {
    pub id: ID,
    pub avatar: Option<String>,
    pub sex: Option<String>,
    pub birthday: Option<i32>,
    pub country: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub member_type_id: Option<String>,
}

impl ChangeProfileInput {
    pub fn into_parts(self) -> (ID, ChangeProfileRequest) {
        let request = ChangeProfileRequest {
            avatar: self.avatar,
            sex: self.sex,
            birthday: self.birthday,
            country: self.country,
            street: self.street,
            city: self.city,
            member_type_id: self.member_type_id,
        };
        (self.id, request)
    }
}
