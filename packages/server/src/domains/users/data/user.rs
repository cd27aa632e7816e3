use juniper::{FieldResult, GraphQLInputObject, ID};

use crate::domains::graph;
use crate::domains::member_types::data::MemberTypeData;
use crate::domains::posts::data::PostData;
use crate::domains::profiles::data::ProfileData;
use crate::domains::users::models::{NewUser, User, UserChanges};
use crate::server::graphql::GraphQLContext;

/// GraphQL type for a user
#[derive(Debug, Clone)]
pub struct UserData {
    pub user: User,
}

#[juniper::graphql_object(name = "User", context = GraphQLContext)]
impl UserData {
    fn id(&self) -> ID {
        self.user.id.into()
    }

    fn first_name(&self) -> &str {
        &self.user.first_name
    }

    fn last_name(&self) -> &str {
        &self.user.last_name
    }

    fn email(&self) -> &str {
        &self.user.email
    }

    /// Ids of the users subscribed to this user
    fn subscribed_to_user_ids(&self) -> Vec<ID> {
        self.user
            .subscribed_to_user_ids
            .iter()
            .map(|id| (*id).into())
            .collect()
    }

    async fn posts(&self, ctx: &GraphQLContext) -> FieldResult<Vec<PostData>> {
        let posts = ctx.loaders.posts_by_user.try_load(self.user.id).await?;
        Ok(posts.into_iter().map(PostData::from).collect())
    }

    async fn profile(&self, ctx: &GraphQLContext) -> FieldResult<Option<ProfileData>> {
        let profile = ctx.loaders.profile_by_user.try_load(self.user.id).await?;
        Ok(profile.map(ProfileData::from))
    }

    /// Users listed in `subscribedToUserIds`
    async fn subscribed_to_user(&self, ctx: &GraphQLContext) -> Vec<UserData> {
        let tables = ctx.store.read().await;
        graph::subscribed_to_user(&tables, &self.user)
            .into_iter()
            .map(UserData::from)
            .collect()
    }

    /// Users whose `subscribedToUserIds` contains this user
    async fn user_subscribed_to(&self, ctx: &GraphQLContext) -> Vec<UserData> {
        let tables = ctx.store.read().await;
        graph::user_subscribed_to(&tables, self.user.id)
            .into_iter()
            .map(UserData::from)
            .collect()
    }

    /// Member type of the user's profile
    async fn member_type(&self, ctx: &GraphQLContext) -> FieldResult<Option<MemberTypeData>> {
        let Some(profile) = ctx.loaders.profile_by_user.try_load(self.user.id).await? else {
            return Ok(None);
        };
        let member_type = ctx
            .loaders
            .member_type
            .try_load(profile.member_type_id)
            .await?;
        Ok(member_type.map(MemberTypeData::from))
    }
}

impl From<User> for UserData {
    fn from(user: User) -> Self {
        Self { user }
    }
}

/// Input for creating a user
#[derive(Debug, Clone, GraphQLInputObject)]
pub struct CreateUserInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<CreateUserInput> for NewUser {
    fn from(input: CreateUserInput) -> Self {
        Self {
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
        }
    }
}

/// Input for updating a user; omitted fields are kept
#[derive(Debug, Clone, GraphQLInputObject)]
pub struct ChangeUserInput {
    pub id: ID,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl ChangeUserInput {
    pub fn into_parts(self) -> (ID, UserChanges) {
        let changes = UserChanges {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        };
        (self.id, changes)
    }
}
