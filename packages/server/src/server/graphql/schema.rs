//! GraphQL schema definition.

use super::context::GraphQLContext;
use juniper::{EmptySubscription, RootNode, ID};
use tracing::warn;

use crate::common::{DomainError, DomainResult};

// Domain actions
use crate::domains::member_types::actions as member_type_actions;
use crate::domains::posts::actions as post_actions;
use crate::domains::profiles::actions as profile_actions;
use crate::domains::users::actions as user_actions;

// Domain data types (GraphQL types)
use crate::domains::member_types::data::{ChangeMemberTypeInput, MemberTypeData};
use crate::domains::posts::data::{ChangePostInput, CreatePostInput, PostData};
use crate::domains::profiles::data::{ChangeProfileInput, CreateProfileInput, ProfileData};
use crate::domains::users::data::{ChangeUserInput, CreateUserInput, UserData};

/// Logs a rejected resolver call and converts the entity for the response.
fn respond<T, D: From<T>>(field: &str, result: DomainResult<T>) -> Result<Option<D>, DomainError> {
    match result {
        Ok(entity) => Ok(Some(D::from(entity))),
        Err(err) => {
            warn!(field, code = err.code(), error = %err, "GraphQL field rejected");
            Err(err)
        }
    }
}

pub struct Query;

#[juniper::graphql_object(context = GraphQLContext)]
impl Query {
    // =========================================================================
    // Users
    // =========================================================================

    async fn users(ctx: &GraphQLContext) -> Vec<UserData> {
        user_actions::list_users(&ctx.store)
            .await
            .into_iter()
            .map(UserData::from)
            .collect()
    }

    async fn user(ctx: &GraphQLContext, id: ID) -> Result<Option<UserData>, DomainError> {
        respond("user", user_actions::get_user(&id, &ctx.store).await)
    }

    // =========================================================================
    // Profiles
    // =========================================================================

    async fn profiles(ctx: &GraphQLContext) -> Vec<ProfileData> {
        profile_actions::list_profiles(&ctx.store)
            .await
            .into_iter()
            .map(ProfileData::from)
            .collect()
    }

    async fn profile(ctx: &GraphQLContext, id: ID) -> Result<Option<ProfileData>, DomainError> {
        respond("profile", profile_actions::get_profile(&id, &ctx.store).await)
    }

    // =========================================================================
    // Posts
    // =========================================================================

    async fn posts(ctx: &GraphQLContext) -> Vec<PostData> {
        post_actions::list_posts(&ctx.store)
            .await
            .into_iter()
            .map(PostData::from)
            .collect()
    }

    async fn post(ctx: &GraphQLContext, id: ID) -> Result<Option<PostData>, DomainError> {
        respond("post", post_actions::get_post(&id, &ctx.store).await)
    }

    // =========================================================================
    // Member types
    // =========================================================================

    async fn member_types(ctx: &GraphQLContext) -> Vec<MemberTypeData> {
        member_type_actions::list_member_types(&ctx.store)
            .await
            .into_iter()
            .map(MemberTypeData::from)
            .collect()
    }

    /// Look up a member type by slug (`basic` or `business`)
    async fn member_type(
        ctx: &GraphQLContext,
        id: String,
    ) -> Result<Option<MemberTypeData>, DomainError> {
        respond(
            "memberType",
            member_type_actions::get_member_type(&id, &ctx.store).await,
        )
    }
}

pub struct Mutation;

#[juniper::graphql_object(context = GraphQLContext)]
impl Mutation {
    // =========================================================================
    // User Mutations
    // =========================================================================

    async fn create_user(ctx: &GraphQLContext, data: CreateUserInput) -> UserData {
        user_actions::create_user(data.into(), &ctx.store).await.into()
    }

    async fn update_user(
        ctx: &GraphQLContext,
        data: ChangeUserInput,
    ) -> Result<Option<UserData>, DomainError> {
        let (id, changes) = data.into_parts();
        respond(
            "updateUser",
            user_actions::change_user(&id, changes, &ctx.store).await,
        )
    }

    /// `id` subscribes to `userId`. Returns the subscriber.
    async fn subscribe_to(
        ctx: &GraphQLContext,
        id: ID,
        user_id: ID,
    ) -> Result<Option<UserData>, DomainError> {
        let result = user_actions::subscribe_to(&id, &user_id, &ctx.store).await;
        respond("subscribeTo", result.map(|s| s.subscriber))
    }

    /// `id` stops following `userId`. Returns the subscriber.
    async fn unsubscribe_from(
        ctx: &GraphQLContext,
        id: ID,
        user_id: ID,
    ) -> Result<Option<UserData>, DomainError> {
        let result = user_actions::unsubscribe_from(&id, &user_id, &ctx.store).await;
        respond("unsubscribeFrom", result.map(|s| s.subscriber))
    }

    // =========================================================================
    // Profile Mutations
    // =========================================================================

    async fn create_profile(
        ctx: &GraphQLContext,
        data: CreateProfileInput,
    ) -> Result<Option<ProfileData>, DomainError> {
        respond(
            "createProfile",
            profile_actions::create_profile(data.into(), &ctx.store).await,
        )
    }

    async fn update_profile(
        ctx: &GraphQLContext,
        data: ChangeProfileInput,
    ) -> Result<Option<ProfileData>, DomainError> {
        let (id, request) = data.into_parts();
        respond(
            "updateProfile",
            profile_actions::change_profile(&id, request, &ctx.store).await,
        )
    }

    // =========================================================================
    // Post Mutations
    // =========================================================================

    async fn create_post(
        ctx: &GraphQLContext,
        data: CreatePostInput,
    ) -> Result<Option<PostData>, DomainError> {
        respond(
            "createPost",
            post_actions::create_post(data.into(), &ctx.store).await,
        )
    }

    async fn update_post(
        ctx: &GraphQLContext,
        data: ChangePostInput,
    ) -> Result<Option<PostData>, DomainError> {
        let (id, changes) = data.into_parts();
        respond(
            "updatePost",
            post_actions::change_post(&id, changes, &ctx.store).await,
        )
    }

    // =========================================================================
    // Member Type Mutations
    // =========================================================================

    async fn update_member_type(
        ctx: &GraphQLContext,
        data: ChangeMemberTypeInput,
    ) -> Result<Option<MemberTypeData>, DomainError> {
        let (id, changes) = data.into_parts();
        respond(
            "updateMemberType",
            member_type_actions::change_member_type(&id, changes, &ctx.store).await,
        )
    }
}

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<GraphQLContext>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
