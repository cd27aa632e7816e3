use juniper::{GraphQLInputObject, ID};

use crate::domains::posts::actions::CreatePostRequest;
use crate::domains::posts::models::{Post, PostChanges};
use crate::domains::users::data::UserData;
use crate::server::graphql::GraphQLContext;

/// GraphQL type for a post
#[derive(Debug, Clone)]
pub struct PostData {
    pub post: Post,
}

#[juniper::graphql_object(name = "Post", context = GraphQLContext)]
impl PostData {
    fn id(&self) -> ID {
        self.post.id.into()
    }

    fn title(&self) -> &str {
        &self.post.title
    }

    fn content(&self) -> &str {
        &self.post.content
    }

    fn user_id(&self) -> ID {
        self.post.user_id.into()
    }

    /// The user who wrote the post
    async fn author(&self, ctx: &GraphQLContext) -> Option<UserData> {
        let tables = ctx.store.read().await;
        tables.users.get(self.post.user_id).cloned().map(UserData::from)
    }
}

impl From<Post> for PostData {
    fn from(post: Post) -> Self {
        Self { post }
    }
}

/// Input for creating a post
#[derive(Debug, Clone, GraphQLInputObject)]
pub struct CreatePostInput {
    pub title: String,
    pub content: String,
    pub user_id: ID,
}

impl From<CreatePostInput> for CreatePostRequest {
    fn from(input: CreatePostInput) -> Self {
        Self {
            title: input.title,
            content: input.content,
            user_id: input.user_id.to_string(),
        }
    }
}

/// Input for updating a post; the author cannot change
#[derive(Debug, Clone, GraphQLInputObject)]
pub struct ChangePostInput {
    pub id: ID,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl ChangePostInput {
    pub fn into_parts(self) -> (ID, PostChanges) {
        let changes = PostChanges {
            title: self.title,
            content: self.content,
        };
        (self.id, changes)
    }
}
