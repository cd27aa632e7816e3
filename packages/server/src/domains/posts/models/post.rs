use serde::{Deserialize, Serialize};

use crate::common::{EntityKind, PostId, UserId};
use crate::kernel::{Entity, Filter, Generated};

/// Post model - store row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub user_id: UserId,
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub user_id: UserId,
}

/// Partial update for a post. The author is fixed at creation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostChanges {
    pub fn apply(self, post: &mut Post) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
    }
}

impl Entity for Post {
    type Key = PostId;

    const KIND: EntityKind = EntityKind::Post;

    fn key(&self) -> PostId {
        self.id
    }
}

impl Generated for Post {
    type Draft = NewPost;

    fn generate_key() -> PostId {
        PostId::new()
    }

    fn from_draft(id: PostId, draft: NewPost) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
            user_id: draft.user_id,
        }
    }
}

/// Predicates over the posts table.
#[derive(Debug, Clone)]
pub enum PostFilter {
    Id(PostId),
    UserId(UserId),
    UserIdIn(Vec<UserId>),
}

impl Filter<Post> for PostFilter {
    fn matches(&self, post: &Post) -> bool {
        match self {
            PostFilter::Id(id) => post.id == *id,
            PostFilter::UserId(user_id) => post.user_id == *user_id,
            PostFilter::UserIdIn(user_ids) => user_ids.contains(&post.user_id),
        }
    }
}
