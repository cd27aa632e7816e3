use serde::Deserialize;
use tracing::{debug, info};

use crate::common::{parse_id, parse_reference, DomainResult, EntityKind, PostId, UserId};
use crate::domains::integrity;
use crate::domains::posts::models::{NewPost, Post, PostChanges};
use crate::kernel::EntityStore;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub user_id: String,
}

pub async fn list_posts(store: &EntityStore) -> Vec<Post> {
    store.read().await.posts.find_all()
}

pub async fn get_post(id: &str, store: &EntityStore) -> DomainResult<Post> {
    let id: PostId = parse_id(id, EntityKind::Post)?;
    debug!(post_id = %id, "get_post");

    let tables = store.read().await;
    integrity::require_post(&tables, id).cloned()
}

pub async fn create_post(input: CreatePostRequest, store: &EntityStore) -> DomainResult<Post> {
    let user_id: UserId = parse_reference(&input.user_id, EntityKind::User)?;

    let mut tables = store.write().await;
    integrity::check_create_post(&tables, user_id)?;

    let post = tables.posts.create(NewPost {
        title: input.title,
        content: input.content,
        user_id,
    });
    info!(post_id = %post.id, %user_id, "Post created");
    Ok(post)
}

pub async fn change_post(id: &str, changes: PostChanges, store: &EntityStore) -> DomainResult<Post> {
    let id: PostId = parse_id(id, EntityKind::Post)?;

    let post = store
        .write()
        .await
        .posts
        .change(id, |post| changes.apply(post))?;
    info!(post_id = %id, "Post updated");
    Ok(post)
}

pub async fn delete_post(id: &str, store: &EntityStore) -> DomainResult<Post> {
    let id: PostId = parse_id(id, EntityKind::Post)?;

    let post = store.write().await.posts.delete(id)?;
    info!(post_id = %id, "Post deleted");
    Ok(post)
}
