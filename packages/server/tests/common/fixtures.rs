//! Test fixtures for creating test data.
//!
//! These fixtures call the domain actions directly.

use social_core::common::MemberTypeId;
use social_core::domains::posts::actions::{create_post, CreatePostRequest};
use social_core::domains::posts::models::Post;
use social_core::domains::profiles::actions::{create_profile, CreateProfileRequest};
use social_core::domains::profiles::models::Profile;
use social_core::domains::users::actions::create_user;
use social_core::domains::users::models::{NewUser, User};
use social_core::kernel::EntityStore;

/// Create a test user named `first_name Test`
pub async fn create_test_user(store: &EntityStore, first_name: &str) -> User {
    create_user(
        NewUser {
            first_name: first_name.to_string(),
            last_name: "Test".to_string(),
            email: format!("{}@example.com", first_name.to_lowercase()),
        },
        store,
    )
    .await
}

/// Create a profile for `user`
pub async fn create_test_profile(
    store: &EntityStore,
    user: &User,
    member_type: MemberTypeId,
) -> Profile {
    create_profile(
        CreateProfileRequest {
            avatar: "avatar.png".to_string(),
            sex: "female".to_string(),
            birthday: 19900101,
            country: "Norway".to_string(),
            street: "Storgata 1".to_string(),
            city: "Oslo".to_string(),
            member_type_id: member_type.to_string(),
            user_id: user.id.to_string(),
        },
        store,
    )
    .await
    .expect("Failed to create test profile")
}

/// Create a post authored by `user`
pub async fn create_test_post(store: &EntityStore, user: &User, title: &str) -> Post {
    create_post(
        CreatePostRequest {
            title: title.to_string(),
            content: format!("{title} content"),
            user_id: user.id.to_string(),
        },
        store,
    )
    .await
    .expect("Failed to create test post")
}
