//! Graph resolution - joins store rows into the nested shapes GraphQL serves.
//!
//! Every function is a read over one store snapshot. The batched variants take
//! a set of keys and answer all of them from a single scan; the dataloaders
//! in `server::graphql::loaders` call them once per batch.

use std::collections::HashMap;

use crate::common::{MemberTypeId, UserId};
use crate::domains::member_types::models::{MemberType, MemberTypeFilter};
use crate::domains::posts::models::{Post, PostFilter};
use crate::domains::profiles::models::{Profile, ProfileFilter};
use crate::domains::users::models::{User, UserFilter};
use crate::kernel::Tables;

/// Posts of each user, in store order. Every key is present in the result.
pub fn posts_by_user(tables: &Tables, user_ids: &[UserId]) -> HashMap<UserId, Vec<Post>> {
    let mut grouped: HashMap<UserId, Vec<Post>> =
        user_ids.iter().map(|id| (*id, Vec::new())).collect();

    for post in tables.posts.find_many(&PostFilter::UserIdIn(user_ids.to_vec())) {
        if let Some(posts) = grouped.get_mut(&post.user_id) {
            posts.push(post);
        }
    }

    grouped
}

pub fn profile_by_user(tables: &Tables, user_ids: &[UserId]) -> HashMap<UserId, Option<Profile>> {
    let mut found: HashMap<UserId, Option<Profile>> =
        user_ids.iter().map(|id| (*id, None)).collect();

    for profile in tables
        .profiles
        .find_many(&ProfileFilter::UserIdIn(user_ids.to_vec()))
    {
        found.entry(profile.user_id).or_insert(None).get_or_insert(profile);
    }

    found
}

pub fn member_types_by_id(
    tables: &Tables,
    ids: &[MemberTypeId],
) -> HashMap<MemberTypeId, Option<MemberType>> {
    let mut found: HashMap<MemberTypeId, Option<MemberType>> =
        ids.iter().map(|id| (*id, None)).collect();

    for member_type in tables
        .member_types
        .find_many(&MemberTypeFilter::IdIn(ids.to_vec()))
    {
        found.insert(member_type.id, Some(member_type));
    }

    found
}

/// Users named in `user.subscribedToUserIds`, in store order.
pub fn subscribed_to_user(tables: &Tables, user: &User) -> Vec<User> {
    tables
        .users
        .find_many(&UserFilter::IdIn(user.subscribed_to_user_ids.clone()))
}

/// Users whose `subscribedToUserIds` contains `user_id`.
pub fn user_subscribed_to(tables: &Tables, user_id: UserId) -> Vec<User> {
    tables.users.find_many(&UserFilter::SubscribedTo(user_id))
}

/// The member type of the user's profile; `None` without a profile.
pub fn member_type_of_user(tables: &Tables, user_id: UserId) -> Option<MemberType> {
    let profile = tables.profiles.find_one(&ProfileFilter::UserId(user_id))?;
    tables.member_types.get(profile.member_type_id).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::posts::models::NewPost;
    use crate::domains::profiles::models::NewProfile;
    use crate::domains::users::models::NewUser;
    use crate::kernel::default_member_types;

    struct Fixture {
        tables: Tables,
        ann: UserId,
        bob: UserId,
    }

    fn fixture() -> Fixture {
        let mut tables = Tables::default();
        for member_type in default_member_types() {
            tables.member_types.insert(member_type);
        }
        let mut user = |name: &str| {
            tables
                .users
                .create(NewUser {
                    first_name: name.to_string(),
                    last_name: "Test".to_string(),
                    email: format!("{name}@example.com"),
                })
                .id
        };
        let ann = user("ann");
        let bob = user("bob");

        for (author, title) in [(ann, "a1"), (bob, "b1"), (ann, "a2")] {
            tables.posts.create(NewPost {
                title: title.to_string(),
                content: String::new(),
                user_id: author,
            });
        }

        tables.profiles.create(NewProfile {
            avatar: String::new(),
            sex: String::new(),
            birthday: 0,
            country: String::new(),
            street: String::new(),
            city: String::new(),
            member_type_id: MemberTypeId::Business,
            user_id: ann,
        });

        tables
            .users
            .change(bob, |u| u.subscribed_to_user_ids.push(ann))
            .unwrap();

        Fixture { tables, ann, bob }
    }

    #[test]
    fn test_posts_grouped_in_store_order() {
        let f = fixture();
        let ghost = UserId::new();
        let grouped = posts_by_user(&f.tables, &[f.ann, f.bob, ghost]);

        let titles: Vec<_> = grouped[&f.ann].iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["a1", "a2"]);
        assert_eq!(grouped[&f.bob].len(), 1);
        assert!(grouped[&ghost].is_empty());
    }

    #[test]
    fn test_profile_by_user() {
        let f = fixture();
        let found = profile_by_user(&f.tables, &[f.ann, f.bob]);

        assert_eq!(found[&f.ann].as_ref().map(|p| p.user_id), Some(f.ann));
        assert!(found[&f.bob].is_none());
    }

    #[test]
    fn test_member_types_by_id() {
        let f = fixture();
        let found = member_types_by_id(&f.tables, &[MemberTypeId::Basic]);
        assert_eq!(found[&MemberTypeId::Basic].as_ref().map(|m| m.discount), Some(0));

        let empty = member_types_by_id(&Tables::default(), &[MemberTypeId::Basic]);
        assert!(empty[&MemberTypeId::Basic].is_none());
    }

    #[test]
    fn test_subscription_directions() {
        let f = fixture();
        let bob = f.tables.users.get(f.bob).unwrap().clone();
        let ann = f.tables.users.get(f.ann).unwrap().clone();

        let bob_lists: Vec<_> = subscribed_to_user(&f.tables, &bob).iter().map(|u| u.id).collect();
        assert_eq!(bob_lists, [f.ann]);
        assert!(subscribed_to_user(&f.tables, &ann).is_empty());

        let listing_ann: Vec<_> = user_subscribed_to(&f.tables, f.ann).iter().map(|u| u.id).collect();
        assert_eq!(listing_ann, [f.bob]);
    }

    #[test]
    fn test_member_type_via_profile() {
        let f = fixture();
        assert_eq!(
            member_type_of_user(&f.tables, f.ann).map(|m| m.id),
            Some(MemberTypeId::Business)
        );
        assert!(member_type_of_user(&f.tables, f.bob).is_none());
    }
}
