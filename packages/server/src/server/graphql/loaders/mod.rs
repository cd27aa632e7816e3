use dataloader::non_cached::Loader;
use std::sync::Arc;

use crate::common::{MemberTypeId, UserId};
use crate::domains::member_types::loader::MemberTypeLoader;
use crate::domains::member_types::models::MemberType;
use crate::domains::posts::loader::PostsByUserLoader;
use crate::domains::posts::models::Post;
use crate::domains::profiles::loader::ProfileByUserLoader;
use crate::domains::profiles::models::Profile;
use crate::kernel::EntityStore;

pub struct DataLoaders {
    pub posts_by_user: Loader<UserId, Vec<Post>, PostsByUserLoader>,
    pub profile_by_user: Loader<UserId, Option<Profile>, ProfileByUserLoader>,
    pub member_type: Loader<MemberTypeId, Option<MemberType>, MemberTypeLoader>,
}

impl DataLoaders {
    pub fn new(store: Arc<EntityStore>) -> Self {
        Self {
            posts_by_user: Loader::new(PostsByUserLoader::new(store.clone())),
            profile_by_user: Loader::new(ProfileByUserLoader::new(store.clone())),
            member_type: Loader::new(MemberTypeLoader::new(store)),
        }
    }
}
