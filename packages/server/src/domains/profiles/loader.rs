use dataloader::BatchFn;
use std::collections::HashMap;
use std::sync::Arc;

use crate::common::UserId;
use crate::domains::graph;
use crate::domains::profiles::models::Profile;
use crate::kernel::EntityStore;

/// Batches profile lookups by owning user.
pub struct ProfileByUserLoader {
    pub store: Arc<EntityStore>,
}

impl ProfileByUserLoader {
    pub fn new(store: Arc<EntityStore>) -> Self {
        Self { store }
    }
}

impl BatchFn<UserId, Option<Profile>> for ProfileByUserLoader {
    fn load(
        &mut self,
        keys: &[UserId],
    ) -> impl std::future::Future<Output = HashMap<UserId, Option<Profile>>> {
        let store = self.store.clone();
        let keys = keys.to_vec();
        async move {
            let tables = store.read().await;
            graph::profile_by_user(&tables, &keys)
        }
    }
}
