use dataloader::BatchFn;
use std::collections::HashMap;
use std::sync::Arc;

use crate::common::UserId;
use crate::domains::graph;
use crate::domains::posts::models::Post;
use crate::kernel::EntityStore;

/// Batches post lookups by author.
pub struct PostsByUserLoader {
    pub store: Arc<EntityStore>,
}

impl PostsByUserLoader {
    pub fn new(store: Arc<EntityStore>) -> Self {
        Self { store }
    }
}

impl BatchFn<UserId, Vec<Post>> for PostsByUserLoader {
    fn load(
        &mut self,
        keys: &[UserId],
    ) -> impl std::future::Future<Output = HashMap<UserId, Vec<Post>>> {
        let store = self.store.clone();
        let keys = keys.to_vec();
        async move {
            let tables = store.read().await;
            graph::posts_by_user(&tables, &keys)
        }
    }
}
