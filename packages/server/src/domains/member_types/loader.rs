use dataloader::BatchFn;
use std::collections::HashMap;
use std::sync::Arc;

use crate::common::MemberTypeId;
use crate::domains::graph;
use crate::domains::member_types::models::MemberType;
use crate::kernel::EntityStore;

/// Batches member type lookups by id.
pub struct MemberTypeLoader {
    pub store: Arc<EntityStore>,
}

impl MemberTypeLoader {
    pub fn new(store: Arc<EntityStore>) -> Self {
        Self { store }
    }
}

impl BatchFn<MemberTypeId, Option<MemberType>> for MemberTypeLoader {
    fn load(
        &mut self,
        keys: &[MemberTypeId],
    ) -> impl std::future::Future<Output = HashMap<MemberTypeId, Option<MemberType>>> {
        let store = self.store.clone();
        let keys = keys.to_vec();
        async move {
            let tables = store.read().await;
            graph::member_types_by_id(&tables, &keys)
        }
    }
}
