use std::sync::Arc;

use crate::kernel::EntityStore;
use crate::server::graphql::loaders::DataLoaders;

/// GraphQL request context
///
/// Built once per request by the router middleware. The loaders batch within
/// that request only.
#[derive(Clone)]
pub struct GraphQLContext {
    pub store: Arc<EntityStore>,
    pub loaders: Arc<DataLoaders>,
}

impl juniper::Context for GraphQLContext {}

impl GraphQLContext {
    pub fn new(store: Arc<EntityStore>) -> Self {
        let loaders = Arc::new(DataLoaders::new(store.clone()));
        Self { store, loaders }
    }
}
