// GraphQL schema and context
pub mod context;
pub mod depth;
pub mod error;
pub mod loaders;
pub mod schema;

pub use context::*;
pub use depth::DepthLimit;
pub use loaders::DataLoaders;
pub use schema::*;
