// HTTP routes
pub mod error;
pub mod graphql;
pub mod health;
pub mod member_types;
pub mod posts;
pub mod profiles;
pub mod users;

pub use error::{ApiError, ApiJson};
pub use graphql::*;
pub use health::*;
pub use member_types::*;
pub use posts::*;
pub use profiles::*;
pub use users::*;
