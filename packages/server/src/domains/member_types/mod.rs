//! Member types domain - the fixed membership catalogue

pub mod actions;
pub mod data;
pub mod loader;
pub mod models;

pub use data::MemberTypeData;
pub use models::MemberType;
