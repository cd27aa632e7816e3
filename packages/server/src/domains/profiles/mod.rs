//! Profiles domain - one optional profile per user, tied to a member type

pub mod actions;
pub mod data;
pub mod loader;
pub mod models;

pub use data::ProfileData;
pub use models::Profile;
