//! Users domain - accounts and the directed subscription graph between them

pub mod actions;
pub mod data;
pub mod models;

pub use data::UserData;
pub use models::User;
