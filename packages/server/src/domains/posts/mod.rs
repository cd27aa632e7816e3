//! Posts domain - content authored by users

pub mod actions;
pub mod data;
pub mod loader;
pub mod models;

pub use data::PostData;
pub use models::Post;
