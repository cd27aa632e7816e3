// Social graph API - core crate
//
// Users, profiles, posts and member types in an in-memory store, served over
// REST and GraphQL. Each domain owns its models, actions and GraphQL data
// types; cross-entity rules live in domains::integrity.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
