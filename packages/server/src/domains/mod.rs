// Business domains
pub mod member_types;
pub mod posts;
pub mod profiles;
pub mod users;

// Cross-entity rules and relation resolution
pub mod graph;
pub mod integrity;
