//! Kernel module - the entity store and its supporting pieces.

pub mod filter;
pub mod seed;
pub mod store;

pub use filter::Filter;
pub use seed::default_member_types;
pub use store::{Entity, EntityStore, Generated, StoreError, Table, Tables};
