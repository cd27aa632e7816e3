//! Typed predicates for table scans.
//!
//! Each entity exposes its own filter enum whose variants are the supported
//! match kinds: exact equality on a field, membership of a field in a set of
//! values, and containment of a value in an array field.

/// A predicate evaluated against every row of a table.
pub trait Filter<E>: Send + Sync {
    fn matches(&self, entity: &E) -> bool;
}
