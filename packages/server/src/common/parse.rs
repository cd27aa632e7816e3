//! Boundary parsing of raw id strings.
//!
//! REST path parameters, JSON bodies and GraphQL arguments all carry ids as
//! strings. They are turned into typed ids here, before any store access.
//! A malformed *target* id is `InvalidId`; a malformed *foreign* id can never
//! resolve, so it is reported as `InvalidReference`. Member type slugs are
//! never malformed, only unknown: as a target that is `NotFound`.

use super::entity_ids::{Id, MemberTypeId};
use super::errors::{DomainError, DomainResult};
use super::types::EntityKind;

pub fn parse_id<T>(raw: &str, kind: EntityKind) -> DomainResult<Id<T>> {
    Id::parse_hyphenated(raw).ok_or_else(|| DomainError::invalid_id(kind, raw))
}

pub fn parse_reference<T>(raw: &str, kind: EntityKind) -> DomainResult<Id<T>> {
    Id::parse_hyphenated(raw).ok_or_else(|| DomainError::invalid_reference(kind, raw))
}

pub fn parse_member_type_id(raw: &str) -> DomainResult<MemberTypeId> {
    raw.parse()
        .map_err(|_| DomainError::not_found(EntityKind::MemberType, raw))
}

pub fn parse_member_type_reference(raw: &str) -> DomainResult<MemberTypeId> {
    raw.parse()
        .map_err(|_| DomainError::invalid_reference(EntityKind::MemberType, raw))
}
