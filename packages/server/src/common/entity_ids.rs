//! Typed ID definitions for all domain entities.
//!
//! Users, profiles and posts are keyed by store-generated UUIDs. Member types
//! are a fixed catalogue keyed by a slug, so their id is a closed enum.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// Re-export the core Id type and version marker
pub use super::id::{Id, V7};

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for User entities.
pub struct User;

/// Marker type for Profile entities.
pub struct Profile;

/// Marker type for Post entities.
pub struct Post;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for User entities.
pub type UserId = Id<User>;

/// Typed ID for Profile entities.
pub type ProfileId = Id<Profile>;

/// Typed ID for Post entities.
pub type PostId = Id<Post>;

// ============================================================================
// Member type catalogue
// ============================================================================

/// Id of a member type. Serialized as its lowercase slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberTypeId {
    Basic,
    Business,
}

impl MemberTypeId {
    pub const ALL: [MemberTypeId; 2] = [MemberTypeId::Basic, MemberTypeId::Business];

    pub fn as_str(&self) -> &'static str {
        match self {
            MemberTypeId::Basic => "basic",
            MemberTypeId::Business => "business",
        }
    }
}

impl fmt::Display for MemberTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not a known member type slug.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown member type: {0}")]
pub struct UnknownMemberType(pub String);

impl FromStr for MemberTypeId {
    type Err = UnknownMemberType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(MemberTypeId::Basic),
            "business" => Ok(MemberTypeId::Business),
            other => Err(UnknownMemberType(other.to_string())),
        }
    }
}
