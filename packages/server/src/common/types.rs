// Common types used across multiple domains and layers
//
// These types are shared between the kernel and domain layers to avoid
// circular dependencies while maintaining type safety.

use std::fmt;

/// The four stored entity kinds. Used to phrase errors and log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Profile,
    Post,
    MemberType,
}

impl EntityKind {
    /// Lowercase noun, e.g. "member type".
    pub fn noun(&self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Profile => "profile",
            EntityKind::Post => "post",
            EntityKind::MemberType => "member type",
        }
    }

    /// Sentence-case noun, e.g. "Member type".
    pub fn title(&self) -> &'static str {
        match self {
            EntityKind::User => "User",
            EntityKind::Profile => "Profile",
            EntityKind::Post => "Post",
            EntityKind::MemberType => "Member type",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}
