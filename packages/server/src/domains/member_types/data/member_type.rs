use juniper::{GraphQLInputObject, GraphQLObject};

use crate::domains::member_types::models::{MemberType, MemberTypeChanges};

/// GraphQL type for a member type
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(name = "MemberType", description = "A membership tier from the fixed catalogue")]
pub struct MemberTypeData {
    /// Slug: `basic` or `business`
    pub id: String,
    pub discount: i32,
    pub month_posts_limit: i32,
}

impl From<MemberType> for MemberTypeData {
    fn from(member_type: MemberType) -> Self {
        Self {
            id: member_type.id.to_string(),
            discount: member_type.discount,
            month_posts_limit: member_type.month_posts_limit,
        }
    }
}

/// Input for updating a member type
#[derive(Debug, Clone, GraphQLInputObject)]
pub struct ChangeMemberTypeInput {
    pub id: String,
    pub discount: Option<i32>,
    pub month_posts_limit: Option<i32>,
}

impl ChangeMemberTypeInput {
    pub fn into_parts(self) -> (String, MemberTypeChanges) {
        let changes = MemberTypeChanges {
            discount: self.discount,
            month_posts_limit: self.month_posts_limit,
        };
        (self.id, changes)
    }
}
