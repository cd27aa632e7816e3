use crate::common::MemberTypeId;
use crate::domains::member_types::models::MemberType;

/// The member type catalogue every store starts with.
pub fn default_member_types() -> Vec<MemberType> {
    vec![
        MemberType {
            id: MemberTypeId::Basic,
            discount: 0,
            month_posts_limit: 20,
        },
        MemberType {
            id: MemberTypeId::Business,
            discount: 5,
            month_posts_limit: 100,
        },
    ]
}
