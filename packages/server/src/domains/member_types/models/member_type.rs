use serde::{Deserialize, Serialize};

use crate::common::{EntityKind, MemberTypeId};
use crate::kernel::{Entity, Filter};

/// Member type model - seeded catalogue row, never created or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberType {
    pub id: MemberTypeId,
    pub discount: i32,
    pub month_posts_limit: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MemberTypeChanges {
    pub discount: Option<i32>,
    pub month_posts_limit: Option<i32>,
}

impl MemberTypeChanges {
    pub fn apply(self, member_type: &mut MemberType) {
        if let Some(discount) = self.discount {
            member_type.discount = discount;
        }
        if let Some(month_posts_limit) = self.month_posts_limit {
            member_type.month_posts_limit = month_posts_limit;
        }
    }
}

impl Entity for MemberType {
    type Key = MemberTypeId;

    const KIND: EntityKind = EntityKind::MemberType;

    fn key(&self) -> MemberTypeId {
        self.id
    }
}

#[derive(Debug, Clone)]
pub enum MemberTypeFilter {
    Id(MemberTypeId),
    IdIn(Vec<MemberTypeId>),
}

impl Filter<MemberType> for MemberTypeFilter {
    fn matches(&self, member_type: &MemberType) -> bool {
        match self {
            MemberTypeFilter::Id(id) => member_type.id == *id,
            MemberTypeFilter::IdIn(ids) => ids.contains(&member_type.id),
        }
    }
}
