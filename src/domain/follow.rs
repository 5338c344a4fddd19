use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{timestamp, Resource};

/// A tag followed by a member. The follow list comes back for every member
/// at once; callers narrow it to the signed-in one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowTag {
    pub member_id: i64,
    pub tag_id: i64,
    pub tag_name: String,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
}

impl FollowTag {
    pub fn label(&self) -> String {
        format!("#{}", self.tag_name)
    }
}

impl Resource for FollowTag {
    /// `(member_id, tag_id)`: the same tag followed by two members is two
    /// entries.
    type Id = (i64, i64);

    fn id(&self) -> (i64, i64) {
        (self.member_id, self.tag_id)
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at.unwrap_or_default()
    }
}
