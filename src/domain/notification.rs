use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{timestamp, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    pub member_id: i64,
    pub post_id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
}

impl Notification {
    pub fn unread(&self) -> bool {
        self.is_new.unwrap_or(false)
    }
}

impl Resource for Notification {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn is_new(&self) -> Option<bool> {
        self.is_new
    }

    fn set_new(&mut self, is_new: bool) {
        self.is_new = Some(is_new);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_flag_stays_unknown() {
        let json = r#"{"id":1,"memberId":2,"postId":null,"type":"COMMENT","content":"새 댓글","createdAt":"2024-08-01T09:00:00"}"#;
        let n: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(n.is_new(), None);
        assert_eq!(n.kind, "COMMENT");
    }

    #[test]
    fn test_explicit_flag() {
        let json = r#"{"id":1,"memberId":2,"postId":5,"type":"LIKE","content":"x","createdAt":"2024-08-01T09:00:00","isNew":false}"#;
        let n: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(n.is_new(), Some(false));
        assert_eq!(n.post_id, Some(5));
    }
}
