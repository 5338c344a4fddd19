use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{timestamp, Resource};

/// Display name for comments written anonymously.
pub const ANONYMOUS_NAME: &str = "익명";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub member_id: i64,
    pub member_name: String,
    pub post_id: i64,
    pub content: String,
    #[serde(default)]
    pub anonymous: bool,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "timestamp::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Comment {
    /// Local stand-in shown while the write request is in flight.
    pub fn placeholder(local_id: i64, post_id: i64, content: &str, anonymous: bool) -> Self {
        Self {
            id: local_id,
            member_id: 0,
            member_name: if anonymous {
                ANONYMOUS_NAME.to_string()
            } else {
                String::new()
            },
            post_id,
            content: content.to_string(),
            anonymous,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Hides the author when the comment was written anonymously.
    pub fn anonymize(mut self) -> Self {
        self.anonymous = true;
        self.member_name = ANONYMOUS_NAME.to_string();
        self
    }

    pub fn display_name(&self) -> &str {
        if self.anonymous {
            ANONYMOUS_NAME
        } else {
            &self.member_name
        }
    }
}

impl Resource for Comment {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Body of `POST posts/{id}/comments`.
#[derive(Debug, Clone, Serialize)]
pub struct CommentWrite<'a> {
    pub content: &'a str,
}
