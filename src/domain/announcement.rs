use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{timestamp, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Announcement {
    pub fn placeholder(local_id: i64, title: &str, content: &str, image_url: Option<&str>) -> Self {
        Self {
            id: local_id,
            title: title.to_string(),
            content: content.to_string(),
            image_url: image_url.map(String::from),
            created_at: Utc::now(),
        }
    }

    pub fn display_date(&self) -> String {
        self.created_at.format("%Y.%m.%d").to_string()
    }
}

impl Resource for Announcement {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Body of `POST announcements`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementWrite<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub image_url: &'a str,
}
