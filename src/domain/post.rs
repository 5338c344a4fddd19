use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{timestamp, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub tag_id: i64,
    pub tag_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drink {
    pub id: i64,
    pub place_name: String,
    pub name: String,
    pub drink_type: String,
    pub degree: f64,
    pub sweetness: i32,
    pub cost: i64,
    pub description: String,
    pub image_url: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PostType {
    Review,
    Advertisement,
}

impl PostType {
    pub fn label(self) -> &'static str {
        match self {
            PostType::Review => "리뷰",
            PostType::Advertisement => "광고",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetail {
    pub id: i64,
    pub member_id: i64,
    pub member_name: String,
    pub drink: Drink,
    #[serde(rename = "type")]
    pub kind: PostType,
    pub content: String,
    pub rating: f64,
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub view_count: u64,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl PostDetail {
    pub fn headline(&self) -> String {
        format!("[{}] {}", self.kind.label(), self.drink.name)
    }
}

impl Resource for PostDetail {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
