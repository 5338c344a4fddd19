use serde::{Deserialize, Serialize};

/// Entry of the static specialty-drink catalog. Unlike the REST payloads
/// this file uses snake_case keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialtyDrink {
    pub id: i64,
    pub region_id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub degree: f64,
    pub sweetness: i32,
    pub cost: i64,
    pub description: String,
    pub image_url: String,
    pub create_at: String,
}
