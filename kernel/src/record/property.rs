use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub max_guests: i32,
    pub base_price_per_night: f64,
}
