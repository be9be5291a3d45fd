use serde::{Deserialize, Serialize};

/// A catalog product. Favorites are stored with the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub price: f64,
    pub thumbnail: Option<String>,
    pub title: String,
    pub brand: String,
    pub description: String,
}

impl Product {
    /// Two products denote the same catalog entry when their ids match,
    /// whatever the other fields hold.
    pub fn same_identity(&self, other: &Product) -> bool {
        self.id == other.id
    }
}
