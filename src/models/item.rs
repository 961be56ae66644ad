use serde::{Deserialize, Serialize};

/// A catalog item. The id comes from the caller on create and is not checked
/// for uniqueness: two stored items may share an id, and lookups resolve to
/// the first one in storage order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
}
