use serde::{Deserialize, Serialize};

/// Catalog item. Read-only from the dashboard's perspective; stock and
/// status are maintained by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vehicle {
    pub id: String,

    #[serde(rename = "modelName")]
    pub model_name: String,

    pub version: String,
    pub category: String,
    pub color: String,

    #[serde(rename = "batteryCapacity")]
    pub battery_capacity: f64,

    #[serde(rename = "rangePerCharge")]
    pub range_per_charge: f64,

    #[serde(rename = "basePrice")]
    pub base_price: f64,

    #[serde(rename = "currentStock")]
    pub current_stock: i64,

    pub status: String,

    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
}

impl Vehicle {
    /// "Model version" display label used in tables and draft rows.
    pub fn display_label(&self) -> String {
        if self.version.trim().is_empty() {
            self.model_name.clone()
        } else {
            format!("{} {}", self.model_name, self.version)
        }
    }
}
