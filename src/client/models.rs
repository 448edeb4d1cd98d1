use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical units the API stores quantities in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "ks")]
    Ks,
    #[serde(rename = "kg")]
    Kg,
    #[serde(rename = "l")]
    L,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Ks => write!(f, "ks"),
            Unit::Kg => write!(f, "kg"),
            Unit::L => write!(f, "l"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shop {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// One recorded price observation for a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductEntry {
    pub id: String,
    pub product_id: String,
    pub price: f64,
    #[serde(default)]
    pub product_volume: Option<f64>,
    pub unit: Unit,
    #[serde(default)]
    pub shop_name: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_round_trips_through_serde() {
        for (unit, text) in [(Unit::Kg, "\"kg\""), (Unit::L, "\"l\""), (Unit::Ks, "\"ks\"")] {
            assert_eq!(serde_json::to_string(&unit).unwrap(), text);
            let parsed: Unit = serde_json::from_str(text).unwrap();
            assert_eq!(parsed, unit);
        }
    }

    #[test]
    fn test_entry_deserializes_with_optional_fields_missing() {
        let body = r#"{
            "id": "e-1",
            "product_id": "p-1",
            "price": 42.0,
            "unit": "kg"
        }"#;
        let entry: ProductEntry = serde_json::from_str(body).unwrap();
        assert_eq!(entry.price, 42.0);
        assert_eq!(entry.unit, Unit::Kg);
        assert!(entry.product_volume.is_none());
        assert!(entry.shop_name.is_none());
    }
}
