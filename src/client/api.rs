use log::{debug, info};
use serde_json::Value;

use crate::client::error::ApiError;
use crate::client::models::{Product, ProductEntry, Shop};

/// Blocking client for the price database REST API.
pub struct ApiClient {
    agent: ureq::Agent,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            agent: ureq::Agent::new_with_defaults(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn create_product(&self, body: &Value) -> Result<Value, ApiError> {
        self.post("/products", body)
    }

    pub fn create_shop(&self, body: &Value) -> Result<Value, ApiError> {
        self.post("/shops", body)
    }

    pub fn create_entry(&self, body: &Value) -> Result<Value, ApiError> {
        self.post("/product-entries", body)
    }

    pub fn filter_products(&self, name: &str) -> Result<Vec<Product>, ApiError> {
        let body = self.get("/products/filter", &[("name", name)])?;
        parse_products(&body)
    }

    pub fn filter_shops(&self, name: &str) -> Result<Vec<Shop>, ApiError> {
        let body = self.get("/shops/filter", &[("name", name)])?;
        parse_shops(&body)
    }

    pub fn filter_entries(&self, product_id: &str) -> Result<Vec<ProductEntry>, ApiError> {
        let body = self.get("/product-entries/filter", &[("product_id", product_id)])?;
        parse_entries(&body)
    }

    pub fn delete_entry(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/product-entries/{}", id);
        info!("DELETE {}", path);
        self.agent
            .delete(&self.url(&path))
            .call()
            .map_err(|err| map_transport_err(err, &path))?;
        Ok(())
    }

    fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        info!("POST {}", path);
        debug!("POST {} body: {}", path, body);
        let response = self
            .agent
            .post(&self.url(path))
            .send_json(body)
            .map_err(|err| map_transport_err(err, path))?;
        let text = response
            .into_body()
            .read_to_string()
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        serde_json::from_str(&text).map_err(|err| ApiError::Decode(err.to_string()))
    }

    fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<String, ApiError> {
        info!("GET {}", path);
        let mut request = self.agent.get(&self.url(path));
        for (key, value) in query {
            request = request.query(*key, *value);
        }
        let response = request
            .call()
            .map_err(|err| map_transport_err(err, path))?;
        response
            .into_body()
            .read_to_string()
            .map_err(|err| ApiError::Transport(err.to_string()))
    }
}

fn map_transport_err(err: ureq::Error, path: &str) -> ApiError {
    match err {
        ureq::Error::StatusCode(code) => ApiError::Status(code, path.to_string()),
        other => ApiError::Transport(other.to_string()),
    }
}

// Decoding is kept separate from transport so it can run on fixtures.

pub fn parse_products(body: &str) -> Result<Vec<Product>, ApiError> {
    serde_json::from_str(body).map_err(|err| ApiError::Decode(err.to_string()))
}

pub fn parse_shops(body: &str) -> Result<Vec<Shop>, ApiError> {
    serde_json::from_str(body).map_err(|err| ApiError::Decode(err.to_string()))
}

pub fn parse_entries(body: &str) -> Result<Vec<ProductEntry>, ApiError> {
    serde_json::from_str(body).map_err(|err| ApiError::Decode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::Unit;

    #[test]
    fn test_parse_products_fixture() {
        let body = r#"[
            {"id": "p-1", "name": "banana", "notes": null, "tags": ["fruit"]},
            {"id": "p-2", "name": "bread"}
        ]"#;
        let products = parse_products(body).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "banana");
        assert_eq!(products[0].tags.as_deref(), Some(["fruit".to_string()].as_slice()));
        assert!(products[1].notes.is_none());
    }

    #[test]
    fn test_parse_shops_fixture() {
        let body = r#"[{"id": "s-1", "name": "tesco", "notes": "open late"}]"#;
        let shops = parse_shops(body).unwrap();
        assert_eq!(shops[0].name, "tesco");
        assert_eq!(shops[0].notes.as_deref(), Some("open late"));
    }

    #[test]
    fn test_parse_entries_fixture() {
        let body = r#"[
            {"id": "e-1", "product_id": "p-1", "price": 42.0,
             "product_volume": 0.5, "unit": "kg", "shop_name": "tesco",
             "date": "2026-08-05", "notes": null},
            {"id": "e-2", "product_id": "p-1", "price": 30.0, "unit": "ks"}
        ]"#;
        let entries = parse_entries(body).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].unit, Unit::Kg);
        assert_eq!(entries[0].product_volume, Some(0.5));
        assert_eq!(entries[1].unit, Unit::Ks);
    }

    #[test]
    fn test_parse_rejects_malformed_body() {
        assert!(matches!(
            parse_entries("{not json"),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("http://localhost:4000/");
        assert_eq!(client.url("/products"), "http://localhost:4000/products");
    }
}
