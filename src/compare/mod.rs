// Unit-price ranking for the comparison view.

use std::cmp::Ordering;

use crate::client::api::ApiClient;
use crate::client::error::ApiError;
use crate::client::models::ProductEntry;
use crate::units::price_per_unit;

/// A price entry paired with its computed unit price, ready for display.
#[derive(Debug, Clone)]
pub struct RankedEntry {
    pub entry: ProductEntry,
    pub unit_price: f64,
}

/// Price divided by recorded volume. Entries without a usable volume rank
/// by their raw price.
fn unit_price(entry: &ProductEntry) -> f64 {
    let volume = entry
        .product_volume
        .map(|v| v.to_string())
        .unwrap_or_default();
    price_per_unit(&entry.price.to_string(), &volume)
        .parse()
        .unwrap_or(entry.price)
}

/// Sort entries ascending by unit price. Ties keep their incoming order.
pub fn rank_entries(entries: Vec<ProductEntry>) -> Vec<RankedEntry> {
    let mut ranked: Vec<RankedEntry> = entries
        .into_iter()
        .map(|entry| RankedEntry {
            unit_price: unit_price(&entry),
            entry,
        })
        .collect();
    ranked.sort_by(|a, b| {
        a.unit_price
            .partial_cmp(&b.unit_price)
            .unwrap_or(Ordering::Equal)
    });
    ranked
}

/// Look up a product by name and rank its recorded entries by unit price.
pub fn compare_product(client: &ApiClient, name: &str) -> Result<Vec<RankedEntry>, ApiError> {
    let products = client.filter_products(name)?;
    let product = products
        .first()
        .ok_or_else(|| ApiError::NotFound(format!("no product found with name: {}", name)))?;
    let entries = client.filter_entries(&product.id)?;
    Ok(rank_entries(entries))
}
