//! Shopify Admin REST payloads

use serde::{Deserialize, Serialize};

/// Catalog entry as returned by `products.json`
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

/// Sellable variant of a product
#[derive(Debug, Clone, Deserialize)]
pub struct Variant {
    #[serde(default)]
    pub id: Option<u64>,
    /// Shopify returns `null` for variants without a SKU
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub inventory_item_id: Option<i64>,
}

impl Variant {
    /// SKU with incidental whitespace removed
    pub fn normalized_sku(&self) -> Option<&str> {
        self.sku.as_deref().map(str::trim)
    }
}

/// Response body of `GET products.json`
#[derive(Debug, Deserialize)]
pub(crate) struct ProductsResponse {
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Request body of `POST inventory_levels/set.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryLevelUpdate {
    pub location_id: i64,
    pub inventory_item_id: i64,
    pub available: i64,
}
