//! Shopify Admin API client for reading the catalog and setting stock levels
//!
//! Uses async reqwest; one client instance is shared by every request of a run.

mod models;

pub use models::{InventoryLevelUpdate, Product, Variant};

use crate::config::SyncConfig;
use crate::error::{Result, SyncError};
use models::ProductsResponse;

/// Header carrying the Admin API access token
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Shopify Admin API client bound to one store
pub struct ShopifyClient {
    pub(crate) client: reqwest::Client,
    pub(crate) access_token: String,
    pub(crate) base_url: String,
}

impl ShopifyClient {
    /// Create a client from the run configuration
    pub fn new(config: &SyncConfig) -> Result<Self> {
        log::info!("Creating Shopify API client for {}", config.store_url);
        log::debug!("Access token length: {}", config.access_token.len());

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            access_token: config.access_token.clone(),
            base_url: config.store_url.clone(),
        })
    }

    /// Fetch every catalog entry in one request
    ///
    /// A non-2xx status is returned as [`SyncError::HttpStatus`].
    pub async fn fetch_products(&self) -> Result<Vec<Product>> {
        let url = format!("{}/products.json", self.base_url);
        log::info!("Fetching product catalog from {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::error!("Catalog fetch failed with status {}: {}", status, body);
            return Err(SyncError::HttpStatus(status));
        }

        let text = response.text().await?;
        let file: ProductsResponse = serde_json::from_str(&text)?;

        log::info!("Fetched {} products", file.products.len());
        Ok(file.products)
    }

    /// Set the available quantity of one inventory item at one location
    pub async fn set_inventory_level(&self, update: &InventoryLevelUpdate) -> Result<()> {
        let url = format!("{}/inventory_levels/set.json", self.base_url);
        log::debug!(
            "Setting inventory item {} at location {} to {}",
            update.inventory_item_id,
            update.location_id,
            update.available
        );

        let response = self
            .client
            .post(&url)
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .json(update)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::warn!(
                "Inventory update for item {} failed with status {}: {}",
                update.inventory_item_id,
                status,
                body
            );
            return Err(SyncError::HttpStatus(status));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
