//! SKU reconciliation against the fetched catalog
//!
//! Matching is a linear scan in catalog fetch order comparing trimmed SKUs
//! exactly. When several variants share a SKU the first one encountered is used.

use crate::error::{Result, SyncError};
use crate::inventory_file::InventoryRow;
use crate::shopify::{InventoryLevelUpdate, Product, Variant};
use std::collections::HashMap;

/// Catalog snapshot in fetch order
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Number of catalog entries
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterate over all variants, entry by entry
    pub fn variants(&self) -> impl Iterator<Item = &Variant> {
        self.products.iter().flat_map(|p| p.variants.iter())
    }

    /// Find the first variant whose trimmed SKU equals `sku`
    pub fn find_variant(&self, sku: &str) -> Option<&Variant> {
        let sku = sku.trim();
        if sku.is_empty() {
            return None;
        }

        let mut matches = self
            .variants()
            .filter(|variant| variant.normalized_sku() == Some(sku));
        let first = matches.next()?;

        let others = matches.count();
        if others > 0 {
            log::warn!(
                "SKU {} matches {} variants, using the first (inventory item {:?})",
                sku,
                others + 1,
                first.inventory_item_id
            );
        }
        Some(first)
    }

    /// SKUs carried by more than one variant, in first-seen order
    pub fn duplicate_skus(&self) -> Vec<String> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut order = Vec::new();
        for sku in self.variants().filter_map(Variant::normalized_sku) {
            if sku.is_empty() {
                continue;
            }
            let count = counts.entry(sku).or_insert(0);
            *count += 1;
            if *count == 2 {
                order.push(sku.to_string());
            }
        }
        order
    }
}

/// Coerce a raw quantity cell to an integer
pub fn parse_quantity(raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    trimmed.parse::<i64>().map_err(|_| {
        SyncError::Validation(format!("quantity '{}' is not an integer", trimmed))
    })
}

/// Resolve one input row into the update that should be sent for it
pub fn plan_update(
    catalog: &Catalog,
    location_id: i64,
    row: &InventoryRow,
) -> Result<InventoryLevelUpdate> {
    let variant = catalog
        .find_variant(&row.sku)
        .ok_or_else(|| SyncError::NotFound(row.sku.clone()))?;

    let inventory_item_id = variant.inventory_item_id.ok_or_else(|| {
        SyncError::Validation(format!("variant for SKU {} has no inventory item id", row.sku))
    })?;

    let available = parse_quantity(&row.quantity)?;

    Ok(InventoryLevelUpdate {
        location_id,
        inventory_item_id,
        available,
    })
}
