//! One sync run: fetch the catalog, reconcile rows, push updates, aggregate

use crate::config::SyncConfig;
use crate::dispatch::{dispatch_updates, PlannedUpdate};
use crate::error::Result;
use crate::inventory_file::InventoryRow;
use crate::reconcile::{plan_update, Catalog};
use crate::report::SyncReport;
use crate::shopify::ShopifyClient;
use std::sync::Arc;

/// Outcome slot per input row, filled either by reconciliation or dispatch
enum RowState {
    Failed(String),
    Pending,
}

/// Run a full sync of `rows` against the store
///
/// A failed catalog fetch is returned as an error before any update is sent.
/// Every other failure is recorded in the report for its row.
pub async fn run_sync(
    client: Arc<ShopifyClient>,
    config: &SyncConfig,
    rows: &[InventoryRow],
) -> Result<SyncReport> {
    let catalog = Catalog::new(client.fetch_products().await?);
    log::info!(
        "Catalog loaded: {} products, {} variants",
        catalog.len(),
        catalog.variants().count()
    );

    let duplicates = catalog.duplicate_skus();
    if !duplicates.is_empty() {
        log::warn!(
            "{} SKUs appear on more than one variant, the first match is used: {}",
            duplicates.len(),
            duplicates.join(", ")
        );
    }

    let mut states = Vec::with_capacity(rows.len());
    let mut planned = Vec::new();
    for row in rows {
        match plan_update(&catalog, config.location_id, row) {
            Ok(update) => {
                log::debug!(
                    "Row {}: SKU {} -> inventory item {}",
                    row.line,
                    row.sku,
                    update.inventory_item_id
                );
                planned.push(PlannedUpdate {
                    sku: row.sku.clone(),
                    update,
                });
                states.push(RowState::Pending);
            }
            Err(e) => {
                log::warn!("Row {}: SKU {} skipped: {}", row.line, row.sku, e);
                states.push(RowState::Failed(e.to_string()));
            }
        }
    }

    let mut outcomes = dispatch_updates(client, planned, config.max_concurrency())
        .await
        .into_iter();

    let mut report = SyncReport::new();
    for (row, state) in rows.iter().zip(states) {
        match state {
            RowState::Failed(reason) => report.record_failure(row.sku.clone(), reason),
            RowState::Pending => match outcomes.next() {
                Some((sku, Ok(()))) => report.record_success(sku),
                Some((sku, Err(e))) => report.record_failure(sku, e.to_string()),
                None => report.record_failure(row.sku.clone(), "Error: update was not dispatched"),
            },
        }
    }

    log::info!(
        "Sync finished: {} succeeded, {} failed",
        report.succeeded.len(),
        report.failed.len()
    );
    Ok(report)
}
