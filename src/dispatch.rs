//! Concurrent dispatch of inventory level updates
//!
//! Every update runs as its own tokio task. All handles are joined before the
//! caller sees any outcome; outcomes come back in the order they were planned.

use crate::error::{Result, SyncError};
use crate::shopify::{InventoryLevelUpdate, ShopifyClient};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

/// An update resolved from one input row
#[derive(Debug, Clone)]
pub struct PlannedUpdate {
    pub sku: String,
    pub update: InventoryLevelUpdate,
}

/// Send all updates concurrently and wait for every one of them
///
/// `max_concurrency` bounds the number of requests in flight; `None` launches
/// everything at once. A limit of zero admits no task, so it is treated as
/// unbounded. Each planned update yields exactly one outcome.
pub async fn dispatch_updates(
    client: Arc<ShopifyClient>,
    planned: Vec<PlannedUpdate>,
    max_concurrency: Option<usize>,
) -> Vec<(String, Result<()>)> {
    let max_concurrency = match max_concurrency {
        Some(0) => {
            log::warn!("Concurrency limit of 0 ignored, dispatching without a limit");
            None
        }
        limit => limit,
    };
    let limiter = max_concurrency.map(|limit| Arc::new(Semaphore::new(limit)));
    log::info!(
        "Dispatching {} inventory updates (concurrency limit: {})",
        planned.len(),
        max_concurrency.map_or_else(|| "none".to_string(), |l| l.to_string())
    );

    let mut handles = Vec::with_capacity(planned.len());
    for PlannedUpdate { sku, update } in planned {
        let client = Arc::clone(&client);
        let limiter = limiter.clone();
        let handle = tokio::spawn(async move {
            let _permit = match limiter {
                Some(ref semaphore) => Some(
                    semaphore
                        .acquire()
                        .await
                        .map_err(|e| SyncError::Task(e.to_string()))?,
                ),
                None => None,
            };
            client.set_inventory_level(&update).await
        });
        handles.push((sku, handle));
    }

    join_updates(handles).await
}

/// Await every update task in planned order; a task that did not finish
/// becomes a failure for its SKU
async fn join_updates(
    handles: Vec<(String, JoinHandle<Result<()>>)>,
) -> Vec<(String, Result<()>)> {
    let mut outcomes = Vec::with_capacity(handles.len());
    for (sku, handle) in handles {
        let outcome = match handle.await {
            Ok(result) => result,
            Err(e) => {
                log::error!("Update task for SKU {} did not complete: {}", sku, e);
                Err(SyncError::Task(format!("update task aborted: {}", e)))
            }
        };
        match &outcome {
            Ok(()) => log::info!("Updated SKU {}", sku),
            Err(e) => log::warn!("Failed to update SKU {}: {}", sku, e),
        }
        outcomes.push((sku, outcome));
    }
    outcomes
}
