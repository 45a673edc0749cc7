//! Shop Stock Sync - Shopify inventory levels from CSV
//!
//! This application reads stock quantities from a CSV export, resolves each SKU
//! against the store's product catalog and sets the available quantity at one
//! inventory location.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod inventory_file;
pub mod reconcile;
pub mod report;
pub mod shopify;
pub mod sync;

pub use config::SyncConfig;
pub use error::{Result, SyncError};
pub use inventory_file::{read_inventory_file, InventoryRow};
pub use report::{FailedRow, SyncReport};
pub use shopify::ShopifyClient;
pub use sync::run_sync;
