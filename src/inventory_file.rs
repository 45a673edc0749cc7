//! Inventory CSV export reading
//!
//! The export is semicolon-delimited. Stock is usually carried in one combined
//! `Variant SKU,Variant Inventory Qty` column whose cells look like `ABC123,5`;
//! a layout with the two columns already separated is accepted as well.

use crate::error::{Result, SyncError};
use std::io::Read;
use std::path::Path;

pub const SKU_COLUMN: &str = "Variant SKU";
pub const QUANTITY_COLUMN: &str = "Variant Inventory Qty";
pub const COMBINED_COLUMN: &str = "Variant SKU,Variant Inventory Qty";

/// One requested stock level from the input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRow {
    /// 1-based record number (header excluded)
    pub line: usize,
    /// Trimmed SKU
    pub sku: String,
    /// Trimmed, not yet validated quantity
    pub quantity: String,
}

impl InventoryRow {
    pub fn new(line: usize, sku: &str, quantity: &str) -> Self {
        Self {
            line,
            sku: sku.trim().to_string(),
            quantity: quantity.trim().to_string(),
        }
    }
}

enum Layout {
    Combined(usize),
    Split { sku: usize, quantity: usize },
}

impl Layout {
    fn detect(headers: &csv::StringRecord) -> Result<Self> {
        let position = |name: &str| headers.iter().position(|h| h.trim() == name);

        if let Some(index) = position(COMBINED_COLUMN) {
            return Ok(Layout::Combined(index));
        }
        match (position(SKU_COLUMN), position(QUANTITY_COLUMN)) {
            (Some(sku), Some(quantity)) => Ok(Layout::Split { sku, quantity }),
            _ => Err(SyncError::InputFormat(format!(
                "expected a '{}' column or '{}' and '{}' columns, found: {}",
                COMBINED_COLUMN,
                SKU_COLUMN,
                QUANTITY_COLUMN,
                headers.iter().collect::<Vec<_>>().join(";")
            ))),
        }
    }

    fn extract(&self, record: &csv::StringRecord, line: usize) -> InventoryRow {
        match *self {
            Layout::Combined(index) => {
                let cell = record.get(index).unwrap_or_default();
                let (sku, quantity) = cell.split_once(',').unwrap_or((cell, ""));
                InventoryRow::new(line, sku, quantity)
            }
            Layout::Split { sku, quantity } => InventoryRow::new(
                line,
                record.get(sku).unwrap_or_default(),
                record.get(quantity).unwrap_or_default(),
            ),
        }
    }
}

/// Read all inventory rows from a semicolon-delimited file
pub fn read_inventory_file<P: AsRef<Path>>(path: P) -> Result<Vec<InventoryRow>> {
    let path = path.as_ref();
    log::info!("Reading inventory file: {}", path.display());
    let file = std::fs::File::open(path)?;
    read_inventory(file)
}

/// Read inventory rows from any reader
pub fn read_inventory<R: Read>(input: R) -> Result<Vec<InventoryRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .from_reader(input);

    let layout = Layout::detect(reader.headers()?)?;

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result?;
        if record.iter().all(|field| field.trim().is_empty()) {
            log::debug!("Skipping blank record {}", index + 1);
            continue;
        }
        rows.push(layout.extract(&record, index + 1));
    }

    log::info!("Loaded {} inventory rows", rows.len());
    Ok(rows)
}
