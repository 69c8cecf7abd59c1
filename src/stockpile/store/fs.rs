use super::DataStore;
use crate::error::{InventoryError, Result};
use crate::model::{Product, FIELDS};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

pub struct CsvStore {
    live: PathBuf,
    defaults: PathBuf,
}

impl CsvStore {
    pub fn new(live: PathBuf, defaults: PathBuf) -> Self {
        Self { live, defaults }
    }

    pub fn live_path(&self) -> &Path {
        &self.live
    }

    pub fn defaults_path(&self) -> &Path {
        &self.defaults
    }
}

impl DataStore for CsvStore {
    fn load(&self) -> Result<Vec<Product>> {
        read_products(&self.live)
    }

    fn save(&mut self, products: &[Product]) -> Result<()> {
        write_products(&self.live, products)
    }

    fn reset_to_defaults(&mut self) -> Result<Vec<Product>> {
        reset_products_file(&self.live, &self.defaults)
    }

    fn location(&self) -> PathBuf {
        self.live.clone()
    }
}

/// Reads every product from a CSV file with an `id,name,aisle,department,price` header.
///
/// Columns are matched by header name, so their order in the file does not matter
/// and unknown columns are ignored. Every id must be a positive integer.
pub fn read_products(path: &Path) -> Result<Vec<Product>> {
    if !path.exists() {
        return Err(InventoryError::MissingFile(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    let mut record = csv::StringRecord::new();
    let mut products = Vec::new();
    while reader.read_record(&mut record).map_err(record_error)? {
        let line = record.position().map(|pos| pos.line()).unwrap_or(0);
        let product: Product = record
            .deserialize(Some(&headers))
            .map_err(|err| match record_error(err) {
                InventoryError::MalformedRecord { reason, .. } => {
                    InventoryError::MalformedRecord { line, reason }
                }
                other => other,
            })?;
        if product.numeric_id().is_err() {
            return Err(InventoryError::MalformedRecord {
                line,
                reason: format!("id '{}' is not a positive integer", product.id),
            });
        }
        products.push(product);
    }

    debug!("Loaded {} products from {}", products.len(), path.display());
    Ok(products)
}

/// Overwrites `path` with a header row and one row per product.
/// The header is written even when there are no products.
pub fn write_products(path: &Path, products: &[Product]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(InventoryError::Io)?;
        }
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_path(path)?;
    writer.write_record(FIELDS)?;
    for product in products {
        writer.write_record(product.as_record())?;
    }
    writer.flush().map_err(InventoryError::Io)?;

    debug!("Wrote {} products to {}", products.len(), path.display());
    Ok(())
}

/// Replaces the live file with the contents of the defaults file.
pub fn reset_products_file(live: &Path, defaults: &Path) -> Result<Vec<Product>> {
    let products = read_products(defaults)?;
    write_products(live, &products)?;
    info!(
        "Reset {} from {} ({} products)",
        live.display(),
        defaults.display(),
        products.len()
    );
    Ok(products)
}

fn record_error(err: csv::Error) -> InventoryError {
    let line = err.position().map(|pos| pos.line()).unwrap_or(0);
    match err.kind() {
        csv::ErrorKind::Deserialize { err: inner, .. } => InventoryError::MalformedRecord {
            line,
            reason: inner.to_string(),
        },
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => InventoryError::MalformedRecord {
            line,
            reason: format!("expected {} fields, found {}", expected_len, len),
        },
        _ => InventoryError::Csv(err),
    }
}
