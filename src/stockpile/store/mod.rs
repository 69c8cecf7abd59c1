//! # Storage Layer
//!
//! The [`DataStore`] trait is the only way the rest of the crate touches
//! persisted products. The whole product list is the unit of storage: it is
//! loaded in one call and saved in one call, overwriting what was there.
//!
//! ## Implementations
//!
//! - [`fs::CsvStore`]: Production storage
//!   - Live products in `products.csv`
//!   - Factory defaults in `products_default.csv`
//!   - Both files share the `id,name,aisle,department,price` header
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Counts saves so tests can assert when a command persisted
//!
//! ## Storage Format
//!
//! ```text
//! db/
//! ├── products.csv           # Live products, rewritten on create/reset/done
//! ├── products_default.csv   # Factory defaults, only ever read
//! └── config.json            # Optional file-name overrides
//! ```

use crate::error::Result;
use crate::model::Product;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for product storage.
pub trait DataStore {
    /// Load every product, in file order
    fn load(&self) -> Result<Vec<Product>>;

    /// Replace the stored products with `products`
    fn save(&mut self, products: &[Product]) -> Result<()>;

    /// Overwrite the live products with the factory defaults.
    /// Returns the products that were written.
    fn reset_to_defaults(&mut self) -> Result<Vec<Product>>;

    /// Where the live products live, for messages
    fn location(&self) -> PathBuf;
}
