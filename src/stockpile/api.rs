//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every inventory operation, whatever UI drives it.
//!
//! It owns the session's in-memory product list. Command functions borrow that
//! list mutably for the length of one call, so nothing else can alias it.
//!
//! ## Generic Over DataStore
//!
//! `InventoryApi<S: DataStore>` is generic over the storage backend:
//! - Production: `InventoryApi<CsvStore>`
//! - Testing: `InventoryApi<InMemoryStore>`
//!
//! API tests check dispatch and persistence timing, not command logic.

use crate::commands;
use crate::error::Result;
use crate::model::{Product, ProductDraft};
use crate::store::DataStore;
use log::debug;

pub struct InventoryApi<S: DataStore> {
    store: S,
    products: Vec<Product>,
}

impl<S: DataStore> InventoryApi<S> {
    /// Loads the products from `store`. Fails if the store cannot be read.
    pub fn open(store: S) -> Result<Self> {
        let products = store.load()?;
        debug!(
            "Opened {} with {} products",
            store.location().display(),
            products.len()
        );
        Ok(Self { store, products })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn list_products(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.products)
    }

    pub fn show_product(&self, id: &str) -> Result<commands::CmdResult> {
        commands::show::run(&self.products, id.trim())
    }

    pub fn create_product(&mut self, draft: ProductDraft) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, &mut self.products, draft)
    }

    pub fn update_product(
        &mut self,
        id: &str,
        new_id: &str,
        draft: ProductDraft,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.products, id.trim(), new_id.trim(), draft)
    }

    pub fn destroy_product(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::destroy::run(&mut self.products, id.trim())
    }

    pub fn reset(&mut self) -> Result<commands::CmdResult> {
        commands::reset::run(&mut self.store)
    }

    /// Persists the in-memory products, replacing whatever the store holds.
    pub fn save(&mut self) -> Result<commands::CmdResult> {
        self.store.save(&self.products)?;
        let mut result = commands::CmdResult::default();
        result.add_message(commands::CmdMessage::info(format!(
            "Saved {} products to {}",
            self.products.len(),
            self.store.location().display()
        )));
        Ok(result)
    }

    /// Id the next create would assign.
    pub fn next_id(&self) -> Result<u64> {
        commands::helpers::next_id(&self.products)
    }

    /// Validates a replacement id for the product currently identified by `id`.
    pub fn check_new_id(&self, id: &str, new_id: &str) -> Result<String> {
        let position = commands::helpers::find_position(&self.products, id.trim())?;
        commands::helpers::check_new_id(&self.products, position, new_id.trim())
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
