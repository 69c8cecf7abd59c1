use super::DataStore;
use crate::error::Result;
use crate::model::Product;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    products: Vec<Product>,
    defaults: Vec<Product>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Self::default()
        }
    }

    pub fn with_defaults(mut self, defaults: Vec<Product>) -> Self {
        self.defaults = defaults;
        self
    }

    /// What a `load` would return right now.
    pub fn stored(&self) -> &[Product] {
        &self.products
    }

    /// How many times `save` or `reset_to_defaults` wrote the products.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }

    fn save(&mut self, products: &[Product]) -> Result<()> {
        self.products = products.to_vec();
        self.saves += 1;
        Ok(())
    }

    fn reset_to_defaults(&mut self) -> Result<Vec<Product>> {
        self.products = self.defaults.clone();
        self.saves += 1;
        Ok(self.defaults.clone())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("<memory>")
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::ProductDraft;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_product(mut self, id: &str, name: &str) -> Self {
            let product = Product::new(id, ProductDraft::new(name, "1", "1", "1.0"));
            self.store.products.push(product);
            self
        }

        pub fn with_products(mut self, count: usize) -> Self {
            for i in 0..count {
                let id = (self.store.products.len() + 1).to_string();
                let name = format!("Test Product {}", i + 1);
                self = self.with_product(&id, &name);
            }
            self
        }

        pub fn with_default(mut self, id: &str, name: &str) -> Self {
            let product = Product::new(id, ProductDraft::new(name, "5", "5", "9.99"));
            self.store.defaults.push(product);
            self
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}
