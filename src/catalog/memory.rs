//! Thread-safe in-memory product catalog.

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::catalog::product::{NewProduct, Product, ProductId};
use crate::catalog::service::{CatalogError, ProductService};

/// Catalog held in a concurrent map.
///
/// Clones share the same storage.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    products: Arc<DashMap<ProductId, Product>>,
    next_id: Arc<AtomicU64>,
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self {
            products: Arc::new(DashMap::new()),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Insert a product with a fixed ID, e.g. for seeding.
    ///
    /// Later `create_product` calls allocate IDs above it.
    pub fn with_product(self, product: Product) -> Self {
        self.next_id.fetch_max(product.id + 1, Ordering::SeqCst);
        self.products.insert(product.id, product);
        self
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn validate(product: &NewProduct) -> Result<(), CatalogError> {
    if product.name.trim().is_empty() {
        return Err(CatalogError::Invalid("name must not be empty".into()));
    }
    Ok(())
}

impl ProductService for InMemoryCatalog {
    fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.products
            .get(&id)
            .map(|r| r.value().clone())
            .ok_or(CatalogError::NotFound(id))
    }

    fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let mut products: Vec<Product> = self.products.iter().map(|r| r.value().clone()).collect();
        products.sort_by_key(|p| p.id);
        Ok(products)
    }

    fn create_product(&self, product: NewProduct) -> Result<Product, CatalogError> {
        validate(&product)?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let product = product.into_product(id);
        self.products.insert(id, product.clone());
        Ok(product)
    }

    fn update_product(&self, id: ProductId, product: NewProduct) -> Result<Product, CatalogError> {
        validate(&product)?;
        let mut entry = self.products.get_mut(&id).ok_or(CatalogError::NotFound(id))?;
        *entry = product.into_product(id);
        Ok(entry.value().clone())
    }

    fn delete_product(&self, id: ProductId) -> Result<(), CatalogError> {
        self.products
            .remove(&id)
            .map(|_| ())
            .ok_or(CatalogError::NotFound(id))
    }
}
