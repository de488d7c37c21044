//! The product service interface.

use std::sync::Arc;
use thiserror::Error;

use crate::catalog::product::{NewProduct, Product, ProductId};

/// Errors returned by product service implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("id {0} missing")]
    NotFound(ProductId),
    #[error("invalid product: {0}")]
    Invalid(String),
}

/// Operations exposed by the product service.
///
/// Every method here is public and is selected by the default pointcut.
pub trait ProductService: Send + Sync {
    fn get_product(&self, id: ProductId) -> Result<Product, CatalogError>;

    fn list_products(&self) -> Result<Vec<Product>, CatalogError>;

    fn create_product(&self, product: NewProduct) -> Result<Product, CatalogError>;

    fn update_product(&self, id: ProductId, product: NewProduct) -> Result<Product, CatalogError>;

    fn delete_product(&self, id: ProductId) -> Result<(), CatalogError>;
}

impl<S: ProductService + ?Sized> ProductService for Arc<S> {
    fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        (**self).get_product(id)
    }

    fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        (**self).list_products()
    }

    fn create_product(&self, product: NewProduct) -> Result<Product, CatalogError> {
        (**self).create_product(product)
    }

    fn update_product(&self, id: ProductId, product: NewProduct) -> Result<Product, CatalogError> {
        (**self).update_product(id, product)
    }

    fn delete_product(&self, id: ProductId) -> Result<(), CatalogError> {
        (**self).delete_product(id)
    }
}
