//! Shared utilities for integration and load testing.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use storefront_probe::catalog::{
    observe, CatalogError, InMemoryCatalog, NewProduct, Product, ProductId, ProductService,
};
use storefront_probe::config::InterceptionConfig;
use storefront_probe::interception::{LogRecord, MemorySink, RecordEvent};

/// Catalog seeded with product 42 "Widget".
pub fn seeded_catalog() -> InMemoryCatalog {
    InMemoryCatalog::new().with_product(NewProduct::named("Widget").into_product(42))
}

/// Observe `inner` with the default config, capturing records in memory.
pub fn observed<S: ProductService + 'static>(inner: S) -> (Arc<dyn ProductService>, MemorySink) {
    let sink = MemorySink::new();
    let service = observe(inner, &InterceptionConfig::default(), Arc::new(sink.clone()))
        .expect("default pointcut parses");
    (service, sink)
}

/// Product service that sleeps before delegating, so durations are measurable.
pub struct SlowCatalog {
    inner: InMemoryCatalog,
    delay: Duration,
}

impl SlowCatalog {
    pub fn new(inner: InMemoryCatalog, delay: Duration) -> Self {
        Self { inner, delay }
    }
}

impl ProductService for SlowCatalog {
    fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        std::thread::sleep(self.delay);
        self.inner.get_product(id)
    }

    fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        std::thread::sleep(self.delay);
        self.inner.list_products()
    }

    fn create_product(&self, product: NewProduct) -> Result<Product, CatalogError> {
        std::thread::sleep(self.delay);
        self.inner.create_product(product)
    }

    fn update_product(&self, id: ProductId, product: NewProduct) -> Result<Product, CatalogError> {
        std::thread::sleep(self.delay);
        self.inner.update_product(id, product)
    }

    fn delete_product(&self, id: ProductId) -> Result<(), CatalogError> {
        std::thread::sleep(self.delay);
        self.inner.delete_product(id)
    }
}

/// Short label for an event, handy for asserting sequences.
pub fn kind(record: &LogRecord) -> &'static str {
    match record.event {
        RecordEvent::Timing { .. } => "timing",
        RecordEvent::Before => "before",
        RecordEvent::Returned { .. } => "returned",
        RecordEvent::Failed { .. } => "failed",
        RecordEvent::Completed => "completed",
    }
}
