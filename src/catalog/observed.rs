//! Decorator that attaches interceptors to a product service.
//!
//! # Responsibilities
//! - Build one `Invocation` per call and hand it to every interceptor
//! - Run timing around lifecycle around the inner method
//! - Wire the enabled interceptors from config at construction time
//!
//! # Design Decisions
//! - One decorator, optional interceptors: records of a single call always
//!   share an invocation ID
//! - Returned values are rendered the way the product types display
//!   themselves; lists as `[a, b]`, unit as `()`

use std::sync::Arc;

use crate::catalog::product::{NewProduct, Product, ProductId};
use crate::catalog::service::{CatalogError, ProductService};
use crate::config::InterceptionConfig;
use crate::interception::{
    Invocation, LifecycleLogger, LogSink, Pointcut, PointcutError, TimingInterceptor,
};

/// Service name that decorated invocations report.
pub const PRODUCT_SERVICE: &str = "ProductService";

fn render_product(product: &Product) -> String {
    product.to_string()
}

#[allow(clippy::ptr_arg)]
fn render_products(products: &Vec<Product>) -> String {
    let items: Vec<String> = products.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

fn render_unit(_: &()) -> String {
    "()".to_string()
}

/// Product service whose calls pass through the timing interceptor and the
/// lifecycle logger.
#[derive(Debug)]
pub struct ObservedProductService<S> {
    inner: S,
    timing: Option<TimingInterceptor>,
    lifecycle: Option<LifecycleLogger>,
}

impl<S: ProductService> ObservedProductService<S> {
    /// Wrap `inner` with no interceptors attached.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            timing: None,
            lifecycle: None,
        }
    }

    pub fn with_timing(mut self, timing: TimingInterceptor) -> Self {
        self.timing = Some(timing);
        self
    }

    pub fn with_lifecycle(mut self, lifecycle: LifecycleLogger) -> Self {
        self.lifecycle = Some(lifecycle);
        self
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    fn around<T, R, F>(&self, method: &'static str, render: R, call: F) -> Result<T, CatalogError>
    where
        R: FnOnce(&T) -> String,
        F: FnOnce() -> Result<T, CatalogError>,
    {
        let invocation = Invocation::new(PRODUCT_SERVICE, method);
        match (&self.timing, &self.lifecycle) {
            (Some(timing), Some(lifecycle)) => timing.intercept(&invocation, || {
                lifecycle.intercept_with(&invocation, render, call)
            }),
            (Some(timing), None) => timing.intercept(&invocation, call),
            (None, Some(lifecycle)) => lifecycle.intercept_with(&invocation, render, call),
            (None, None) => call(),
        }
    }
}

impl<S: ProductService> ProductService for ObservedProductService<S> {
    fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.around("get_product", render_product, || self.inner.get_product(id))
    }

    fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.around("list_products", render_products, || self.inner.list_products())
    }

    fn create_product(&self, product: NewProduct) -> Result<Product, CatalogError> {
        self.around("create_product", render_product, || {
            self.inner.create_product(product)
        })
    }

    fn update_product(&self, id: ProductId, product: NewProduct) -> Result<Product, CatalogError> {
        self.around("update_product", render_product, || {
            self.inner.update_product(id, product)
        })
    }

    fn delete_product(&self, id: ProductId) -> Result<(), CatalogError> {
        self.around("delete_product", render_unit, || self.inner.delete_product(id))
    }
}

/// Wrap `inner` with the interceptors enabled in `config`.
///
/// Both interceptors share one pointcut and sink.
pub fn observe<S>(
    inner: S,
    config: &InterceptionConfig,
    sink: Arc<dyn LogSink>,
) -> Result<Arc<dyn ProductService>, PointcutError>
where
    S: ProductService + 'static,
{
    let pointcut = Arc::new(Pointcut::parse(&config.pointcut)?);

    let mut service = ObservedProductService::new(inner);
    if config.lifecycle_enabled {
        service = service.with_lifecycle(LifecycleLogger::new(pointcut.clone(), sink.clone()));
    }
    if config.timing_enabled {
        service = service.with_timing(TimingInterceptor::new(pointcut.clone(), sink));
    }

    tracing::info!(
        pointcut = %pointcut,
        timing = config.timing_enabled,
        lifecycle = config.lifecycle_enabled,
        "Product service observed"
    );
    Ok(Arc::new(service))
}
