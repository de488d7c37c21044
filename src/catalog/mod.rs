//! Product catalog: the observed service.
//!
//! # Data Flow
//! ```text
//! caller
//!     → ObservedProductService (one Invocation per call)
//!         → timing.rs interceptor
//!         → lifecycle.rs interceptor
//!     → inner ProductService (e.g. InMemoryCatalog)
//! ```
//!
//! # Design Decisions
//! - Decoration is explicit and happens once, at construction (`observe`)
//! - Every decorated method tags its own name; no reflection
//! - The in-memory catalog is a reference target, not a storage layer

pub mod memory;
pub mod observed;
pub mod product;
pub mod service;

pub use memory::InMemoryCatalog;
pub use observed::{observe, ObservedProductService, PRODUCT_SERVICE};
pub use product::{NewProduct, Product, ProductId};
pub use service::{CatalogError, ProductService};
