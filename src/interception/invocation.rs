//! Call-scoped invocation context.
//!
//! # Responsibilities
//! - Identify the service and method being called
//! - Carry the method's visibility for pointcut matching
//! - Give every call a correlation ID so records of one call can be grouped
//!
//! # Design Decisions
//! - Method names are passed explicitly by each decorated call site
//! - A fresh UUID v4 per call; nothing is shared between invocations

use std::fmt;
use uuid::Uuid;

/// Visibility of an intercepted method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Part of the service's public interface.
    Public,
    /// Helper that is not part of the public interface.
    Internal,
}

/// Context of a single intercepted call.
#[derive(Debug, Clone)]
pub struct Invocation {
    id: Uuid,
    service: &'static str,
    method: &'static str,
    visibility: Visibility,
}

impl Invocation {
    /// Create the context for a call to a public method.
    pub fn new(service: &'static str, method: &'static str) -> Self {
        Self::with_visibility(service, method, Visibility::Public)
    }

    /// Create the context for a call with explicit visibility.
    pub fn with_visibility(
        service: &'static str,
        method: &'static str,
        visibility: Visibility,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            service,
            method,
            visibility,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn service(&self) -> &'static str {
        self.service
    }

    pub fn method(&self) -> &'static str {
        self.method
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.service, self.method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_invocation_gets_fresh_id() {
        let a = Invocation::new("ProductService", "get_product");
        let b = Invocation::new("ProductService", "get_product");
        assert_ne!(a.id(), b.id());
        assert_eq!(a.visibility(), Visibility::Public);
        assert_eq!(a.to_string(), "ProductService.get_product");
    }
}
