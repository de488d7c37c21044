//! Declarative call selection.
//!
//! # Responsibilities
//! - Parse a pointcut expression: `[public] <Service>.<method-pattern>`
//! - Match invocations on service name (exact), method name (glob) and visibility
//! - Combine conditions with AND semantics
//!
//! # Design Decisions
//! - Service and method matching are case-sensitive
//! - Method patterns support at most one `*`; no regex
//! - A pointcut is fixed once built; interceptors never re-read it

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::interception::invocation::{Invocation, Visibility};

/// Default expression selecting every public method of the product service.
pub const PRODUCT_SERVICE_POINTCUT: &str = "public ProductService.*";

/// Errors produced while parsing a pointcut expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PointcutError {
    #[error("pointcut expression is empty")]
    Empty,
    #[error("pointcut `{0}` must have the form `[public] Service.method`")]
    MissingSeparator(String),
    #[error("pointcut `{0}` names no service")]
    EmptyService(String),
    #[error("pointcut `{0}` names no method pattern")]
    EmptyMethod(String),
    #[error("method pattern `{0}` may contain at most one `*`")]
    TooManyWildcards(String),
}

/// Trait for matching invocations against conditions.
pub trait MethodMatcher: Send + Sync + fmt::Debug {
    /// Returns true if the invocation matches this condition.
    fn matches(&self, invocation: &Invocation) -> bool;
}

/// Matches the target service by exact name.
#[derive(Debug, Clone)]
pub struct ServiceMatcher {
    service: String,
}

impl ServiceMatcher {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }
}

impl MethodMatcher for ServiceMatcher {
    fn matches(&self, invocation: &Invocation) -> bool {
        invocation.service() == self.service
    }
}

/// Matches the method name against a pattern with an optional single `*`.
#[derive(Debug, Clone)]
pub struct MethodNameMatcher {
    prefix: String,
    suffix: Option<String>,
}

impl MethodNameMatcher {
    pub fn new(pattern: &str) -> Result<Self, PointcutError> {
        match pattern.matches('*').count() {
            0 => Ok(Self {
                prefix: pattern.to_string(),
                suffix: None,
            }),
            1 => {
                let (prefix, suffix) = pattern.split_once('*').unwrap_or((pattern, ""));
                Ok(Self {
                    prefix: prefix.to_string(),
                    suffix: Some(suffix.to_string()),
                })
            }
            _ => Err(PointcutError::TooManyWildcards(pattern.to_string())),
        }
    }
}

impl MethodMatcher for MethodNameMatcher {
    fn matches(&self, invocation: &Invocation) -> bool {
        let method = invocation.method();
        match &self.suffix {
            None => method == self.prefix,
            Some(suffix) => {
                method.len() >= self.prefix.len() + suffix.len()
                    && method.starts_with(&self.prefix)
                    && method.ends_with(suffix.as_str())
            }
        }
    }
}

/// Matches only methods with the given visibility.
#[derive(Debug, Clone)]
pub struct VisibilityMatcher {
    visibility: Visibility,
}

impl VisibilityMatcher {
    pub fn new(visibility: Visibility) -> Self {
        Self { visibility }
    }
}

impl MethodMatcher for VisibilityMatcher {
    fn matches(&self, invocation: &Invocation) -> bool {
        invocation.visibility() == self.visibility
    }
}

/// Combines multiple matchers with AND semantics.
#[derive(Debug)]
pub struct AndMatcher {
    matchers: Vec<Box<dyn MethodMatcher>>,
}

impl AndMatcher {
    pub fn new(matchers: Vec<Box<dyn MethodMatcher>>) -> Self {
        Self { matchers }
    }
}

impl MethodMatcher for AndMatcher {
    fn matches(&self, invocation: &Invocation) -> bool {
        self.matchers.iter().all(|m| m.matches(invocation))
    }
}

/// A parsed selection rule.
#[derive(Debug)]
pub struct Pointcut {
    expression: String,
    matcher: AndMatcher,
}

impl Pointcut {
    /// Parse a pointcut expression.
    pub fn parse(expression: &str) -> Result<Self, PointcutError> {
        let trimmed = expression.trim();
        if trimmed.is_empty() {
            return Err(PointcutError::Empty);
        }

        let (public_only, target) = match trimmed.strip_prefix("public ") {
            Some(rest) => (true, rest.trim_start()),
            None => (false, trimmed),
        };

        let (service, method) = target
            .rsplit_once('.')
            .ok_or_else(|| PointcutError::MissingSeparator(trimmed.to_string()))?;
        if service.is_empty() {
            return Err(PointcutError::EmptyService(trimmed.to_string()));
        }
        if method.is_empty() {
            return Err(PointcutError::EmptyMethod(trimmed.to_string()));
        }

        let mut matchers: Vec<Box<dyn MethodMatcher>> = vec![
            Box::new(ServiceMatcher::new(service)),
            Box::new(MethodNameMatcher::new(method)?),
        ];
        if public_only {
            matchers.push(Box::new(VisibilityMatcher::new(Visibility::Public)));
        }

        Ok(Self {
            expression: trimmed.to_string(),
            matcher: AndMatcher::new(matchers),
        })
    }

    /// All public methods of the product service.
    pub fn product_service() -> Self {
        Self {
            expression: PRODUCT_SERVICE_POINTCUT.to_string(),
            matcher: AndMatcher::new(vec![
                Box::new(ServiceMatcher::new("ProductService")),
                Box::new(MethodNameMatcher {
                    prefix: String::new(),
                    suffix: Some(String::new()),
                }),
                Box::new(VisibilityMatcher::new(Visibility::Public)),
            ]),
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn matches(&self, invocation: &Invocation) -> bool {
        self.matcher.matches(invocation)
    }
}

impl FromStr for Pointcut {
    type Err = PointcutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Pointcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression)
    }
}
