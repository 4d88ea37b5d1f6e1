//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store route definitions in evaluation order
//! - Look up the first acceptable route for a request path
//! - Return matched route or explicit no-match
//!
//! # Design Decisions
//! - Registration prepends: the newest route is tried first
//! - A fresh router carries the `/:controller/:action` catch-all
//! - O(routes × pattern length) scan, no indexing
//! - No match is `None`, not an error

use thiserror::Error;

use crate::routing::matcher::{match_route, RouteValidator};
use crate::routing::pattern::{split_segments, RoutePattern};
use crate::routing::route::{ResolvedRoute, RouteDefaults, RouteDefinition, DEFAULT_ROUTE};

/// Errors raised while building the route table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    /// A route was registered without a usable callback.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Ordered route table.
#[derive(Debug, Clone)]
pub struct Router<C> {
    routes: Vec<RouteDefinition<C>>,
}

impl<C: Clone> Router<C> {
    /// Create a router seeded with the default catch-all route.
    pub fn new() -> Self {
        Self {
            routes: vec![RouteDefinition {
                pattern: RoutePattern::parse(DEFAULT_ROUTE),
                defaults: RouteDefaults::default(),
                callback: None,
            }],
        }
    }

    /// Create a router with no routes at all.
    pub fn empty() -> Self {
        Self { routes: Vec::new() }
    }

    /// Register a route ahead of every existing one.
    pub fn register(
        &mut self,
        pattern: &str,
        defaults: RouteDefaults,
        callback: Option<C>,
    ) -> Result<(), RouterError> {
        let callback = callback.ok_or_else(|| {
            RouterError::InvalidArgument(format!("route `{pattern}` requires a callback"))
        })?;

        tracing::debug!(pattern = %pattern, ?defaults, "Registering route");

        self.routes.insert(
            0,
            RouteDefinition {
                pattern: RoutePattern::parse(pattern),
                defaults,
                callback: Some(callback),
            },
        );
        Ok(())
    }

    /// Drop every route, including the seeded catch-all.
    pub fn clear_routes(&mut self) {
        tracing::debug!(removed = self.routes.len(), "Clearing routes");
        self.routes.clear();
    }

    /// Find the first route that matches `path` and that `validator` accepts.
    pub fn dispatch<V>(&self, path: &str, validator: &V) -> Option<ResolvedRoute<C>>
    where
        V: RouteValidator<C> + ?Sized,
    {
        let segments: Vec<&str> = split_segments(path).collect();

        for route in &self.routes {
            let Some(resolved) = match_route(route, &segments) else {
                continue;
            };

            if validator.is_valid_route(&resolved) {
                tracing::debug!(
                    path = %path,
                    pattern = %route.pattern,
                    namespace = %resolved.namespace,
                    controller = ?resolved.controller,
                    action = ?resolved.action,
                    "Route matched"
                );
                return Some(resolved);
            }

            tracing::trace!(path = %path, pattern = %route.pattern, "Route rejected by host");
        }

        tracing::debug!(path = %path, "No route matched");
        None
    }

    /// Route definitions in evaluation order.
    pub fn routes(&self) -> &[RouteDefinition<C>] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<C: Clone> Default for Router<C> {
    fn default() -> Self {
        Self::new()
    }
}
