//! Route definitions and dispatch results.

use serde::{Deserialize, Serialize};

use crate::routing::pattern::RoutePattern;

/// Namespace used when neither the defaults nor the path supply one.
pub const DEFAULT_NAMESPACE: &str = "Controller";

/// Pattern of the catch-all route every new router starts with.
pub const DEFAULT_ROUTE: &str = "/:controller/:action";

/// Values used when the path does not supply a placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RouteDefaults {
    pub namespace: Option<String>,
    pub controller: Option<String>,
    pub action: Option<String>,
}

impl RouteDefaults {
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn controller(mut self, controller: impl Into<String>) -> Self {
        self.controller = Some(controller.into());
        self
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }
}

/// A registered route.
#[derive(Debug, Clone)]
pub struct RouteDefinition<C> {
    pub pattern: RoutePattern,
    pub defaults: RouteDefaults,
    /// `None` only for the seeded catch-all route.
    pub callback: Option<C>,
}

/// The outcome of a successful dispatch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedRoute<C> {
    pub namespace: String,
    pub controller: Option<String>,
    pub action: Option<String>,
    pub args: Vec<String>,
    #[serde(skip)]
    pub callback: Option<C>,
}
