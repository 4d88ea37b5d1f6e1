//! The host application around the router.
//!
//! # Responsibilities
//! - Build the route table at bootstrap
//! - Decide which structurally matched routes are valid (controller exists)
//! - Run route callbacks, then the resolved controller action

use crate::app::callback::{Callback, Interception};
use crate::app::controller::{to_action_name, to_handler_name, ControllerRegistry, Reply};
use crate::app::error::{AppError, AppResult};
use crate::config::{AppConfig, RouteConfig};
use crate::observability::metrics;
use crate::routing::{ResolvedRoute, RouteValidator, Router};

/// Router plus controllers.
#[derive(Debug)]
pub struct Application {
    router: Router<Callback>,
    controllers: ControllerRegistry,
}

impl Application {
    pub fn new(router: Router<Callback>, controllers: ControllerRegistry) -> Self {
        Self { router, controllers }
    }

    /// Build the route table described by `config`.
    pub fn from_config(config: &AppConfig, controllers: ControllerRegistry) -> AppResult<Self> {
        let mut router = Router::new();
        if !config.router.seed_default_route {
            router.clear_routes();
        }

        for route in &config.routes {
            router.register(&route.pattern, route.defaults.clone(), Some(callback_for(route)))?;
        }

        tracing::info!(
            routes = router.len(),
            controllers = controllers.len(),
            "Application initialized"
        );
        Ok(Self::new(router, controllers))
    }

    pub fn router(&self) -> &Router<Callback> {
        &self.router
    }

    pub fn controllers(&self) -> &ControllerRegistry {
        &self.controllers
    }

    /// Resolve `path` to the first route whose controller exists.
    pub fn resolve(&self, path: &str) -> Option<ResolvedRoute<Callback>> {
        let resolved = self.router.dispatch(path, self);
        metrics::record_dispatch(resolved.is_some());
        resolved
    }

    /// Resolve `path` and produce the reply for it.
    pub fn handle_request(&self, path: &str) -> AppResult<Reply> {
        let route = self
            .resolve(path)
            .ok_or_else(|| AppError::NoRoute(path.to_string()))?;

        if let Some(callback) = &route.callback {
            if let Interception::Respond(reply) = callback.call(&route) {
                tracing::debug!(path = %path, status = reply.status, "Callback answered request");
                return Ok(reply);
            }
        }

        let segment = route.controller.as_deref().unwrap_or_default();
        let controller = self
            .controllers
            .get(&route.namespace, segment)
            .ok_or_else(|| AppError::ControllerNotFound {
                namespace: route.namespace.clone(),
                controller: to_handler_name(segment),
            })?;

        let action = route
            .action
            .as_deref()
            .map(to_action_name)
            .filter(|action| controller.has_action(action))
            .ok_or_else(|| AppError::ActionNotFound {
                controller: to_handler_name(segment),
                action: route.action.clone().unwrap_or_default(),
            })?;

        tracing::debug!(
            namespace = %route.namespace,
            controller = %segment,
            action = %action,
            args = ?route.args,
            "Invoking action"
        );
        controller.handle_action(&action, &route.args)
    }
}

impl RouteValidator<Callback> for Application {
    fn is_valid_route(&self, route: &ResolvedRoute<Callback>) -> bool {
        route
            .controller
            .as_deref()
            .is_some_and(|controller| self.controllers.contains(&route.namespace, controller))
    }
}

fn callback_for(route: &RouteConfig) -> Callback {
    match &route.reply {
        Some(reply) => Callback::reply(Reply::text(reply.body.clone()).with_status(reply.status)),
        None => Callback::passthrough(),
    }
}
