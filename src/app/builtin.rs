//! Controllers shipped with the binary.

use std::sync::Arc;

use serde_json::json;

use crate::app::controller::{Controller, ControllerRegistry, Reply};
use crate::app::error::AppResult;
use crate::routing::DEFAULT_NAMESPACE;

/// `/health` and `/health/index`.
#[derive(Debug, Default)]
pub struct HealthController;

impl Controller for HealthController {
    fn has_action(&self, action: &str) -> bool {
        action == "index"
    }

    fn handle_action(&self, _action: &str, _args: &[String]) -> AppResult<Reply> {
        Ok(Reply::text("ok"))
    }
}

/// Echoes positional arguments back as JSON: `/echo/index/a/b`.
#[derive(Debug, Default)]
pub struct EchoController;

impl Controller for EchoController {
    fn has_action(&self, action: &str) -> bool {
        action == "index"
    }

    fn handle_action(&self, _action: &str, args: &[String]) -> AppResult<Reply> {
        Ok(Reply::json(json!({ "args": args })))
    }
}

/// Registry holding the built-in controllers in the default namespace.
pub fn builtin_controllers() -> ControllerRegistry {
    let mut registry = ControllerRegistry::new();
    registry.register(DEFAULT_NAMESPACE, "Health", Arc::new(HealthController));
    registry.register(DEFAULT_NAMESPACE, "Echo", Arc::new(EchoController));
    registry
}
