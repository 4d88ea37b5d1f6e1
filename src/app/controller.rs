//! Controllers and the registry the host validity check consults.
//!
//! Path segments are dash-separated (`user-settings`). Controllers are
//! registered under their handler name (`UserSettings`) and actions are
//! looked up in camel case (`userSettings`).

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::app::error::AppResult;

/// Body of a reply produced by a controller or a route callback.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyBody {
    Text(String),
    Json(Value),
}

/// Transport-neutral reply.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: ReplyBody,
}

impl Reply {
    pub fn text(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: ReplyBody::Text(body.into()),
        }
    }

    pub fn json(body: Value) -> Self {
        Self {
            status: 200,
            body: ReplyBody::Json(body),
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }
}

/// A group of actions addressed by the `:controller` segment.
pub trait Controller: Send + Sync {
    /// Returns true if `action` (camel case) is handled.
    fn has_action(&self, action: &str) -> bool;

    /// Run `action` with the positional path arguments.
    fn handle_action(&self, action: &str, args: &[String]) -> AppResult<Reply>;
}

/// `user-settings` → `UserSettings`.
pub fn to_handler_name(segment: &str) -> String {
    segment
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// `view-all` → `viewAll`.
pub fn to_action_name(segment: &str) -> String {
    let name = to_handler_name(segment);
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => name,
    }
}

/// Controllers keyed by namespace and handler name.
#[derive(Default, Clone)]
pub struct ControllerRegistry {
    controllers: HashMap<(String, String), Arc<dyn Controller>>,
}

impl ControllerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `controller` as `namespace::name`, where `name` is already a
    /// handler name such as `UserSettings`.
    pub fn register(
        &mut self,
        namespace: impl Into<String>,
        name: impl Into<String>,
        controller: Arc<dyn Controller>,
    ) {
        self.controllers
            .insert((namespace.into(), name.into()), controller);
    }

    /// Look up the controller a path segment refers to.
    pub fn get(&self, namespace: &str, segment: &str) -> Option<&Arc<dyn Controller>> {
        self.controllers
            .get(&(namespace.to_string(), to_handler_name(segment)))
    }

    pub fn contains(&self, namespace: &str, segment: &str) -> bool {
        self.get(namespace, segment).is_some()
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}

impl fmt::Debug for ControllerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self
            .controllers
            .keys()
            .map(|(namespace, name)| format!("{namespace}::{name}"))
            .collect();
        names.sort();
        f.debug_struct("ControllerRegistry")
            .field("controllers", &names)
            .finish()
    }
}
