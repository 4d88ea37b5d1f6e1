//! Route callbacks.
//!
//! A callback runs after a route is resolved and before the controller. It
//! either lets the request through or answers it directly.

use std::fmt;
use std::sync::Arc;

use crate::app::controller::Reply;
use crate::routing::ResolvedRoute;

/// What a callback decided.
#[derive(Debug, Clone, PartialEq)]
pub enum Interception {
    /// Hand the request to the resolved controller.
    Continue,
    /// Answer with this reply; the controller is not run.
    Respond(Reply),
}

type CallbackFn = dyn Fn(&ResolvedRoute<Callback>) -> Interception + Send + Sync;

/// Shared, cloneable route callback.
#[derive(Clone)]
pub struct Callback(Arc<CallbackFn>);

impl Callback {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&ResolvedRoute<Callback>) -> Interception + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Always continues to the controller.
    pub fn passthrough() -> Self {
        Self::new(|_| Interception::Continue)
    }

    /// Always answers with `reply`.
    pub fn reply(reply: Reply) -> Self {
        Self::new(move |_| Interception::Respond(reply.clone()))
    }

    pub fn call(&self, route: &ResolvedRoute<Callback>) -> Interception {
        (self.0)(route)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}
