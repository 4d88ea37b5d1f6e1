//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Request path ("/api/users/create/7")
//!     → pattern.rs (split into non-empty segments)
//!     → router.rs (scan routes, newest first)
//!     → matcher.rs (walk segments, bind placeholders, collect args)
//!     → RouteValidator (host accepts or rejects)
//!     → Return: ResolvedRoute or None
//!
//! Bootstrap:
//!     Router::new() seeds "/:controller/:action"
//!     → register() prepends application routes
//!     → clear_routes() drops everything, seed included
//! ```
//!
//! # Design Decisions
//! - Callbacks are opaque: stored and cloned, never invoked here
//! - Deterministic: same path and route table always give the same result
//! - First acceptable match wins

pub mod matcher;
pub mod pattern;
pub mod route;
pub mod router;

pub use matcher::{AcceptAll, RouteValidator};
pub use pattern::{Placeholder, RoutePattern, Segment};
pub use route::{ResolvedRoute, RouteDefaults, RouteDefinition, DEFAULT_NAMESPACE, DEFAULT_ROUTE};
pub use router::{Router, RouterError};
