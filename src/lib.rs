//! MVC path router with a small HTTP host.
//!
//! The core lives in [`routing`]: an ordered table of `/:controller/:action`
//! style patterns, scanned newest first. [`app`] supplies the host side
//! (controllers, validity check, callbacks) and [`http`] serves it.

pub mod app;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use app::Application;
pub use config::schema::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{ResolvedRoute, RouteDefaults, Router, RouterError};
