//! Host application subsystem.
//!
//! # Data Flow
//! ```text
//! Request path
//!     → application.rs (Router::dispatch with self as validator)
//!     → callback.rs (route callback may answer directly)
//!     → controller.rs (registry lookup, action name conversion)
//!     → Reply or AppError
//! ```

pub mod application;
pub mod builtin;
pub mod callback;
pub mod controller;
pub mod error;

pub use application::Application;
pub use builtin::builtin_controllers;
pub use callback::{Callback, Interception};
pub use controller::{to_action_name, to_handler_name, Controller, ControllerRegistry, Reply, ReplyBody};
pub use error::{AppError, AppResult};
