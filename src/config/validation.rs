//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses and value ranges
//! - Reject route patterns that cannot bind what they appear to bind
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::routing::{RoutePattern, Segment};

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid {field} address `{value}`")]
    InvalidAddress { field: &'static str, value: String },

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("route #{index} has a pattern with no segments")]
    EmptyPattern { index: usize },

    #[error("route `{pattern}` uses unknown placeholder `{placeholder}`")]
    UnknownPlaceholder { pattern: String, placeholder: String },

    #[error("route `{pattern}` repeats placeholder `{placeholder}`")]
    DuplicatePlaceholder { pattern: String, placeholder: String },

    #[error("route `{pattern}` has invalid reply status {status}")]
    InvalidStatus { pattern: String, status: u16 },
}

/// Validate a parsed configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    for (index, route) in config.routes.iter().enumerate() {
        let pattern = RoutePattern::parse(route.pattern.as_str());

        // A zero-segment pattern swallows every path as args.
        if pattern.segments().is_empty() {
            errors.push(ValidationError::EmptyPattern { index });
            continue;
        }

        for placeholder in pattern.unknown_placeholders() {
            errors.push(ValidationError::UnknownPlaceholder {
                pattern: route.pattern.clone(),
                placeholder: placeholder.to_string(),
            });
        }

        let mut seen = HashSet::new();
        for segment in pattern.segments() {
            if let Segment::Placeholder(placeholder) = segment {
                if !seen.insert(*placeholder) {
                    errors.push(ValidationError::DuplicatePlaceholder {
                        pattern: route.pattern.clone(),
                        placeholder: placeholder.as_token().to_string(),
                    });
                }
            }
        }

        if let Some(reply) = &route.reply {
            if !(100..=599).contains(&reply.status) {
                errors.push(ValidationError::InvalidStatus {
                    pattern: route.pattern.clone(),
                    status: reply.status,
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
