//! Route matching logic.
//!
//! # Responsibilities
//! - Walk pattern segments and path segments in lockstep
//! - Bind placeholders from the path, falling back to route defaults
//! - Collect unconsumed path segments as positional arguments
//! - Ask the host whether a structurally matched route is acceptable
//!
//! # Design Decisions
//! - Literal comparison is exact and case-sensitive
//! - The walk stops as soon as the path runs out, so trailing pattern
//!   segments are never checked against a missing path segment
//! - An empty path still consumes one pattern step: a leading literal fails,
//!   a leading placeholder keeps its default
//! - Placeholders never fail a match

use std::collections::VecDeque;

use crate::routing::pattern::{Placeholder, Segment};
use crate::routing::route::{ResolvedRoute, RouteDefinition, DEFAULT_NAMESPACE};

/// Host-supplied check applied to every structurally matched route.
pub trait RouteValidator<C> {
    /// Returns true if the host accepts this route.
    fn is_valid_route(&self, route: &ResolvedRoute<C>) -> bool;
}

impl<C, F> RouteValidator<C> for F
where
    F: Fn(&ResolvedRoute<C>) -> bool,
{
    fn is_valid_route(&self, route: &ResolvedRoute<C>) -> bool {
        self(route)
    }
}

/// Accepts every route that matches structurally.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl<C> RouteValidator<C> for AcceptAll {
    fn is_valid_route(&self, _route: &ResolvedRoute<C>) -> bool {
        true
    }
}

/// Match `path` against a single route definition.
///
/// Returns `None` when a literal segment disagrees with the path. Host
/// validation is not applied here.
pub fn match_route<C: Clone>(route: &RouteDefinition<C>, path: &[&str]) -> Option<ResolvedRoute<C>> {
    let defaults = &route.defaults;
    let mut namespace = defaults
        .namespace
        .clone()
        .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());
    let mut controller = defaults.controller.clone();
    let mut action = defaults.action.clone();

    let mut remaining: VecDeque<&str> = path.iter().copied().collect();

    for segment in route.pattern.segments() {
        let part = remaining.pop_front();

        match (segment, part) {
            (Segment::Placeholder(_), None) => {}
            (Segment::Placeholder(Placeholder::Namespace), Some(part)) => {
                namespace = part.to_string();
            }
            (Segment::Placeholder(Placeholder::Controller), Some(part)) => {
                controller = Some(part.to_string());
            }
            (Segment::Placeholder(Placeholder::Action), Some(part)) => {
                action = Some(part.to_string());
            }
            (Segment::Literal(literal), part) => {
                if part != Some(literal.as_str()) {
                    return None;
                }
            }
        }

        if remaining.is_empty() {
            break;
        }
    }

    Some(ResolvedRoute {
        namespace,
        controller,
        action,
        args: remaining.into_iter().map(str::to_string).collect(),
        callback: route.callback.clone(),
    })
}
