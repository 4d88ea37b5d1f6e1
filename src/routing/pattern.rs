//! Route pattern parsing.
//!
//! A pattern such as `/api/:controller/:action` is split on `/` into
//! segments. Empty pieces are dropped, so `//api/` and `/api` parse the same.
//! Only the three names `:namespace`, `:controller` and `:action` are
//! placeholders; any other piece, including `:id`, is a literal.

use std::fmt;

/// Placeholder kinds a pattern can bind from the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Namespace,
    Controller,
    Action,
}

impl Placeholder {
    /// Parse a raw pattern piece such as `:controller`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            ":namespace" => Some(Placeholder::Namespace),
            ":controller" => Some(Placeholder::Controller),
            ":action" => Some(Placeholder::Action),
            _ => None,
        }
    }

    pub fn as_token(&self) -> &'static str {
        match self {
            Placeholder::Namespace => ":namespace",
            Placeholder::Controller => ":controller",
            Placeholder::Action => ":action",
        }
    }
}

/// A single pattern segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the path segment exactly.
    Literal(String),
    /// Bound from the path segment at dispatch time.
    Placeholder(Placeholder),
}

impl Segment {
    fn parse(piece: &str) -> Self {
        match Placeholder::from_token(piece) {
            Some(placeholder) => Segment::Placeholder(placeholder),
            None => Segment::Literal(piece.to_string()),
        }
    }
}

/// A parsed route pattern. Keeps the source string for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    source: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    pub fn parse(source: impl Into<String>) -> Self {
        let source = source.into();
        let segments = split_segments(&source).map(Segment::parse).collect();
        Self { source, segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Literal pieces that look like placeholders (`:id`), which never bind.
    pub fn unknown_placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Literal(text) if text.starts_with(':') => Some(text.as_str()),
            _ => None,
        })
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.source)
    }
}

/// Split a path or pattern into its non-empty `/`-separated pieces.
pub fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|piece| !piece.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_collapses_separators() {
        let parts: Vec<_> = split_segments("//widgets///list/").collect();
        assert_eq!(parts, vec!["widgets", "list"]);
        assert_eq!(split_segments("/").count(), 0);
        assert_eq!(split_segments("").count(), 0);
    }

    #[test]
    fn test_split_keeps_zero_segment() {
        let parts: Vec<_> = split_segments("/widgets/0/list").collect();
        assert_eq!(parts, vec!["widgets", "0", "list"]);
    }

    #[test]
    fn test_parse_placeholders_and_literals() {
        let pattern = RoutePattern::parse("/api/:controller/:action");
        assert_eq!(
            pattern.segments(),
            &[
                Segment::Literal("api".into()),
                Segment::Placeholder(Placeholder::Controller),
                Segment::Placeholder(Placeholder::Action),
            ]
        );
        assert_eq!(pattern.to_string(), "/api/:controller/:action");
    }

    #[test]
    fn test_unknown_placeholder_is_literal() {
        let pattern = RoutePattern::parse("/users/:id");
        assert_eq!(pattern.segments()[1], Segment::Literal(":id".into()));
        assert_eq!(pattern.unknown_placeholders().collect::<Vec<_>>(), vec![":id"]);
    }
}
