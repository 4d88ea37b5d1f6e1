//! Dispatch behavior of the route table.

use mvc_router::routing::{AcceptAll, ResolvedRoute, RouteDefaults, Router, RouterError};

type Handler = &'static str;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_default_route_controller_and_action() {
    let router: Router<Handler> = Router::new();
    let route = router.dispatch("/widgets/list", &AcceptAll).unwrap();

    assert_eq!(route.namespace, "Controller");
    assert_eq!(route.controller.as_deref(), Some("widgets"));
    assert_eq!(route.action.as_deref(), Some("list"));
    assert!(route.args.is_empty());
    assert_eq!(route.callback, None);
}

#[test]
fn test_default_route_leftover_args() {
    let router: Router<Handler> = Router::new();
    let route = router.dispatch("/widgets/list/42/red", &AcceptAll).unwrap();

    assert_eq!(route.controller.as_deref(), Some("widgets"));
    assert_eq!(route.action.as_deref(), Some("list"));
    assert_eq!(route.args, strings(&["42", "red"]));
}

#[test]
fn test_default_route_without_action() {
    let router: Router<Handler> = Router::new();
    let route = router.dispatch("/widgets", &AcceptAll).unwrap();

    assert_eq!(route.controller.as_deref(), Some("widgets"));
    assert_eq!(route.action, None);
}

#[test]
fn test_repeated_separators_collapse() {
    let router: Router<Handler> = Router::new();
    let route = router.dispatch("//widgets///list//7/", &AcceptAll).unwrap();

    assert_eq!(route.controller.as_deref(), Some("widgets"));
    assert_eq!(route.action.as_deref(), Some("list"));
    assert_eq!(route.args, strings(&["7"]));
}

#[test]
fn test_zero_is_an_ordinary_segment() {
    let router: Router<Handler> = Router::new();
    let route = router.dispatch("/widgets/0/list", &AcceptAll).unwrap();

    assert_eq!(route.controller.as_deref(), Some("widgets"));
    assert_eq!(route.action.as_deref(), Some("0"));
    assert_eq!(route.args, strings(&["list"]));
}

#[test]
fn test_registered_route_preferred_over_default() {
    let mut router = Router::new();
    router
        .register("/api/:controller/:action", RouteDefaults::default().namespace("Api"), Some("api"))
        .unwrap();

    let route = router.dispatch("/api/users/create", &AcceptAll).unwrap();
    assert_eq!(route.namespace, "Api");
    assert_eq!(route.controller.as_deref(), Some("users"));
    assert_eq!(route.action.as_deref(), Some("create"));
    assert!(route.args.is_empty());
    assert_eq!(route.callback, Some("api"));
}

#[test]
fn test_static_route() {
    let mut router = Router::new();
    router
        .register("/static/about", RouteDefaults::default().controller("pages"), Some("about"))
        .unwrap();

    let route = router.dispatch("/static/about", &AcceptAll).unwrap();
    assert_eq!(route.callback, Some("about"));
    assert!(route.args.is_empty());

    // Falls through to the catch-all.
    let route = router.dispatch("/static/contact", &AcceptAll).unwrap();
    assert_eq!(route.callback, None);
    assert_eq!(route.controller.as_deref(), Some("static"));
    assert_eq!(route.action.as_deref(), Some("contact"));

    // Without the catch-all nothing matches.
    router.clear_routes();
    router
        .register("/static/about", RouteDefaults::default(), Some("about"))
        .unwrap();
    assert!(router.dispatch("/static/contact", &AcceptAll).is_none());
}

#[test]
fn test_shorter_path_matches_longer_pattern() {
    let mut router = Router::empty();
    router
        .register("/static/about", RouteDefaults::default(), Some("about"))
        .unwrap();

    let route = router.dispatch("/static", &AcceptAll).unwrap();
    assert_eq!(route.callback, Some("about"));
    assert!(route.args.is_empty());
    assert!(router.dispatch("/", &AcceptAll).is_none());
}

#[test]
fn test_last_registered_wins() {
    let mut router = Router::new();
    router
        .register("/:controller/:action", RouteDefaults::default().namespace("First"), Some("first"))
        .unwrap();
    router
        .register("/:controller/:action", RouteDefaults::default().namespace("Second"), Some("second"))
        .unwrap();

    let route = router.dispatch("/users/list", &AcceptAll).unwrap();
    assert_eq!(route.callback, Some("second"));

    let skip_second = |r: &ResolvedRoute<Handler>| r.callback != Some("second");
    let route = router.dispatch("/users/list", &skip_second).unwrap();
    assert_eq!(route.callback, Some("first"));
}

#[test]
fn test_invalid_registration_leaves_table_intact() {
    let mut router: Router<Handler> = Router::new();
    let err = router
        .register("/api/:controller/:action", RouteDefaults::default(), None)
        .unwrap_err();
    assert!(matches!(err, RouterError::InvalidArgument(_)));

    let route = router.dispatch("/api/users/create", &AcceptAll).unwrap();
    assert_eq!(route.controller.as_deref(), Some("api"));
    assert_eq!(route.action.as_deref(), Some("users"));
    assert_eq!(route.args, strings(&["create"]));
}

#[test]
fn test_cleared_router_never_matches() {
    let mut router = Router::new();
    router
        .register("/api/:controller/:action", RouteDefaults::default(), Some("api"))
        .unwrap();
    router.clear_routes();

    for path in ["/", "/widgets", "/widgets/list", "/api/users/create", ""] {
        assert!(router.dispatch(path, &AcceptAll).is_none(), "{path} matched");
    }
}

#[test]
fn test_dispatch_is_repeatable() {
    let mut router = Router::new();
    router
        .register("/api/:controller/:action", RouteDefaults::default().namespace("Api"), Some("api"))
        .unwrap();

    let first = router.dispatch("/api/users/create/1", &AcceptAll);
    let second = router.dispatch("/api/users/create/1", &AcceptAll);
    assert_eq!(first, second);
}
