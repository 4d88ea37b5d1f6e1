//! End-to-end tests through a real listener.

mod common;

const CONFIG: &str = r#"
[[routes]]
pattern = "/api/:controller/:action"
defaults = { namespace = "Api" }

[[routes]]
pattern = "/about"
defaults = { controller = "health", action = "index" }
reply = { status = 200, body = "about us" }

[[routes]]
pattern = "/maintenance/:controller/:action"
reply = { status = 503, body = "down for maintenance" }
"#;

#[tokio::test]
async fn test_default_route_serves_controller() {
    let server = common::start_server(CONFIG).await;
    let client = common::client();

    let res = client.get(server.url("/health/index")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert!(res.headers().contains_key("x-request-id"));
    assert_eq!(res.text().await.unwrap(), "ok");

    server.stop().await;
}

#[tokio::test]
async fn test_args_reach_controller() {
    let server = common::start_server(CONFIG).await;
    let client = common::client();

    let res = client.get(server.url("/echo/index/42/red")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), r#"{"args":["42","red"]}"#);

    server.stop().await;
}

#[tokio::test]
async fn test_static_reply_callback() {
    let server = common::start_server(CONFIG).await;
    let client = common::client();

    let res = client.get(server.url("/about")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "about us");

    let res = client.get(server.url("/maintenance/echo/index")).send().await.unwrap();
    assert_eq!(res.status(), 503);

    server.stop().await;
}

#[tokio::test]
async fn test_unroutable_paths_are_404() {
    let server = common::start_server(CONFIG).await;
    let client = common::client();

    // The Api namespace has no controllers, so the catch-all is tried and
    // rejects "api" as a controller too.
    for path in ["/api/users/create", "/missing/index", "/", "/health/explode"] {
        let res = client.get(server.url(path)).send().await.unwrap();
        assert_eq!(res.status(), 404, "{path}");
    }

    server.stop().await;
}

#[tokio::test]
async fn test_any_method_is_dispatched() {
    let server = common::start_server(CONFIG).await;
    let client = common::client();

    let res = client.post(server.url("/health/index")).send().await.unwrap();
    assert_eq!(res.status(), 200);

    server.stop().await;
}

#[tokio::test]
async fn test_without_default_route() {
    let server = common::start_server("[router]\nseed_default_route = false\n").await;
    let client = common::client();

    let res = client.get(server.url("/health/index")).send().await.unwrap();
    assert_eq!(res.status(), 404);

    server.stop().await;
}
