//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mvc_router::app::{builtin_controllers, Application};
use mvc_router::config::{parse_config, AppConfig};
use mvc_router::{HttpServer, Shutdown};
use tokio::net::TcpListener;

/// Running server handle. Dropping it shuts the server down.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    task: tokio::task::JoinHandle<()>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Trigger shutdown and wait for the server task to finish.
    pub async fn stop(self) {
        self.shutdown.trigger();
        tokio::time::timeout(Duration::from_secs(5), self.task)
            .await
            .expect("server did not stop")
            .expect("server task panicked");
    }
}

/// Start a server with the built-in controllers on an ephemeral port.
pub async fn start_server(config_toml: &str) -> TestServer {
    let config: AppConfig = parse_config(config_toml).expect("invalid test config");
    let application = Application::from_config(&config, builtin_controllers()).expect("bootstrap failed");

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let signal = shutdown.subscribe();
    let server = HttpServer::new(config, Arc::new(application));

    let task = tokio::spawn(async move {
        server.run(listener, signal).await.unwrap();
    });

    TestServer { addr, shutdown, task }
}

/// Client that never pools or proxies.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
