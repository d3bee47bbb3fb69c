//! Shared utilities for integration and load testing.

use std::time::Duration;

use multiserv::MultiservConfig;

/// Default `localhost` layout, starting at `base_port`.
pub fn layout(base_port: u16) -> MultiservConfig {
    MultiservConfig::default().with_base_port(base_port)
}

/// Client that never pools or proxies.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

/// GET `path` on `127.0.0.1:port`, returning status and body.
pub async fn get(
    client: &reqwest::Client,
    port: u16,
    path: &str,
) -> Result<(reqwest::StatusCode, String), reqwest::Error> {
    let res = client
        .get(format!("http://127.0.0.1:{}{}", port, path))
        .send()
        .await?;
    let status = res.status();
    Ok((status, res.text().await?))
}

/// Poll `port` until it answers HTTP, or panic after a few seconds.
pub async fn wait_until_serving(client: &reqwest::Client, port: u16) {
    for _ in 0..50 {
        if get(client, port, "/").await.is_ok() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    panic!("nothing serving on 127.0.0.1:{}", port);
}

/// Hold `port` with a plain socket so the server under test cannot bind it.
#[allow(dead_code)]
pub fn occupy(port: u16) -> std::net::TcpListener {
    std::net::TcpListener::bind(("127.0.0.1", port)).unwrap()
}
