//! End-to-end test over a real TCP listener.

use product_service::config::ServiceConfig;
use product_service::product::InMemoryProductStore;
use product_service::{HttpServer, Shutdown};
use serde_json::{json, Value};
use std::time::Duration;

mod common;

#[tokio::test]
async fn test_crud_over_tcp() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(ServiceConfig::default(), InMemoryProductStore::new());
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .unwrap();
    let base = format!("http://{}/product", addr);

    let res = client
        .post(&base)
        .json(&json!({"name": "Pen", "description": common::DESCRIPTION, "price": 1.5}))
        .send()
        .await
        .expect("Server unreachable");
    assert_eq!(res.status(), 201);
    let created: Value = res.json().await.unwrap();
    assert_eq!(created["id"], 1);

    let res = client.get(format!("{}/999", base)).send().await.unwrap();
    assert_eq!(res.status(), 404);
    let error: Value = res.json().await.unwrap();
    assert_eq!(error["path"], "/product/999");

    let res = client.delete(format!("{}/1", base)).send().await.unwrap();
    assert_eq!(res.status(), 204);

    let list: Value = client.get(&base).send().await.unwrap().json().await.unwrap();
    assert_eq!(list, json!([]));

    shutdown.trigger();
    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("Server did not stop");
    assert!(result.unwrap().is_ok());
}
