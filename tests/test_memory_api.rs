//! End-to-end HTTP test against the in-memory backend.
//!
//! Starts the full application on an ephemeral port and drives it with reqwest.

use dish_service::{app, InMemoryDishStore};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::oneshot;

struct TestServer {
    base_url: String,
    shutdown: oneshot::Sender<()>,
    handle: tokio::task::JoinHandle<anyhow::Result<()>>,
}

impl TestServer {
    async fn start() -> Result<Self, Box<dyn std::error::Error>> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let port = listener.local_addr()?.port();
        let (tx, rx) = oneshot::channel::<()>();
        let store = Arc::new(InMemoryDishStore::new());
        let handle = tokio::spawn(app::serve(listener, store, async move {
            let _ = rx.await;
        }));
        Ok(Self {
            base_url: format!("http://127.0.0.1:{}", port),
            shutdown: tx,
            handle,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn stop(self) -> Result<(), Box<dyn std::error::Error>> {
        let _ = self.shutdown.send(());
        self.handle.await??;
        Ok(())
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_dish_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
    let server = TestServer::start().await?;
    let client = reqwest::Client::new();

    let soup = json!({"id": 1, "name": "Soup", "description": "Hot", "price": 5.5});
    let resp = client.post(server.url("/dishes/")).json(&soup).send().await?;
    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(resp.json::<Value>().await?, soup);

    let resp = client.get(server.url("/dishes/1")).send().await?;
    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(resp.json::<Value>().await?, soup);

    let pricier = json!({"id": 1, "name": "Soup", "description": "Hot", "price": 6.0});
    let resp = client.put(server.url("/dishes/1")).json(&pricier).send().await?;
    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(resp.json::<Value>().await?, pricier);

    let resp = client.get(server.url("/dishes/1")).send().await?;
    assert_eq!(resp.json::<Value>().await?["price"], json!(6.0));

    let resp = client.delete(server.url("/dishes/1")).send().await?;
    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(
        resp.json::<Value>().await?,
        json!({"message": "Dish deleted successfully"})
    );

    let resp = client.get(server.url("/dishes/1")).send().await?;
    assert_eq!(resp.status().as_u16(), 404);
    assert_eq!(resp.json::<Value>().await?, json!({"detail": "Dish not found"}));

    let resp = client.delete(server.url("/dishes/1")).send().await?;
    assert_eq!(resp.status().as_u16(), 404);

    server.stop().await
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_list_and_conflict() -> Result<(), Box<dyn std::error::Error>> {
    let server = TestServer::start().await?;
    let client = reqwest::Client::new();

    let resp = client.get(server.url("/dishes/")).send().await?;
    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(resp.json::<Value>().await?, json!([]));

    let dishes = vec![
        json!({"id": 7, "name": "Pie", "description": "Apple", "price": 3.25}),
        json!({"id": 2, "name": "Salad", "description": "Green", "price": 4.0}),
        json!({"id": 5, "name": "Stew", "description": "Beef", "price": 9.5}),
    ];
    for dish in &dishes {
        let resp = client.post(server.url("/dishes/")).json(dish).send().await?;
        assert_eq!(resp.status().as_u16(), 200);
    }

    let duplicate = json!({"id": 2, "name": "Other", "description": "x", "price": 1.0});
    let resp = client.post(server.url("/dishes/")).json(&duplicate).send().await?;
    assert_eq!(resp.status().as_u16(), 400);
    assert_eq!(
        resp.json::<Value>().await?,
        json!({"detail": "Dish with this ID already exists"})
    );

    // Both spellings of the collection path resolve to the same handler.
    for path in ["/dishes/", "/dishes"] {
        let resp = client.get(server.url(path)).send().await?;
        assert_eq!(resp.status().as_u16(), 200);
        assert_eq!(resp.json::<Value>().await?, Value::Array(dishes.clone()));
    }

    server.stop().await
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_update_edge_cases() -> Result<(), Box<dyn std::error::Error>> {
    let server = TestServer::start().await?;
    let client = reqwest::Client::new();

    let resp = client
        .put(server.url("/dishes/42"))
        .json(&json!({"id": 42, "name": "Ghost", "description": "none", "price": 1.0}))
        .send()
        .await?;
    assert_eq!(resp.status().as_u16(), 404);

    let resp = client.get(server.url("/dishes/")).send().await?;
    assert_eq!(resp.json::<Value>().await?, json!([]));

    client
        .post(server.url("/dishes/"))
        .json(&json!({"id": 1, "name": "Soup", "description": "Hot", "price": 5.5}))
        .send()
        .await?;

    // The path id wins over a diverging body id.
    let resp = client
        .put(server.url("/dishes/1"))
        .json(&json!({"id": 99, "name": "Broth", "description": "Clear", "price": 4.5}))
        .send()
        .await?;
    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(
        resp.json::<Value>().await?,
        json!({"id": 1, "name": "Broth", "description": "Clear", "price": 4.5})
    );
    let resp = client.get(server.url("/dishes/99")).send().await?;
    assert_eq!(resp.status().as_u16(), 404);

    server.stop().await
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_malformed_input_is_unprocessable() -> Result<(), Box<dyn std::error::Error>> {
    let server = TestServer::start().await?;
    let client = reqwest::Client::new();

    let resp = client
        .post(server.url("/dishes/"))
        .json(&json!({"id": 1, "name": "Soup"}))
        .send()
        .await?;
    assert_eq!(resp.status().as_u16(), 422);
    let body = resp.json::<Value>().await?;
    assert!(body["detail"].as_str().is_some());

    let resp = client
        .post(server.url("/dishes/"))
        .json(&json!({"id": "one", "name": "Soup", "description": "Hot", "price": 5.5}))
        .send()
        .await?;
    assert_eq!(resp.status().as_u16(), 422);

    let resp = client.get(server.url("/dishes/abc")).send().await?;
    assert_eq!(resp.status().as_u16(), 422);

    let resp = client.get(server.url("/dishes/")).send().await?;
    assert_eq!(resp.json::<Value>().await?, json!([]));

    server.stop().await
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_health_and_openapi() -> Result<(), Box<dyn std::error::Error>> {
    let server = TestServer::start().await?;
    let client = reqwest::Client::new();

    let resp = client.get(server.url("/health")).send().await?;
    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(
        resp.json::<Value>().await?,
        json!({"status": "ok", "backend": "memory"})
    );

    let resp = client.get(server.url("/api-docs/openapi.json")).send().await?;
    assert_eq!(resp.status().as_u16(), 200);
    let doc = resp.json::<Value>().await?;
    assert!(doc["paths"]["/dishes/{id}"].is_object());
    assert!(doc["components"]["schemas"]["Dish"].is_object());

    server.stop().await
}
