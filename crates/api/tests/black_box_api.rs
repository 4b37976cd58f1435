use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::json;

use velogo_api::app::{build_app, in_memory_state, AppState};
use velogo_catalog::seed;
use velogo_infra::InMemoryOrderStore;
use velogo_orders::OrderId;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Build the prod router over the given state, bound to an ephemeral port.
    async fn spawn(state: AppState) -> Self {
        let app = build_app(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    async fn spawn_in_memory() -> (Self, Arc<InMemoryOrderStore>) {
        let (state, store) = in_memory_state();
        (Self::spawn(state).await, store)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn food_body() -> serde_json::Value {
    json!({
        "type": "food",
        "address": "Av. Juárez 123, Guadalajara, Jal.",
        "details": "portería azul",
        "payment_method": "cash",
        "total": 212,
        "items": [
            { "name": "Tacos al pastor (5u)", "unit_price": 89, "qty": 2 }
        ]
    })
}

#[tokio::test]
async fn valid_food_order_returns_id_and_persists_row_with_lines() {
    let (srv, store) = TestServer::spawn_in_memory().await;

    let res = reqwest::Client::new()
        .post(format!("{}/orders", srv.base_url))
        .json(&food_body())
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    let id: OrderId = body["id"].as_str().unwrap().parse().unwrap();

    let row = store.order(id).unwrap();
    assert_eq!(row.total, 212);
    let items = store.items_of(id);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].unit_price, 89);
    assert_eq!(items[0].quantity, 2);
}

#[tokio::test]
async fn valid_courier_order_persists_its_task() {
    let (srv, store) = TestServer::spawn_in_memory().await;

    let res = reqwest::Client::new()
        .post(format!("{}/orders", srv.base_url))
        .json(&json!({
            "type": "courier",
            "address": "Av. Vallarta 6503, Zapopan",
            "payment_method": "card",
            "total": 70,
            "mandado": {
                "what": "recoger paquete",
                "from": "Parque Revolución, GDL",
                "to": "Av. Vallarta 6503, Zapopan"
            }
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    let id: OrderId = body["id"].as_str().unwrap().parse().unwrap();

    let task = store.task_of(id).unwrap();
    assert_eq!(task.pickup_address, "Parque Revolución, GDL");
    assert!(store.items_of(id).is_empty());
}

#[tokio::test]
async fn non_post_invocations_get_the_405_body() {
    let (srv, _store) = TestServer::spawn_in_memory().await;

    let res = reqwest::Client::new()
        .get(format!("{}/orders", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Method not allowed");
}

#[tokio::test]
async fn missing_address_is_rejected_before_any_insert() {
    let (srv, store) = TestServer::spawn_in_memory().await;

    let mut body = food_body();
    body.as_object_mut().unwrap().remove("address");

    let res = reqwest::Client::new()
        .post(format!("{}/orders", srv.base_url))
        .json(&body)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Invalid payload");
    assert_eq!(store.order_count(), 0);
}

#[tokio::test]
async fn missing_backend_configuration_answers_500() {
    let state = AppState {
        orders: None,
        catalog: Arc::new(seed::guadalajara()),
    };
    let srv = TestServer::spawn(state).await;

    let res = reqwest::Client::new()
        .post(format!("{}/orders", srv.base_url))
        .json(&food_body())
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Missing backend configuration");
}

#[tokio::test]
async fn secondary_insert_failure_is_reported_and_leaves_the_order_row() {
    let (srv, store) = TestServer::spawn_in_memory().await;
    store.set_secondary_failure(true);

    let res = reqwest::Client::new()
        .post(format!("{}/orders", srv.base_url))
        .json(&food_body())
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("line items insert failed"));

    // At-least-once: the order row stays behind without its lines.
    assert_eq!(store.order_count(), 1);
}

#[tokio::test]
async fn duplicate_submission_with_the_same_key_creates_one_order() {
    let (srv, store) = TestServer::spawn_in_memory().await;

    let mut body = food_body();
    body.as_object_mut()
        .unwrap()
        .insert("idempotency_key".to_string(), json!("checkout-1"));

    let client = reqwest::Client::new();
    let first: serde_json::Value = client
        .post(format!("{}/orders", srv.base_url))
        .json(&body)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let second: serde_json::Value = client
        .post(format!("{}/orders", srv.base_url))
        .json(&body)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(first["id"], second["id"]);
    assert_eq!(store.order_count(), 1);
}

#[tokio::test]
async fn restaurants_come_back_rating_descending() {
    let (srv, _store) = TestServer::spawn_in_memory().await;

    let res = reqwest::Client::new()
        .get(format!("{}/restaurants", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    let ratings: Vec<f64> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["rating"].as_f64().unwrap())
        .collect();
    let mut sorted = ratings.clone();
    sorted.sort_by(|a, b| b.partial_cmp(a).unwrap());
    assert_eq!(ratings, sorted);
}

#[tokio::test]
async fn unknown_restaurant_menu_is_404() {
    let (srv, _store) = TestServer::spawn_in_memory().await;

    let missing = velogo_core::EntityId::new();
    let res = reqwest::Client::new()
        .get(format!("{}/restaurants/{missing}/menu", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
