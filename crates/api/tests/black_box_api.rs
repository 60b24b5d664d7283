use axum::Router;
use reqwest::StatusCode;
use serde_json::{json, Value};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Serve the router on an ephemeral port.
    async fn spawn(app: Router) -> Self {
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

    async fn items() -> Self {
        Self::spawn(avalans_api::app::build_items_app().await.unwrap()).await
    }

    async fn locations() -> Self {
        Self::spawn(avalans_api::app::build_locations_app().await.unwrap()).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn location_body(number: &str) -> Value {
    json!({
        "name": "Client A",
        "number": number,
        "street": "123 Main St",
        "city": "City",
        "postal_code": "12345",
        "country": "Country",
        "contact_name": "John Doe",
    })
}

#[tokio::test]
async fn health_is_ok_on_both_services() {
    let client = reqwest::Client::new();
    for server in [TestServer::items().await, TestServer::locations().await] {
        let res = client.get(server.url("/health")).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn item_lifecycle() {
    let server = TestServer::items().await;
    let client = reqwest::Client::new();

    let res = client
        .post(server.url("/items"))
        .json(&json!({
            "name": "Widget",
            "description": "A widget",
            "length": 10.0,
            "width": 20.0,
            "height": 5.0,
            "is_perishable": true,
            "shelf_life_days": 7,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let location = res.headers()["location"].to_str().unwrap().to_string();
    let body: Value = res.json().await.unwrap();
    let id = body["item_id"].as_str().unwrap().to_string();
    assert_eq!(location, format!("/items/{id}"));

    let item: Value = client
        .get(server.url(&location))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(item["name"], "Widget");
    assert_eq!(item["volume"], 1000.0);
    assert_eq!(item["volume_unit"], "cm³");
    assert_eq!(item["shelf_life"], 7);

    let res = client
        .put(server.url(&location))
        .json(&json!({ "name": "Widget v2", "weight": 2.5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let item: Value = client
        .get(server.url(&location))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(item["name"], "Widget v2");
    assert_eq!(item["weight"], 2.5);
    assert_eq!(item["is_perishable"], false);
    assert_eq!(item["shelf_life"], Value::Null);

    let all: Vec<Value> = client
        .get(server.url("/items"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all.len(), 1);

    let res = client.delete(server.url(&location)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client.delete(server.url(&location)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client.get(server.url(&location)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_item_is_a_bad_request() {
    let server = TestServer::items().await;
    let client = reqwest::Client::new();

    let res = client
        .post(server.url("/items"))
        .json(&json!({ "name": "Milk", "is_perishable": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invariant_violation");

    let res = client
        .post(server.url("/items"))
        .json(&json!({ "name": "Anvil", "weight": -1.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn unknown_and_malformed_item_ids() {
    let server = TestServer::items().await;
    let client = reqwest::Client::new();

    let res = client.get(server.url("/items/not-a-uuid")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_id");

    let missing = "0190b6a0-0000-7000-8000-000000000000";
    let res = client
        .put(server.url(&format!("/items/{missing}")))
        .json(&json!({ "name": "Ghost" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn location_lifecycle() {
    let server = TestServer::locations().await;
    let client = reqwest::Client::new();

    let res = client
        .post(server.url("/locations"))
        .json(&location_body("LOC001"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await.unwrap();
    let id = body["location_id"].as_str().unwrap().to_string();
    let path = format!("/locations/{id}");

    let location: Value = client
        .get(server.url(&path))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(location["number"], "LOC001");
    assert_eq!(location["address"]["street"], "123 Main St");
    assert_eq!(location["contact_name"], "John Doe");
    assert_eq!(location["is_active"], true);

    // contact fields omitted: cleared
    let mut update = location_body("LOC001");
    update["name"] = json!("Client A West");
    update.as_object_mut().unwrap().remove("contact_name");
    let res = client.put(server.url(&path)).json(&update).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let location: Value = client
        .get(server.url(&path))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(location["name"], "Client A West");
    assert_eq!(location["contact_name"], Value::Null);

    let res = client
        .post(server.url(&format!("{path}/deactivate")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let active: Vec<Value> = client
        .get(server.url("/locations"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(active.is_empty());

    let all: Vec<Value> = client
        .get(server.url("/locations?include_inactive=true"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0]["is_active"], false);

    let res = client
        .post(server.url(&format!("{path}/activate")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn duplicate_location_number_is_rejected() {
    let server = TestServer::locations().await;
    let client = reqwest::Client::new();

    let res = client
        .post(server.url("/locations"))
        .json(&location_body("LOC001"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .post(server.url("/locations"))
        .json(&location_body("LOC001"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("already exists"));

    let res = client
        .post(server.url("/locations"))
        .json(&location_body("LOC002"))
        .send()
        .await
        .unwrap();
    let second: Value = res.json().await.unwrap();
    let second_path = format!("/locations/{}", second["location_id"].as_str().unwrap());

    let res = client
        .put(server.url(&second_path))
        .json(&location_body("LOC001"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_location_is_not_found() {
    let server = TestServer::locations().await;
    let client = reqwest::Client::new();
    let missing = "0190b6a0-0000-7000-8000-000000000000";

    let res = client
        .get(server.url(&format!("/locations/{missing}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .post(server.url(&format!("/locations/{missing}/deactivate")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .put(server.url(&format!("/locations/{missing}")))
        .json(&location_body("LOC001"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
