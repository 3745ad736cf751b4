//! API integration tests

use libris_server::{api, AppConfig, AppState};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

/// Start the app on an ephemeral port and return its base URL
async fn spawn_app() -> String {
    let app = api::create_router(AppState::new(AppConfig::default()));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    format!("http://{}", addr)
}

/// Register a member and return a bearer token for it
async fn get_auth_token(client: &Client, base_url: &str) -> String {
    let response = client
        .post(format!("{}/members", base_url))
        .json(&json!({ "name": "Alice", "email": "alice@example.org" }))
        .send()
        .await
        .expect("Failed to create member");
    let member: Value = response.json().await.expect("Failed to parse member");

    let response = client
        .post(format!("{}/auth/token", base_url))
        .json(&json!({ "member_id": member["id"] }))
        .send()
        .await
        .expect("Failed to request token");

    let body: Value = response.json().await.expect("Failed to parse token response");
    body["token"].as_str().expect("No token in response").to_string()
}

async fn create_book(client: &Client, base_url: &str, token: &str, body: Value) -> Value {
    let response = client
        .post(format!("{}/books", base_url))
        .bearer_auth(token)
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);
    response.json().await.expect("Failed to parse book")
}

#[tokio::test]
async fn test_health_check() {
    let base_url = spawn_app().await;

    let response = Client::new()
        .get(format!("{}/health", base_url))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_member_token_scenario() {
    let base_url = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/members", base_url))
        .json(&json!({ "name": "Alice" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);
    let member: Value = response.json().await.unwrap();
    assert_eq!(member["id"], 1);
    assert_eq!(member["borrowed_books"], json!([]));

    let response = client
        .post(format!("{}/auth/token", base_url))
        .json(&json!({ "member_id": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let token = response.json::<Value>().await.unwrap()["token"]
        .as_str()
        .unwrap()
        .to_string();

    let response = client
        .get(format!("{}/members/1", base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.json::<Value>().await.unwrap()["name"], "Alice");

    let response = client
        .get(format!("{}/members/1", base_url))
        .bearer_auth("not-a-real-token")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Invalid or expired token");
}

#[tokio::test]
async fn test_token_for_unknown_member() {
    let base_url = spawn_app().await;
    let client = Client::new();

    for body in [json!({ "member_id": 7 }), json!({})] {
        let response = client
            .post(format!("{}/auth/token", base_url))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"], "Member not found");
    }
}

#[tokio::test]
async fn test_unauthorized_access() {
    let base_url = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/books", base_url))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Missing or invalid token");

    let response = client
        .post(format!("{}/books", base_url))
        .header("Authorization", "Token abc")
        .json(&json!({ "title": "Dune" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = client
        .delete(format!("{}/members/1", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_book_lifecycle_scenario() {
    let base_url = spawn_app().await;
    let client = Client::new();
    let token = get_auth_token(&client, &base_url).await;

    let dune = create_book(
        &client,
        &base_url,
        &token,
        json!({ "title": "Dune", "author": "Herbert" }),
    )
    .await;
    assert_eq!(dune["id"], 1);
    assert_eq!(dune["available"], true);
    assert_eq!(dune["isbn"], "");

    let foo = create_book(&client, &base_url, &token, json!({ "title": "Foo", "author": "Bar" })).await;
    assert_eq!(foo["id"], 2);

    let response = client
        .delete(format!("{}/books/1", base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = client
        .get(format!("{}/books/1", base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.bytes().await.unwrap().is_empty());

    let response = client
        .get(format!("{}/books?page=1", base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let page: Value = response.json().await.unwrap();
    assert_eq!(page.as_array().unwrap().len(), 1);
    assert_eq!(page[0]["id"], 2);
}

#[tokio::test]
async fn test_delete_missing_book_still_succeeds() {
    let base_url = spawn_app().await;
    let client = Client::new();
    let token = get_auth_token(&client, &base_url).await;

    let response = client
        .delete(format!("{}/books/999", base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_update_preserves_id_and_resets_omitted_fields() {
    let base_url = spawn_app().await;
    let client = Client::new();
    let token = get_auth_token(&client, &base_url).await;

    create_book(
        &client,
        &base_url,
        &token,
        json!({ "title": "Dune", "author": "Herbert", "isbn": "978-0441013593", "published_year": 1965 }),
    )
    .await;

    let response = client
        .put(format!("{}/books/1", base_url))
        .bearer_auth(&token)
        .json(&json!({ "id": 50, "title": "Dune Messiah", "available": false }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let book: Value = response.json().await.unwrap();
    assert_eq!(book["id"], 1);
    assert_eq!(book["title"], "Dune Messiah");
    assert_eq!(book["author"], "");
    assert_eq!(book["published_year"], 0);
    assert_eq!(book["available"], false);

    let response = client
        .put(format!("{}/books/2", base_url))
        .bearer_auth(&token)
        .json(&json!({ "title": "Nobody" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_and_pagination() {
    let base_url = spawn_app().await;
    let client = Client::new();
    let token = get_auth_token(&client, &base_url).await;

    for n in 0..12 {
        let author = if n % 2 == 0 { "Ursula Le Guin" } else { "Iain Banks" };
        create_book(
            &client,
            &base_url,
            &token,
            json!({ "title": format!("Volume {n}"), "author": author }),
        )
        .await;
    }

    let response = client
        .get(format!("{}/books/search?q=le%20GUIN", base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let hits: Value = response.json().await.unwrap();
    let ids: Vec<i64> = hits
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3, 5, 7, 9, 11]);

    let response = client
        .get(format!("{}/books/search", base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.json::<Value>().await.unwrap().as_array().unwrap().len(), 12);

    // Default page size is 10
    let response = client
        .get(format!("{}/books", base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.json::<Value>().await.unwrap().as_array().unwrap().len(), 10);

    let response = client
        .get(format!("{}/books?page=2", base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let page: Value = response.json().await.unwrap();
    assert_eq!(page.as_array().unwrap().len(), 2);
    assert_eq!(page[0]["id"], 11);

    let response = client
        .get(format!("{}/books?page=9", base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.json::<Value>().await.unwrap(), json!([]));

    let response = client
        .get(format!("{}/books?page=abc", base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_payloads() {
    let base_url = spawn_app().await;
    let client = Client::new();
    let token = get_auth_token(&client, &base_url).await;

    let response = client
        .post(format!("{}/books", base_url))
        .bearer_auth(&token)
        .json(&json!({ "title": "Dune", "published_year": "nineteen sixty-five" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>().await.unwrap()["error"].is_string());

    let response = client
        .post(format!("{}/members", base_url))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = client
        .get(format!("{}/books/abc", base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_member_update_and_delete() {
    let base_url = spawn_app().await;
    let client = Client::new();
    let token = get_auth_token(&client, &base_url).await;

    let response = client
        .put(format!("{}/members/1", base_url))
        .bearer_auth(&token)
        .json(&json!({ "name": "Alice Smith", "borrowed_books": [2, 2, 99] }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let member: Value = response.json().await.unwrap();
    assert_eq!(member["id"], 1);
    assert_eq!(member["email"], "");
    assert_eq!(member["borrowed_books"], json!([2, 2, 99]));

    let response = client
        .delete(format!("{}/members/1", base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The token outlives the deleted member
    let response = client
        .get(format!("{}/members/1", base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let base_url = spawn_app().await;

    let response = Client::new()
        .get(format!("{}/api-docs/openapi.json", base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let doc: Value = response.json().await.unwrap();
    assert!(doc["paths"]["/books/{id}"].is_object());
}
