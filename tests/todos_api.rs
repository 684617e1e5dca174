//! Todo API integration tests
//!
//! CRUD over `/api/todos` with a valid token.

#![cfg(feature = "ssr")]

#[macro_use]
mod common;

use axum::http::StatusCode;
use common::*;
use todo_gate::backend::todos::TodoStore;
use todo_gate::shared::TodoItem;

#[tokio::test]
async fn test_list_seeded_todos() {
    let server = test_server();
    let token = login_token(&server).await;

    let response = server.get("/api/todos").authorization_bearer(&token).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let todos: Vec<TodoItem> = response.json();
    assert_eq!(todos.len(), 2);
    assert_eq!(todos[0].title, "Learn ExpressJs");
    assert_eq!(todos[1].title, "Build a REST API");
}

#[tokio::test]
async fn test_create_then_list() {
    let server = test_server();
    let token = login_token(&server).await;

    let response = server
        .post("/api/todos")
        .authorization_bearer(&token)
        .json(&serde_json::json!({ "title": "X" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let created: TodoItem = response.json();
    assert_eq!(created.title, "X");
    assert!(!created.completed);

    let todos: Vec<TodoItem> = server.get("/api/todos").authorization_bearer(&token).await.json();
    assert!(todos.contains(&created));
    assert_eq!(todos.iter().filter(|t| t.id == created.id).count(), 1);
}

#[tokio::test]
async fn test_create_with_empty_body_uses_defaults() {
    let server = test_server();
    let token = login_token(&server).await;

    let created: TodoItem = server
        .post("/api/todos")
        .authorization_bearer(&token)
        .json(&serde_json::json!({}))
        .await
        .json();

    assert_eq!(created.title, "Untitled");
    assert!(!created.completed);
}

#[tokio::test]
async fn test_patch_returns_whole_collection() {
    let server = test_server();
    let token = login_token(&server).await;

    let response = server
        .patch("/api/todos/1")
        .authorization_bearer(&token)
        .json(&serde_json::json!({ "completed": true }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let todos: serde_json::Value = response.json();
    assert_todo_ids!(todos, ["1", "2"]);
    assert_eq!(todos[0]["title"], "Learn ExpressJs");
    assert_eq!(todos[0]["completed"], true);
    assert_eq!(todos[1]["completed"], false);
}

#[tokio::test]
async fn test_patch_unknown_id_is_null() {
    let server = test_server();
    let token = login_token(&server).await;

    let response = server
        .patch("/api/todos/nonexistent")
        .authorization_bearer(&token)
        .json(&serde_json::json!({ "completed": true }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert!(body.is_null());
}

#[tokio::test]
async fn test_delete_twice_is_idempotent() {
    let server = test_server();
    let token = login_token(&server).await;

    let first: serde_json::Value = server
        .delete("/api/todos/1")
        .authorization_bearer(&token)
        .await
        .json();
    let second = server.delete("/api/todos/1").authorization_bearer(&token).await;

    assert_eq!(second.status_code(), StatusCode::OK);
    let second: serde_json::Value = second.json();
    assert_eq!(first, second);
    assert_todo_ids!(second, ["2"]);
}

#[tokio::test]
async fn test_learn_build_ship_scenario() {
    let store = TodoStore::with_items(vec![
        TodoItem { id: "1".into(), title: "Learn".into(), completed: false },
        TodoItem { id: "2".into(), title: "Build".into(), completed: false },
    ]);
    let server = test_server_with_store(store);
    let token = login_token(&server).await;

    let shipped: TodoItem = server
        .post("/api/todos")
        .authorization_bearer(&token)
        .json(&serde_json::json!({ "title": "Ship" }))
        .await
        .json();
    assert_eq!(
        shipped,
        TodoItem { id: "3".into(), title: "Ship".into(), completed: false }
    );

    let todos: serde_json::Value = server
        .delete("/api/todos/2")
        .authorization_bearer(&token)
        .await
        .json();
    assert_todo_ids!(todos, ["1", "3"]);
}

#[tokio::test]
async fn test_ids_unique_across_delete_and_create() {
    let server = test_server();
    let token = login_token(&server).await;

    server.delete("/api/todos/2").authorization_bearer(&token).await;
    let created: TodoItem = server
        .post("/api/todos")
        .authorization_bearer(&token)
        .json(&serde_json::json!({ "title": "after delete" }))
        .await
        .json();
    assert_eq!(created.id, "3");

    let again: TodoItem = server
        .post("/api/todos")
        .authorization_bearer(&token)
        .json(&serde_json::json!({ "title": "again" }))
        .await
        .json();
    assert_eq!(again.id, "4");

    let todos: serde_json::Value = server.get("/api/todos").authorization_bearer(&token).await.json();
    assert_todo_ids!(todos, ["1", "3", "4"]);
}

#[tokio::test]
async fn test_create_without_body_uses_defaults() {
    let server = test_server();
    let token = login_token(&server).await;

    let response = server.post("/api/todos").authorization_bearer(&token).await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let created: TodoItem = response.json();
    assert_eq!(created.id, "3");
    assert_eq!(created.title, "Untitled");
    assert!(!created.completed);
}

#[tokio::test]
async fn test_patch_with_malformed_body_is_json_400() {
    let server = test_server();
    let token = login_token(&server).await;

    let response = server
        .patch("/api/todos/1")
        .authorization_bearer(&token)
        .json(&serde_json::json!({ "completed": "yes" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], 400);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON body"));
}
