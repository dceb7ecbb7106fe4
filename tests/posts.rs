mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

async fn create_post(server: &axum_test::TestServer, token: &str, text: &str) -> Value {
    let response = server
        .post("/api/posts")
        .authorization_bearer(token)
        .json(&json!({ "text": text }))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()
}

// ─── Authoring ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_post() {
    let server = common::make_server();
    let token = common::register_and_login(&server, "Alice", "alice@example.com", "password123").await;

    let post = create_post(&server, &token, "hello world").await;

    assert_eq!(post["id"], 1);
    assert_eq!(post["text"], "hello world");
    assert_eq!(post["user_id"], 1);
    assert!(post["created_at"].is_i64());
}

#[tokio::test]
async fn test_create_post_requires_text() {
    let server = common::make_server();
    let token = common::register_and_login(&server, "Alice", "alice@example.com", "password123").await;

    for body in [json!({}), json!({ "text": "" })] {
        let response = server
            .post("/api/posts")
            .authorization_bearer(&token)
            .json(&body)
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        response.assert_json(&json!({
            "message": "Validation failed",
            "errors": { "text": ["The text field is required."] },
        }));
    }
}

#[tokio::test]
async fn test_create_post_rejects_long_text() {
    let server = common::make_server();
    let token = common::register_and_login(&server, "Alice", "alice@example.com", "password123").await;

    let response = server
        .post("/api/posts")
        .authorization_bearer(&token)
        .json(&json!({ "text": "x".repeat(301) }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    response.assert_json(&json!({
        "message": "Validation failed",
        "errors": { "text": ["The text may not be greater than 300 characters."] },
    }));
}

#[tokio::test]
async fn test_create_post_accepts_limit_length_text() {
    let server = common::make_server();
    let token = common::register_and_login(&server, "Alice", "alice@example.com", "password123").await;

    let post = create_post(&server, &token, &"x".repeat(300)).await;

    assert_eq!(post["text"].as_str().unwrap().len(), 300);
}

// ─── Per-user listing ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_user_posts_are_newest_first() {
    let server = common::make_server();
    let token = common::register_and_login(&server, "Alice", "alice@example.com", "password123").await;

    for text in ["one", "two", "three"] {
        create_post(&server, &token, text).await;
    }

    // Listing is public; no token on the read.
    let response = server.get("/api/posts/1").await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    let texts: Vec<String> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["text"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(texts, vec!["three", "two", "one"]);
}

#[tokio::test]
async fn test_user_posts_page_in_tens() {
    let server = common::make_server();
    let token = common::register_and_login(&server, "Alice", "alice@example.com", "password123").await;

    for n in 1..=15 {
        create_post(&server, &token, &format!("post {n}")).await;
    }

    let first = server.get("/api/posts/1").await.json::<Value>();
    let first = first.as_array().unwrap();
    assert_eq!(first.len(), 10);
    assert_eq!(first[0]["text"], "post 15");
    assert_eq!(first[9]["text"], "post 6");

    let second = server.get("/api/posts/1?page=2").await.json::<Value>();
    let second = second.as_array().unwrap();
    assert_eq!(second.len(), 5);
    assert_eq!(second[0]["text"], "post 5");
    assert_eq!(second[4]["text"], "post 1");

    let third = server.get("/api/posts/1?page=3").await.json::<Value>();
    assert_eq!(third, json!([]));
}

#[tokio::test]
async fn test_page_zero_clamps_to_first_page() {
    let server = common::make_server();
    let token = common::register_and_login(&server, "Alice", "alice@example.com", "password123").await;
    create_post(&server, &token, "only one").await;

    let body = server.get("/api/posts/1?page=0").await.json::<Value>();

    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_posts_of_unknown_user_not_found() {
    let server = common::make_server();

    let response = server.get("/api/posts/999").await;

    response.assert_status_not_found();
    response.assert_json(&json!({ "message": "Resource not found", "errors": [] }));
}

// ─── Deletion ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_own_post() {
    let server = common::make_server();
    let token = common::register_and_login(&server, "Alice", "alice@example.com", "password123").await;
    let post = create_post(&server, &token, "short-lived").await;
    let post_id = post["id"].as_i64().unwrap();

    server
        .delete(&format!("/api/posts/{post_id}"))
        .authorization_bearer(&token)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    // The post is gone, so a second delete misses.
    server
        .delete(&format!("/api/posts/{post_id}"))
        .authorization_bearer(&token)
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_delete_post_requires_token() {
    let server = common::make_server();
    let token = common::register_and_login(&server, "Alice", "alice@example.com", "password123").await;
    let post = create_post(&server, &token, "keep out").await;
    let post_id = post["id"].as_i64().unwrap();

    // Reading /posts/{id} is open, deleting is not.
    server
        .delete(&format!("/api/posts/{post_id}"))
        .await
        .assert_status_forbidden();
}

#[tokio::test]
async fn test_delete_foreign_post_is_denied() {
    let server = common::make_server();
    let alice = common::register_and_login(&server, "Alice", "alice@example.com", "password123").await;
    let bob = common::register_and_login(&server, "Bob", "bob@example.com", "password123").await;
    let post = create_post(&server, &bob, "bob's post").await;
    let post_id = post["id"].as_i64().unwrap();

    let response = server
        .delete(&format!("/api/posts/{post_id}"))
        .authorization_bearer(&alice)
        .await;

    response.assert_status_forbidden();
    response.assert_json(&json!({
        "message": "Access denied",
        "errors": ["You have not access permission to API"],
    }));

    // Still listed for its owner.
    let bobs_posts = server.get("/api/posts/2").await.json::<Value>();
    assert_eq!(bobs_posts.as_array().unwrap().len(), 1);
}

// ─── Feed ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_feed_merges_own_and_subscribed_posts() {
    let server = common::make_server();
    let alice = common::register_and_login(&server, "Alice", "alice@example.com", "password123").await;
    let bob = common::register_and_login(&server, "Bob", "bob@example.com", "password123").await;
    let carol = common::register_and_login(&server, "Carol", "carol@example.com", "password123").await;

    server
        .post("/api/users/2/subscribe")
        .authorization_bearer(&alice)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    create_post(&server, &bob, "from bob").await;
    create_post(&server, &carol, "from carol").await;
    create_post(&server, &alice, "from alice").await;

    let response = server.get("/api/posts/feed").authorization_bearer(&alice).await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    let texts: Vec<String> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["text"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(texts, vec!["from alice", "from bob"]);
}

#[tokio::test]
async fn test_feed_requires_token() {
    let server = common::make_server();

    server.get("/api/posts/feed").await.assert_status_forbidden();
}

#[tokio::test]
async fn test_feed_of_new_account_is_empty() {
    let server = common::make_server();
    let token = common::register_and_login(&server, "Alice", "alice@example.com", "password123").await;

    let response = server.get("/api/posts/feed").authorization_bearer(&token).await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}
