//! Integration tests for the SnipShare HTTP API.

mod support;

use axum::http::StatusCode;
use serde_json::json;
use std::collections::HashSet;
use support::{setup_test_server, test_config_for_db_path, test_server_for_config};
use tempfile::TempDir;

fn is_snippet_id(id: &str) -> bool {
    id.len() == 8 && id.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

#[tokio::test]
async fn test_snippet_save_and_view() {
    let (server, _temp) = setup_test_server();

    let create_response = server
        .post("/api/snippet")
        .json(&json!({
            "content": "print('hi')",
            "language": "Python "
        }))
        .await;

    assert_eq!(create_response.status_code(), StatusCode::CREATED);
    let created: serde_json::Value = create_response.json();
    let id = created["id"].as_str().expect("id").to_string();
    assert!(is_snippet_id(&id), "id: {}", id);

    let get_response = server.get(&format!("/api/snippet/{}", id)).await;
    assert_eq!(get_response.status_code(), StatusCode::OK);
    let viewed: serde_json::Value = get_response.json();
    assert_eq!(viewed["id"], id.as_str());
    assert_eq!(viewed["escaped_content"], "print(&#039;hi&#039;)");
    assert_eq!(viewed["language"], "python");
}

#[tokio::test]
async fn test_script_content_is_escaped_on_view() {
    let (server, _temp) = setup_test_server();

    let created: serde_json::Value = server
        .post("/api/snippet")
        .json(&json!({ "content": "<script>alert(1)</script>", "language": "html" }))
        .await
        .json();
    let id = created["id"].as_str().expect("id");

    let response = server.get(&format!("/api/snippet/{}", id)).await;
    response.assert_status_ok();
    let escaped = response.json::<serde_json::Value>()["escaped_content"]
        .as_str()
        .expect("escaped content")
        .to_string();
    assert!(escaped.contains("&lt;script&gt;"));
    assert!(!escaped.contains("<script>"));
    assert!(!response.text().contains("<script>"));
}

#[tokio::test]
async fn test_missing_language_renders_default_label() {
    let (server, _temp) = setup_test_server();

    for body in [json!({ "content": "plain" }), json!({ "content": "plain", "language": "" })] {
        let created: serde_json::Value = server.post("/api/snippet").json(&body).await.json();
        let id = created["id"].as_str().expect("id");
        let viewed: serde_json::Value = server.get(&format!("/api/snippet/{}", id)).await.json();
        assert_eq!(viewed["language"], "markup");
    }
}

#[tokio::test]
async fn test_empty_content_is_rejected() {
    let (server, _temp) = setup_test_server();

    for content in ["", "   \n\t"] {
        let response = server
            .post("/api/snippet")
            .json(&json!({ "content": content, "language": "rust" }))
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "Snippet content is empty");
    }
}

#[tokio::test]
async fn test_oversized_content_is_rejected() {
    let temp = TempDir::new().expect("temp dir");
    let mut config = test_config_for_db_path(&temp.path().join("test.db"));
    config.max_snippet_size = 16;
    let server = test_server_for_config(config);

    let response = server
        .post("/api/snippet")
        .json(&json!({ "content": "x".repeat(17) }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = server
        .post("/api/snippet")
        .json(&json!({ "content": "x".repeat(16) }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_unknown_and_malformed_ids_are_not_found() {
    let (server, _temp) = setup_test_server();

    for id in ["deadbeef", "DEADBEEF", "nope", "0123456789"] {
        let response = server.get(&format!("/api/snippet/{}", id)).await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND, "id: {}", id);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "Snippet not found");
    }
}

#[tokio::test]
async fn test_form_post_uses_original_field_names() {
    let (server, _temp) = setup_test_server();

    let response = server
        .post("/api/snippet/form")
        .form(&[("code", "echo \"hi\" && exit"), ("lang", "  BASH")])
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let created: serde_json::Value = response.json();
    let id = created["id"].as_str().expect("id");

    let viewed: serde_json::Value = server.get(&format!("/api/snippet/{}", id)).await.json();
    assert_eq!(viewed["escaped_content"], "echo &quot;hi&quot; &amp;&amp; exit");
    assert_eq!(viewed["language"], "bash");
}

#[tokio::test]
async fn test_sequential_saves_return_distinct_ids() {
    let (server, _temp) = setup_test_server();
    let mut ids = HashSet::new();

    for n in 0..20 {
        let created: serde_json::Value = server
            .post("/api/snippet")
            .json(&json!({ "content": format!("snippet {}", n) }))
            .await
            .json();
        let id = created["id"].as_str().expect("id").to_string();
        assert!(is_snippet_id(&id));
        ids.insert(id);
    }
    assert_eq!(ids.len(), 20);
}

#[tokio::test]
async fn test_security_headers_are_set() {
    let (server, _temp) = setup_test_server();

    let response = server.get("/api/snippet/deadbeef").await;
    response.assert_header("x-content-type-options", "nosniff");
    response.assert_header("x-frame-options", "DENY");
    response.assert_contains_header("content-security-policy");
}

#[tokio::test]
async fn test_snippets_persist_across_server_restart() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("test.db");

    let id = {
        let server = test_server_for_config(test_config_for_db_path(&db_path));
        let created: serde_json::Value = server
            .post("/api/snippet")
            .json(&json!({ "content": "fn main() {}", "language": "rust" }))
            .await
            .json();
        created["id"].as_str().expect("id").to_string()
    };

    let server = test_server_for_config(test_config_for_db_path(&db_path));
    let viewed: serde_json::Value = server.get(&format!("/api/snippet/{}", id)).await.json();
    assert_eq!(viewed["escaped_content"], "fn main() {}");
    assert_eq!(viewed["language"], "rust");
}

#[tokio::test]
async fn test_markup_dense_content_at_limit_is_accepted() {
    let temp = TempDir::new().expect("temp dir");
    let mut config = test_config_for_db_path(&temp.path().join("test.db"));
    config.max_snippet_size = 4096;
    let server = test_server_for_config(config);

    let markup = "<".repeat(4096);
    let response = server
        .post("/api/snippet/form")
        .form(&[("code", markup.as_str()), ("lang", "html")])
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let created: serde_json::Value = response.json();
    let id = created["id"].as_str().expect("id");
    let viewed: serde_json::Value = server.get(&format!("/api/snippet/{}", id)).await.json();
    assert_eq!(viewed["escaped_content"], "&lt;".repeat(4096));

    let control = "\u{1}".repeat(4096);
    let response = server
        .post("/api/snippet")
        .json(&json!({ "content": control }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let over = "<".repeat(4097);
    let response = server
        .post("/api/snippet/form")
        .form(&[("code", over.as_str())])
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}
