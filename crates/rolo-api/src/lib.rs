//! JSON REST API for the rolo contact service.
//!
//! Exposes an axum [`Router`] backed by any [`rolo_core::store::ContactStore`].
//! TLS and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", rolo_api::api_router(store.clone()))
//! ```

pub mod contacts;
pub mod error;
pub mod export;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post, put},
};
use rolo_core::store::ContactStore;
use serde::Deserialize;

pub use error::ApiError;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and the
/// `ROLO_*` environment. Every field has a default so the server runs with
/// no config file at all.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:       String,
  #[serde(default = "default_port")]
  pub port:       u16,
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 7151 }
fn default_store_path() -> PathBuf { PathBuf::from("rolo.db") }

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ContactStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route(
      "/contacts",
      get(contacts::list::<S>).post(contacts::create::<S>),
    )
    .route("/contacts/export.csv", get(export::csv::<S>))
    .route(
      "/contacts/{id}",
      put(contacts::update::<S>).delete(contacts::remove::<S>),
    )
    .route("/contacts/{id}/favorite", post(contacts::toggle::<S>))
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use rolo_store_sqlite::SqliteStore;
  use serde_json::{Value, json};
  use tower::ServiceExt as _;

  async fn test_router() -> Router {
    let store = SqliteStore::open_in_memory().await.unwrap();
    api_router(Arc::new(store))
  }

  async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
  ) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
      Some(v) => {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
        Body::from(v.to_string())
      }
      None => Body::empty(),
    };
    let resp = router
      .clone()
      .oneshot(builder.body(body).unwrap())
      .await
      .unwrap();

    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), 1 << 20)
      .await
      .unwrap();
    let value = if bytes.is_empty() {
      Value::Null
    } else {
      serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
  }

  fn alice() -> Value {
    json!({
      "name": "Alice Smith",
      "email": "a@x.com",
      "company": "Acme",
      "category": "work"
    })
  }

  // ── List / create ───────────────────────────────────────────────────────────

  #[tokio::test]
  async fn list_starts_empty() {
    let router = test_router().await;
    let (status, body) = send(&router, "GET", "/contacts", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
  }

  #[tokio::test]
  async fn create_assigns_identity_and_shows_up_in_list() {
    let router = test_router().await;

    let (status, created) =
      send(&router, "POST", "/contacts", Some(alice())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Alice Smith");
    assert_eq!(created["category"], "work");
    assert_eq!(created["favorite"], false);
    assert!(created["id"].is_string());
    assert!(created["created_at"].is_string());

    let (_, list) = send(&router, "GET", "/contacts", None).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], created["id"]);
    assert_eq!(list[0]["email"], "a@x.com");
  }

  #[tokio::test]
  async fn create_rejects_blank_name_before_any_write() {
    let router = test_router().await;

    let mut draft = alice();
    draft["name"] = json!("   ");
    let (status, body) = send(&router, "POST", "/contacts", Some(draft)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("name"));

    // Nothing was persisted.
    let (_, list) = send(&router, "GET", "/contacts", None).await;
    assert_eq!(list, json!([]));
  }

  // ── Update ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn update_replaces_mutable_fields() {
    let router = test_router().await;
    let (_, created) = send(&router, "POST", "/contacts", Some(alice())).await;
    let id = created["id"].as_str().unwrap().to_owned();

    let (status, updated) = send(
      &router,
      "PUT",
      &format!("/contacts/{id}"),
      Some(json!({
        "name": "Alice Jones",
        "email": "aj@x.com",
        "category": "personal",
        "favorite": true
      })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Alice Jones");
    assert_eq!(updated["favorite"], true);
    assert_eq!(updated["created_at"], created["created_at"]);
  }

  #[tokio::test]
  async fn update_unknown_id_is_404() {
    let router = test_router().await;
    let (status, _) = send(
      &router,
      "PUT",
      &format!("/contacts/{}", uuid::Uuid::new_v4()),
      Some(alice()),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
  }

  // ── Favorite toggle ─────────────────────────────────────────────────────────

  #[tokio::test]
  async fn toggle_flips_and_flips_back() {
    let router = test_router().await;
    let (_, created) = send(&router, "POST", "/contacts", Some(alice())).await;
    let uri = format!("/contacts/{}/favorite", created["id"].as_str().unwrap());

    let (status, once) = send(&router, "POST", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(once["favorite"], true);

    let (_, twice) = send(&router, "POST", &uri, None).await;
    assert_eq!(twice["favorite"], false);
  }

  #[tokio::test]
  async fn toggle_unknown_id_is_404() {
    let router = test_router().await;
    let (status, _) = send(
      &router,
      "POST",
      &format!("/contacts/{}/favorite", uuid::Uuid::new_v4()),
      None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
  }

  // ── Delete ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn delete_then_list_contains_no_trace() {
    let router = test_router().await;
    let (_, created) = send(&router, "POST", "/contacts", Some(alice())).await;
    let id = created["id"].as_str().unwrap().to_owned();

    let (status, _) =
      send(&router, "DELETE", &format!("/contacts/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, list) = send(&router, "GET", "/contacts", None).await;
    assert_eq!(list, json!([]));
  }

  #[tokio::test]
  async fn delete_unknown_id_is_404_not_silent_success() {
    let router = test_router().await;
    let (status, _) = send(
      &router,
      "DELETE",
      &format!("/contacts/{}", uuid::Uuid::new_v4()),
      None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
  }

  // ── Export ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn export_serves_csv_attachment() {
    let router = test_router().await;
    send(&router, "POST", "/contacts", Some(alice())).await;

    let resp = router
      .clone()
      .oneshot(
        Request::builder()
          .method("GET")
          .uri("/contacts/export.csv")
          .body(Body::empty())
          .unwrap(),
      )
      .await
      .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp
      .headers()
      .get(header::CONTENT_TYPE)
      .unwrap()
      .to_str()
      .unwrap()
      .to_owned();
    assert!(content_type.starts_with("text/csv"));

    let bytes = axum::body::to_bytes(resp.into_body(), 1 << 20)
      .await
      .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.starts_with("\"Name\",\"Email\""));
    assert!(text.contains("\"Alice Smith\""));
  }
}
