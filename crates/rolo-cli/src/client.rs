//! Async HTTP client wrapping the rolo JSON API.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use rolo_core::{contact::Contact, draft::ContactDraft};
use thiserror::Error;
use uuid::Uuid;

/// An error from a single API round-trip.
#[derive(Debug, Error)]
pub enum ClientError {
  #[error("transport error: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("server responded {0}")]
  Status(StatusCode),
}

impl ClientError {
  pub fn is_not_found(&self) -> bool {
    matches!(self, Self::Status(s) if *s == StatusCode::NOT_FOUND)
  }
}

/// Connection settings for the rolo API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

/// Async HTTP client for the rolo JSON REST API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self, ClientError> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
  }

  fn check(resp: Response) -> Result<Response, ClientError> {
    if resp.status().is_success() {
      Ok(resp)
    } else {
      Err(ClientError::Status(resp.status()))
    }
  }

  /// `GET /contacts`
  pub async fn list_contacts(&self) -> Result<Vec<Contact>, ClientError> {
    let resp = self.client.get(self.url("/contacts")).send().await?;
    Ok(Self::check(resp)?.json().await?)
  }

  /// `POST /contacts`
  pub async fn create_contact(
    &self,
    draft: &ContactDraft,
  ) -> Result<Contact, ClientError> {
    let resp = self
      .client
      .post(self.url("/contacts"))
      .json(draft)
      .send()
      .await?;
    Ok(Self::check(resp)?.json().await?)
  }

  /// `PUT /contacts/:id`
  pub async fn update_contact(
    &self,
    id: Uuid,
    draft: &ContactDraft,
  ) -> Result<Contact, ClientError> {
    let resp = self
      .client
      .put(self.url(&format!("/contacts/{id}")))
      .json(draft)
      .send()
      .await?;
    Ok(Self::check(resp)?.json().await?)
  }

  /// `POST /contacts/:id/favorite`
  pub async fn toggle_favorite(&self, id: Uuid) -> Result<Contact, ClientError> {
    let resp = self
      .client
      .post(self.url(&format!("/contacts/{id}/favorite")))
      .send()
      .await?;
    Ok(Self::check(resp)?.json().await?)
  }

  /// `DELETE /contacts/:id`
  pub async fn delete_contact(&self, id: Uuid) -> Result<(), ClientError> {
    let resp = self
      .client
      .delete(self.url(&format!("/contacts/{id}")))
      .send()
      .await?;
    Self::check(resp)?;
    Ok(())
  }
}
