//! The contact repository — the only component that talks to the service.
//!
//! Owns the cached projection of the remote contact set (newest first).
//! Mutations patch the projection in place from the record returned by the
//! server; a failed call leaves the projection untouched, so the UI keeps
//! showing the previous consistent snapshot.

use rolo_core::{contact::Contact, draft::ContactDraft};
use thiserror::Error;
use uuid::Uuid;

use crate::client::{ApiClient, ClientError};

// ─── Errors ───────────────────────────────────────────────────────────────────

/// Failure taxonomy for repository operations. Every failure is terminal for
/// its operation: nothing retries, and the projection is never touched.
#[derive(Debug, Error)]
pub enum RepoError {
  #[error("could not load contacts: {0}")]
  FetchFailed(#[source] ClientError),

  #[error("could not create contact: {0}")]
  CreateFailed(#[source] ClientError),

  #[error("could not update contact: {0}")]
  UpdateFailed(#[source] ClientError),

  #[error("could not update favorite status: {0}")]
  ToggleFailed(#[source] ClientError),

  #[error("could not delete contact: {0}")]
  DeleteFailed(#[source] ClientError),

  #[error("contact not found: {0}")]
  NotFound(Uuid),

  #[error(transparent)]
  Validation(#[from] rolo_core::Error),
}

// ─── Repository ───────────────────────────────────────────────────────────────

pub struct Repository {
  client:   ApiClient,
  contacts: Vec<Contact>,
}

impl Repository {
  pub fn new(client: ApiClient) -> Self {
    Self {
      client,
      contacts: Vec::new(),
    }
  }

  /// The cached projection, newest first. Read-only to callers.
  pub fn contacts(&self) -> &[Contact] { &self.contacts }

  /// Replace the projection with a fresh `GET /contacts`.
  pub async fn refresh(&mut self) -> Result<(), RepoError> {
    let contacts = self
      .client
      .list_contacts()
      .await
      .map_err(RepoError::FetchFailed)?;
    self.contacts = contacts;
    Ok(())
  }

  /// Validate at the edge — before any network call — then create.
  /// The stored record goes to the front of the projection (it is the
  /// newest).
  pub async fn create(
    &mut self,
    draft: ContactDraft,
  ) -> Result<Contact, RepoError> {
    let draft = draft.validate()?;
    let created = self
      .client
      .create_contact(&draft)
      .await
      .map_err(RepoError::CreateFailed)?;
    self.contacts.insert(0, created.clone());
    Ok(created)
  }

  /// Validate, then replace every mutable field of the contact with `id`.
  pub async fn update(
    &mut self,
    id: Uuid,
    draft: ContactDraft,
  ) -> Result<Contact, RepoError> {
    let draft = draft.validate()?;
    let updated =
      self.client.update_contact(id, &draft).await.map_err(|e| {
        if e.is_not_found() {
          RepoError::NotFound(id)
        } else {
          RepoError::UpdateFailed(e)
        }
      })?;
    self.absorb(updated.clone());
    Ok(updated)
  }

  /// Ask the service for an atomic flag flip. The new value is computed
  /// server-side, never from this projection, so a stale snapshot cannot
  /// lose an update.
  pub async fn toggle_favorite(
    &mut self,
    id: Uuid,
  ) -> Result<Contact, RepoError> {
    let updated = self.client.toggle_favorite(id).await.map_err(|e| {
      if e.is_not_found() {
        RepoError::NotFound(id)
      } else {
        RepoError::ToggleFailed(e)
      }
    })?;
    self.absorb(updated.clone());
    Ok(updated)
  }

  /// Delete the contact with `id`. A missing id is an error, never a silent
  /// success.
  pub async fn delete(&mut self, id: Uuid) -> Result<(), RepoError> {
    self.client.delete_contact(id).await.map_err(|e| {
      if e.is_not_found() {
        RepoError::NotFound(id)
      } else {
        RepoError::DeleteFailed(e)
      }
    })?;
    self.contacts.retain(|c| c.id != id);
    Ok(())
  }

  /// Replace the projection entry for `contact.id`, or — if another client
  /// created the record — insert it at its created_at-descending position.
  fn absorb(&mut self, contact: Contact) {
    match self.contacts.iter().position(|c| c.id == contact.id) {
      Some(i) => self.contacts[i] = contact,
      None => {
        let at = self
          .contacts
          .partition_point(|c| c.created_at > contact.created_at);
        self.contacts.insert(at, contact);
      }
    }
  }
}
