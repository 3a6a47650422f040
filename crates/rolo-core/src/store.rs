//! The `ContactStore` trait — the contract every backend fulfils.
//!
//! The trait is implemented by storage backends (e.g. `rolo-store-sqlite`).
//! Higher layers (`rolo-api`) depend on this abstraction, not on any
//! concrete backend, so a substitute or in-memory store can be injected.

use std::future::Future;

use uuid::Uuid;

use crate::{contact::Contact, draft::ContactDraft};

/// Abstraction over a contact store backend.
///
/// Absent records are reported as `None` (or `false` for deletes) rather
/// than as errors; the backend's error type is reserved for genuine
/// failures. All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ContactStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Return the full contact set, ordered by creation timestamp
  /// descending (newest first).
  fn list_contacts(
    &self,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  /// Persist a new contact and return it with its store-assigned `id` and
  /// `created_at`. The draft is expected to be validated already.
  fn create_contact(
    &self,
    draft: ContactDraft,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// Replace every mutable field of the contact with `id` and return the
  /// updated record. `created_at` is never touched. Returns `None` if the
  /// id is unknown.
  fn update_contact(
    &self,
    id: Uuid,
    draft: ContactDraft,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Negate the favorite flag in a single atomic statement and return the
  /// updated record. Returns `None` if the id is unknown.
  ///
  /// The new value is computed inside the store, never from a caller
  /// snapshot, so concurrent toggles cannot lose updates.
  fn toggle_favorite(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Remove the contact with `id`. Returns `false` if the id is unknown —
  /// callers must not treat a missing id as a silent success.
  fn delete_contact(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
