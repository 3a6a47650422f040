//! ContactDraft — the mutable-field subset accepted by create and update.

use serde::{Deserialize, Serialize};

use crate::{Error, Result, contact::Category};

/// Input to [`crate::store::ContactStore::create_contact`] and
/// [`crate::store::ContactStore::update_contact`].
/// `id` and `created_at` are always set by the store; they are not accepted
/// from callers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactDraft {
  pub name:     String,
  pub email:    String,
  #[serde(default)]
  pub phone:    Option<String>,
  #[serde(default)]
  pub company:  Option<String>,
  #[serde(default)]
  pub category: Category,
  #[serde(default)]
  pub avatar:   Option<String>,
  #[serde(default)]
  pub favorite: bool,
}

impl ContactDraft {
  /// Validate and normalise the draft at the edge, before any store or
  /// network call.
  ///
  /// Trims `name` and `email` and rejects either being empty; optional
  /// fields that are blank after trimming collapse to `None`.
  pub fn validate(mut self) -> Result<Self> {
    self.name = self.name.trim().to_owned();
    if self.name.is_empty() {
      return Err(Error::Validation { field: "name" });
    }

    self.email = self.email.trim().to_owned();
    if self.email.is_empty() {
      return Err(Error::Validation { field: "email" });
    }

    self.phone = normalise(self.phone);
    self.company = normalise(self.company);
    self.avatar = normalise(self.avatar);

    Ok(self)
  }
}

/// Trim an optional field; blank collapses to `None`.
fn normalise(value: Option<String>) -> Option<String> {
  value
    .map(|s| s.trim().to_owned())
    .filter(|s| !s.is_empty())
}
