//! Contact — the sole entity of the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed classification for a contact.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
  Work,
  #[default]
  Personal,
  Family,
  Other,
}

impl Category {
  /// Every category, in display order.
  pub const ALL: [Category; 4] = [
    Category::Work,
    Category::Personal,
    Category::Family,
    Category::Other,
  ];

  /// The discriminant string stored in the `category` column.
  /// Must match the `rename_all = "lowercase"` serde tags above.
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Work => "work",
      Self::Personal => "personal",
      Self::Family => "family",
      Self::Other => "other",
    }
  }
}

/// A contact record.
///
/// `id` and `created_at` are assigned by the store at creation and never
/// change afterwards. Everything else is replaceable via an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
  pub id:         Uuid,
  pub name:       String,
  pub email:      String,
  pub phone:      Option<String>,
  pub company:    Option<String>,
  pub category:   Category,
  /// Opaque image reference; never interpreted by the core.
  pub avatar:     Option<String>,
  pub favorite:   bool,
  pub created_at: DateTime<Utc>,
}
