//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings (which sort chronologically for
//! a fixed UTC offset). UUIDs are stored as hyphenated lowercase strings.
//! The favorite flag is stored as 0/1.

use chrono::{DateTime, Utc};
use rolo_core::contact::{Category, Contact};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Category ────────────────────────────────────────────────────────────────

pub fn encode_category(c: Category) -> &'static str { c.as_str() }

pub fn decode_category(s: &str) -> Result<Category> {
  match s {
    "work" => Ok(Category::Work),
    "personal" => Ok(Category::Personal),
    "family" => Ok(Category::Family),
    "other" => Ok(Category::Other),
    other => Err(Error::UnknownCategory(other.to_owned())),
  }
}

// ─── Row type ────────────────────────────────────────────────────────────────

/// Raw values read directly from a `contacts` row.
pub struct RawContact {
  pub id:          String,
  pub name:        String,
  pub email:       String,
  pub phone:       Option<String>,
  pub company:     Option<String>,
  pub category:    String,
  pub avatar:      Option<String>,
  pub is_favorite: bool,
  pub created_at:  String,
}

impl RawContact {
  /// Read all columns of a contact SELECT row. Column order must match the
  /// `CONTACT_COLUMNS` list in the store module.
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:          row.get(0)?,
      name:        row.get(1)?,
      email:       row.get(2)?,
      phone:       row.get(3)?,
      company:     row.get(4)?,
      category:    row.get(5)?,
      avatar:      row.get(6)?,
      is_favorite: row.get(7)?,
      created_at:  row.get(8)?,
    })
  }

  pub fn into_contact(self) -> Result<Contact> {
    Ok(Contact {
      id:         decode_uuid(&self.id)?,
      name:       self.name,
      email:      self.email,
      phone:      self.phone,
      company:    self.company,
      category:   decode_category(&self.category)?,
      avatar:     self.avatar,
      favorite:   self.is_favorite,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}
