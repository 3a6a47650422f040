//! [`SqliteStore`] — the SQLite implementation of [`ContactStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use rolo_core::{contact::Contact, draft::ContactDraft, store::ContactStore};

use crate::{
  Error, Result,
  encode::{RawContact, encode_category, encode_dt, encode_uuid},
  schema::SCHEMA,
};

/// Column list shared by every contact SELECT.
/// Order must match [`RawContact::from_row`].
const CONTACT_COLUMNS: &str =
  "id, name, email, phone, company, category, avatar, is_favorite, created_at";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A contact store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Read one row by id. Runs on the given connection so callers can pair
  /// it with a preceding write inside a single `call` closure.
  fn fetch_row(
    conn: &rusqlite::Connection,
    id_str: &str,
  ) -> rusqlite::Result<Option<RawContact>> {
    conn
      .query_row(
        &format!("SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = ?1"),
        rusqlite::params![id_str],
        RawContact::from_row,
      )
      .optional()
  }
}

// ─── ContactStore impl ───────────────────────────────────────────────────────

impl ContactStore for SqliteStore {
  type Error = Error;

  async fn list_contacts(&self) -> Result<Vec<Contact>> {
    let raws: Vec<RawContact> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {CONTACT_COLUMNS} FROM contacts
           ORDER BY created_at DESC, id DESC"
        ))?;
        let rows = stmt
          .query_map([], RawContact::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawContact::into_contact).collect()
  }

  async fn create_contact(&self, draft: ContactDraft) -> Result<Contact> {
    let contact = Contact {
      id:         Uuid::new_v4(),
      name:       draft.name,
      email:      draft.email,
      phone:      draft.phone,
      company:    draft.company,
      category:   draft.category,
      avatar:     draft.avatar,
      favorite:   draft.favorite,
      created_at: Utc::now(),
    };

    let id_str       = encode_uuid(contact.id);
    let at_str       = encode_dt(contact.created_at);
    let category_str = encode_category(contact.category).to_owned();
    let c            = contact.clone();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO contacts (
             id, name, email, phone, company, category, avatar,
             is_favorite, created_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
          rusqlite::params![
            id_str,
            c.name,
            c.email,
            c.phone,
            c.company,
            category_str,
            c.avatar,
            c.favorite,
            at_str,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(contact)
  }

  async fn update_contact(
    &self,
    id: Uuid,
    draft: ContactDraft,
  ) -> Result<Option<Contact>> {
    let id_str       = encode_uuid(id);
    let category_str = encode_category(draft.category).to_owned();

    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        // created_at is deliberately absent from the SET list.
        let changed = conn.execute(
          "UPDATE contacts
           SET name = ?2, email = ?3, phone = ?4, company = ?5,
               category = ?6, avatar = ?7, is_favorite = ?8
           WHERE id = ?1",
          rusqlite::params![
            id_str,
            draft.name,
            draft.email,
            draft.phone,
            draft.company,
            category_str,
            draft.avatar,
            draft.favorite,
          ],
        )?;

        if changed == 0 {
          return Ok(None);
        }
        Ok(Self::fetch_row(conn, &id_str)?)
      })
      .await?;

    raw.map(RawContact::into_contact).transpose()
  }

  async fn toggle_favorite(&self, id: Uuid) -> Result<Option<Contact>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        // Negate in a single statement: the new value is computed here,
        // never from a caller snapshot, so concurrent toggles cannot lose
        // updates.
        let changed = conn.execute(
          "UPDATE contacts SET is_favorite = NOT is_favorite WHERE id = ?1",
          rusqlite::params![id_str],
        )?;

        if changed == 0 {
          return Ok(None);
        }
        Ok(Self::fetch_row(conn, &id_str)?)
      })
      .await?;

    raw.map(RawContact::into_contact).transpose()
  }

  async fn delete_contact(&self, id: Uuid) -> Result<bool> {
    let id_str = encode_uuid(id);

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM contacts WHERE id = ?1",
          rusqlite::params![id_str],
        )?)
      })
      .await?;

    Ok(changed > 0)
  }
}
