//! SQL schema for the rolo SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! the `PRAGMA user_version` number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS contacts (
    id          TEXT PRIMARY KEY,
    name        TEXT NOT NULL,
    email       TEXT NOT NULL,
    phone       TEXT,
    company     TEXT,
    category    TEXT NOT NULL DEFAULT 'personal',  -- 'work' | 'personal' | 'family' | 'other'
    avatar      TEXT,
    is_favorite INTEGER NOT NULL DEFAULT 0,
    created_at  TEXT NOT NULL    -- ISO 8601 UTC; server-assigned, never updated
);

CREATE INDEX IF NOT EXISTS contacts_created_idx  ON contacts(created_at);
CREATE INDEX IF NOT EXISTS contacts_category_idx ON contacts(category);

PRAGMA user_version = 1;
";
