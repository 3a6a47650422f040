//! Integration tests for `SqliteStore` against an in-memory database.

use rolo_core::{
  contact::Category,
  draft::ContactDraft,
  store::ContactStore,
};
use uuid::Uuid;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn draft(name: &str, email: &str) -> ContactDraft {
  ContactDraft {
    name: name.into(),
    email: email.into(),
    ..Default::default()
  }
}

// ─── Create / list ───────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_list_roundtrip() {
  let s = store().await;

  let mut input = draft("Alice Smith", "a@x.com");
  input.phone = Some("555-0100".into());
  input.company = Some("Acme".into());
  input.category = Category::Work;

  let created = s.create_contact(input).await.unwrap();
  assert_eq!(created.name, "Alice Smith");
  assert_eq!(created.email, "a@x.com");
  assert_eq!(created.phone.as_deref(), Some("555-0100"));
  assert_eq!(created.company.as_deref(), Some("Acme"));
  assert_eq!(created.category, Category::Work);
  assert!(!created.favorite);

  let all = s.list_contacts().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0], created);
}

#[tokio::test]
async fn list_is_newest_first() {
  let s = store().await;

  let first = s.create_contact(draft("First", "1@x.com")).await.unwrap();
  tokio::time::sleep(std::time::Duration::from_millis(5)).await;
  let second = s.create_contact(draft("Second", "2@x.com")).await.unwrap();
  tokio::time::sleep(std::time::Duration::from_millis(5)).await;
  let third = s.create_contact(draft("Third", "3@x.com")).await.unwrap();

  let all = s.list_contacts().await.unwrap();
  let ids: Vec<Uuid> = all.iter().map(|c| c.id).collect();
  assert_eq!(ids, vec![third.id, second.id, first.id]);

  // created_at is non-increasing down the list.
  assert!(all.windows(2).all(|w| w[0].created_at >= w[1].created_at));
}

#[tokio::test]
async fn category_roundtrips_for_every_variant() {
  let s = store().await;

  for category in Category::ALL {
    let mut input = draft("X", "x@x.com");
    input.category = category;
    let created = s.create_contact(input).await.unwrap();
    assert_eq!(created.category, category);
  }

  let all = s.list_contacts().await.unwrap();
  assert_eq!(all.len(), Category::ALL.len());
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_replaces_mutable_fields_only() {
  let s = store().await;
  let created = s.create_contact(draft("Alice", "a@x.com")).await.unwrap();

  let mut replacement = draft("Alice Jones", "aj@x.com");
  replacement.company = Some("Initech".into());
  replacement.category = Category::Work;
  replacement.favorite = true;

  let updated = s
    .update_contact(created.id, replacement)
    .await
    .unwrap()
    .expect("contact exists");

  assert_eq!(updated.id, created.id);
  assert_eq!(updated.name, "Alice Jones");
  assert_eq!(updated.email, "aj@x.com");
  assert_eq!(updated.company.as_deref(), Some("Initech"));
  assert!(updated.favorite);

  // The creation timestamp is immutable.
  assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn update_unknown_id_returns_none() {
  let s = store().await;
  let result = s
    .update_contact(Uuid::new_v4(), draft("Ghost", "g@x.com"))
    .await
    .unwrap();
  assert!(result.is_none());
}

// ─── Favorite toggle ─────────────────────────────────────────────────────────

#[tokio::test]
async fn toggle_favorite_is_its_own_inverse() {
  let s = store().await;
  let created = s.create_contact(draft("Alice", "a@x.com")).await.unwrap();
  assert!(!created.favorite);

  let once = s
    .toggle_favorite(created.id)
    .await
    .unwrap()
    .expect("contact exists");
  assert!(once.favorite);

  let twice = s
    .toggle_favorite(created.id)
    .await
    .unwrap()
    .expect("contact exists");
  assert!(!twice.favorite);
  assert_eq!(twice.favorite, created.favorite);
}

#[tokio::test]
async fn toggle_is_atomic_across_interleaved_callers() {
  // Two handles toggling the same record: an even number of toggles nets
  // out regardless of interleaving, because the negation happens in SQL.
  let s = store().await;
  let other = s.clone();
  let created = s.create_contact(draft("Alice", "a@x.com")).await.unwrap();

  for _ in 0..2 {
    s.toggle_favorite(created.id).await.unwrap();
    other.toggle_favorite(created.id).await.unwrap();
  }

  let all = s.list_contacts().await.unwrap();
  assert!(!all[0].favorite);
}

#[tokio::test]
async fn toggle_unknown_id_returns_none() {
  let s = store().await;
  let result = s.toggle_favorite(Uuid::new_v4()).await.unwrap();
  assert!(result.is_none());
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_removes_record() {
  let s = store().await;
  let keep = s.create_contact(draft("Keep", "k@x.com")).await.unwrap();
  let gone = s.create_contact(draft("Gone", "g@x.com")).await.unwrap();

  assert!(s.delete_contact(gone.id).await.unwrap());

  let all = s.list_contacts().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].id, keep.id);
  assert!(!all.iter().any(|c| c.id == gone.id));
}

#[tokio::test]
async fn delete_unknown_id_reports_false() {
  let s = store().await;
  assert!(!s.delete_contact(Uuid::new_v4()).await.unwrap());
}

// ─── Optional fields ─────────────────────────────────────────────────────────

#[tokio::test]
async fn absent_optionals_stay_none_through_storage() {
  let s = store().await;
  let created = s.create_contact(draft("Bare", "b@x.com")).await.unwrap();

  let all = s.list_contacts().await.unwrap();
  assert_eq!(all[0].id, created.id);
  assert_eq!(all[0].phone, None);
  assert_eq!(all[0].company, None);
  assert_eq!(all[0].avatar, None);
}
