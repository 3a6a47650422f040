//! Application state machine and event dispatcher.
//!
//! Holds the transient UI state: search term, category filter, favorites
//! flag, and the entry-form state machine. All contact data lives in the
//! [`Repository`]; this layer only derives views of it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rolo_core::{
  contact::{Category, Contact},
  draft::ContactDraft,
  view::filter_contacts,
};
use uuid::Uuid;

use crate::{
  notice::Notice,
  repo::{RepoError, Repository},
};

// ─── Entry form ───────────────────────────────────────────────────────────────

/// Entry-form state machine. No transition leaves the form open once a
/// submit has been dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
  Closed,
  Adding,
  Editing(Uuid),
}

/// Number of focusable form fields (name, email, phone, company, category).
pub const FORM_FIELD_COUNT: usize = 5;

/// Index of the category selector, which cycles instead of taking input.
pub const CATEGORY_FIELD: usize = 4;

/// Editable buffers backing the entry form.
///
/// The favorite flag and avatar reference are not exposed as fields; they
/// are carried through from the edit target unchanged so an edit never
/// silently resets them.
#[derive(Debug, Clone, Default)]
pub struct FormFields {
  pub name:     String,
  pub email:    String,
  pub phone:    String,
  pub company:  String,
  pub category: Category,
  favorite:     bool,
  avatar:       Option<String>,
}

impl FormFields {
  fn from_contact(c: &Contact) -> Self {
    Self {
      name:     c.name.clone(),
      email:    c.email.clone(),
      phone:    c.phone.clone().unwrap_or_default(),
      company:  c.company.clone().unwrap_or_default(),
      category: c.category,
      favorite: c.favorite,
      avatar:   c.avatar.clone(),
    }
  }

  /// Build the draft dispatched to the repository. Unvalidated; validation
  /// happens at the repository edge.
  pub fn to_draft(&self) -> ContactDraft {
    ContactDraft {
      name:     self.name.clone(),
      email:    self.email.clone(),
      phone:    (!self.phone.is_empty()).then(|| self.phone.clone()),
      company:  (!self.company.is_empty()).then(|| self.company.clone()),
      category: self.category,
      avatar:   self.avatar.clone(),
      favorite: self.favorite,
    }
  }

  /// The text buffer under `focus`; `None` for the category selector.
  fn buffer_mut(&mut self, focus: usize) -> Option<&mut String> {
    match focus {
      0 => Some(&mut self.name),
      1 => Some(&mut self.email),
      2 => Some(&mut self.phone),
      3 => Some(&mut self.company),
      _ => None,
    }
  }
}

fn next_category(c: Category) -> Category {
  let i = Category::ALL.iter().position(|x| *x == c).unwrap_or(0);
  Category::ALL[(i + 1) % Category::ALL.len()]
}

fn prev_category(c: Category) -> Category {
  let i = Category::ALL.iter().position(|x| *x == c).unwrap_or(0);
  Category::ALL[(i + Category::ALL.len() - 1) % Category::ALL.len()]
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  /// Repository: API client plus the cached projection.
  pub repo: Repository,

  /// Current free-text search term.
  pub filter: String,

  /// Whether the user is typing a search query.
  pub filter_active: bool,

  /// Selected category filter; `None` means "all".
  pub category_filter: Option<Category>,

  pub favorites_only: bool,

  /// Entry-form state machine.
  pub form: FormState,

  pub fields: FormFields,

  /// Index of the focused form field.
  pub form_focus: usize,

  /// Cursor position within the *filtered* contact list.
  pub list_cursor: usize,

  /// Last notice; shown in the status bar until the next one replaces it.
  pub notice: Option<Notice>,

  /// Whether the last load failed. While set, the list is unavailable —
  /// not empty.
  pub load_failed: bool,
}

impl App {
  pub fn new(repo: Repository) -> Self {
    Self {
      repo,
      filter: String::new(),
      filter_active: false,
      category_filter: None,
      favorites_only: false,
      form: FormState::Closed,
      fields: FormFields::default(),
      form_focus: 0,
      list_cursor: 0,
      notice: None,
      load_failed: false,
    }
  }

  // ── Derived view ──────────────────────────────────────────────────────────

  /// Contacts visible under the current search / category / favorites state.
  pub fn visible(&self) -> Vec<&Contact> {
    filter_contacts(
      self.repo.contacts(),
      &self.filter,
      self.category_filter,
      self.favorites_only,
    )
  }

  /// The contact under the list cursor in the filtered view, if any.
  pub fn cursor_contact(&self) -> Option<&Contact> {
    let list = self.visible();
    list.get(self.list_cursor).copied()
  }

  fn clamp_cursor(&mut self) {
    let len = self.visible().len();
    self.list_cursor = self.list_cursor.min(len.saturating_sub(1));
  }

  // ── Data loading ──────────────────────────────────────────────────────────

  /// Fetch the full contact set. On failure the previous projection stays
  /// visible but the list is flagged unavailable until a retry succeeds.
  pub async fn load(&mut self) {
    match self.repo.refresh().await {
      Ok(()) => {
        self.load_failed = false;
        self.clamp_cursor();
      }
      Err(e) => {
        self.load_failed = true;
        self.notice = Some(Notice::error("Error", format!("{e}")));
      }
    }
  }

  // ── Entry form ────────────────────────────────────────────────────────────

  /// Open the entry form in "add" mode with blank fields.
  pub fn begin_add(&mut self) {
    self.form = FormState::Adding;
    self.fields = FormFields::default();
    self.form_focus = 0;
  }

  /// Open the entry form in "edit" mode seeded from `contact`.
  pub fn begin_edit(&mut self, contact: &Contact) {
    self.form = FormState::Editing(contact.id);
    self.fields = FormFields::from_contact(contact);
    self.form_focus = 0;
  }

  /// Close the form and discard any in-progress edits without touching the
  /// repository.
  pub fn cancel_form(&mut self) {
    self.form = FormState::Closed;
    self.fields = FormFields::default();
  }

  /// Dispatch the entry form to the repository.
  ///
  /// A validation failure means nothing was dispatched, so the form stays
  /// open for correction. Otherwise the form closes as part of the dispatch
  /// and the operation's result is returned to the caller, which decides how
  /// to surface it (the current UI reports failures as a notice and leaves
  /// the form closed).
  pub async fn submit_form(&mut self) -> Option<Result<Contact, RepoError>> {
    if self.form == FormState::Closed {
      return None;
    }

    let draft = match self.fields.to_draft().validate() {
      Ok(d) => d,
      Err(e) => return Some(Err(RepoError::Validation(e))),
    };

    let target = std::mem::replace(&mut self.form, FormState::Closed);
    self.fields = FormFields::default();

    match target {
      FormState::Adding => Some(self.repo.create(draft).await),
      FormState::Editing(id) => Some(self.repo.update(id, draft).await),
      FormState::Closed => None, // excluded by the guard above
    }
  }

  // ── Filters ───────────────────────────────────────────────────────────────

  fn cycle_category_filter(&mut self) {
    self.category_filter = match self.category_filter {
      None => Some(Category::Work),
      Some(Category::Work) => Some(Category::Personal),
      Some(Category::Personal) => Some(Category::Family),
      Some(Category::Family) => Some(Category::Other),
      Some(Category::Other) => None,
    };
  }

  // ── Mutations from the list ───────────────────────────────────────────────

  async fn toggle_cursor_favorite(&mut self) {
    let Some(id) = self.cursor_contact().map(|c| c.id) else {
      return;
    };

    match self.repo.toggle_favorite(id).await {
      Ok(c) => {
        let (title, verb) = if c.favorite {
          ("Added to favorites", "added to")
        } else {
          ("Removed from favorites", "removed from")
        };
        self.notice = Some(Notice::success(
          title,
          format!("{} has been {verb} your favorites.", c.name),
        ));
      }
      Err(_) => {
        self.notice = Some(Notice::error(
          "Error",
          "Failed to update favorite status. Please try again.",
        ));
      }
    }
  }

  async fn delete_cursor_contact(&mut self) {
    let Some((id, name)) = self
      .cursor_contact()
      .map(|c| (c.id, c.name.clone()))
    else {
      return;
    };

    match self.repo.delete(id).await {
      Ok(()) => {
        self.notice = Some(Notice::info(
          "Contact deleted",
          format!("{name} has been removed from your contacts."),
        ));
        self.clamp_cursor();
      }
      Err(_) => {
        self.notice = Some(Notice::error(
          "Error",
          "Failed to delete contact. Please try again.",
        ));
      }
    }
  }

  // ── Export ────────────────────────────────────────────────────────────────

  /// Write the full contact set (not the filtered view) to `contacts.csv`
  /// in the working directory.
  fn export_csv(&mut self) {
    let contacts = self.repo.contacts();
    let csv = rolo_export::render_csv(contacts);

    self.notice = Some(match std::fs::write("contacts.csv", csv) {
      Ok(()) => Notice::success(
        "Contacts exported",
        format!("Wrote {} contacts to contacts.csv.", contacts.len()),
      ),
      Err(e) => {
        Notice::error("Error", format!("Failed to write contacts.csv: {e}"))
      }
    });
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub async fn handle_key(&mut self, key: KeyEvent) -> bool {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL)
      && key.code == KeyCode::Char('c')
    {
      return false;
    }

    if self.form != FormState::Closed {
      self.handle_form_key(key).await;
      return true;
    }

    // Search input mode: all printable keys go into the term.
    if self.filter_active {
      self.handle_filter_key(key);
      return true;
    }

    self.handle_list_key(key).await
  }

  fn handle_filter_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Esc => {
        self.filter_active = false;
        self.filter.clear();
        self.list_cursor = 0;
      }
      KeyCode::Enter => {
        // Keep the term applied; just leave input mode.
        self.filter_active = false;
        self.list_cursor = 0;
      }
      KeyCode::Backspace => {
        self.filter.pop();
        self.list_cursor = 0;
      }
      KeyCode::Char(c) => {
        self.filter.push(c);
        self.list_cursor = 0;
      }
      _ => {}
    }
  }

  async fn handle_list_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      // Quit
      KeyCode::Char('q') => return false,

      // Navigation
      KeyCode::Down | KeyCode::Char('j') => {
        let len = self.visible().len();
        if len > 0 && self.list_cursor + 1 < len {
          self.list_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        if self.list_cursor > 0 {
          self.list_cursor -= 1;
        }
      }

      // Search
      KeyCode::Char('/') => {
        self.filter_active = true;
        self.filter.clear();
        self.list_cursor = 0;
      }

      // Filters
      KeyCode::Char('f') => {
        self.favorites_only = !self.favorites_only;
        self.clamp_cursor();
      }
      KeyCode::Char('c') => {
        self.cycle_category_filter();
        self.clamp_cursor();
      }

      // Entry form
      KeyCode::Char('a') => self.begin_add(),
      KeyCode::Enter | KeyCode::Char('e') => {
        if let Some(c) = self.cursor_contact().cloned() {
          self.begin_edit(&c);
        }
      }

      // Mutations
      KeyCode::Char(' ') => self.toggle_cursor_favorite().await,
      KeyCode::Char('d') => self.delete_cursor_contact().await,

      // Export / reload
      KeyCode::Char('x') => self.export_csv(),
      KeyCode::Char('r') => self.load().await,

      _ => {}
    }
    true
  }

  async fn handle_form_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Esc => self.cancel_form(),

      KeyCode::Tab | KeyCode::Down => {
        self.form_focus = (self.form_focus + 1) % FORM_FIELD_COUNT;
      }
      KeyCode::BackTab | KeyCode::Up => {
        self.form_focus =
          (self.form_focus + FORM_FIELD_COUNT - 1) % FORM_FIELD_COUNT;
      }

      KeyCode::Left if self.form_focus == CATEGORY_FIELD => {
        self.fields.category = prev_category(self.fields.category);
      }
      KeyCode::Right if self.form_focus == CATEGORY_FIELD => {
        self.fields.category = next_category(self.fields.category);
      }

      KeyCode::Backspace => {
        if let Some(buf) = self.fields.buffer_mut(self.form_focus) {
          buf.pop();
        }
      }
      KeyCode::Char(ch) => {
        if let Some(buf) = self.fields.buffer_mut(self.form_focus) {
          buf.push(ch);
        } else if ch == ' ' {
          self.fields.category = next_category(self.fields.category);
        }
      }

      KeyCode::Enter => {
        let was_adding = self.form == FormState::Adding;
        match self.submit_form().await {
          None => {}
          Some(Ok(contact)) => {
            let (title, description) = if was_adding {
              (
                "Contact added",
                format!("{} has been added to your contacts.", contact.name),
              )
            } else {
              ("Contact updated", format!("{} has been updated.", contact.name))
            };
            self.notice = Some(Notice::success(title, description));
            self.clamp_cursor();
          }
          Some(Err(RepoError::Validation(e))) => {
            // Nothing was dispatched; the form is still open.
            self.notice = Some(Notice::error("Error", format!("{e}")));
          }
          Some(Err(_)) if was_adding => {
            self.notice = Some(Notice::error(
              "Error",
              "Failed to add contact. Please try again.",
            ));
          }
          Some(Err(_)) => {
            self.notice = Some(Notice::error(
              "Error",
              "Failed to update contact. Please try again.",
            ));
          }
        }
      }

      _ => {}
    }
  }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use chrono::Utc;
  use rolo_core::contact::{Category, Contact};
  use uuid::Uuid;

  use super::*;
  use crate::client::{ApiClient, ApiConfig};

  /// An app whose client points nowhere; only used for state-machine paths
  /// that never reach the network.
  fn app() -> App {
    let client = ApiClient::new(ApiConfig {
      base_url: "http://127.0.0.1:9".into(),
    })
    .expect("client");
    App::new(Repository::new(client))
  }

  fn contact(name: &str) -> Contact {
    Contact {
      id: Uuid::new_v4(),
      name: name.into(),
      email: "a@x.com".into(),
      phone: Some("555-0100".into()),
      company: Some("Acme".into()),
      category: Category::Work,
      avatar: Some("avatars/a.png".into()),
      favorite: true,
      created_at: Utc::now(),
    }
  }

  #[test]
  fn begin_add_opens_blank_form() {
    let mut app = app();
    app.begin_add();

    assert_eq!(app.form, FormState::Adding);
    assert_eq!(app.fields.name, "");
    assert_eq!(app.fields.category, Category::Personal);
  }

  #[test]
  fn begin_edit_seeds_buffers_from_contact() {
    let mut app = app();
    let c = contact("Alice");
    app.begin_edit(&c);

    assert_eq!(app.form, FormState::Editing(c.id));
    assert_eq!(app.fields.name, "Alice");
    assert_eq!(app.fields.phone, "555-0100");
    assert_eq!(app.fields.category, Category::Work);
  }

  #[test]
  fn edit_draft_carries_favorite_and_avatar_through() {
    let mut app = app();
    let c = contact("Alice");
    app.begin_edit(&c);

    let draft = app.fields.to_draft();
    assert!(draft.favorite);
    assert_eq!(draft.avatar.as_deref(), Some("avatars/a.png"));
  }

  #[test]
  fn cancel_closes_and_discards_edits() {
    let mut app = app();
    app.begin_add();
    app.fields.name = "half-typed".into();

    app.cancel_form();
    assert_eq!(app.form, FormState::Closed);
    assert_eq!(app.fields.name, "");
  }

  #[tokio::test]
  async fn submit_with_empty_name_keeps_form_open() {
    let mut app = app();
    app.begin_add();
    app.fields.email = "a@x.com".into();

    // Validation fails before any network call; the dead-end client above
    // is never contacted.
    let result = app.submit_form().await;
    assert!(matches!(result, Some(Err(RepoError::Validation(_)))));
    assert_eq!(app.form, FormState::Adding);
  }

  #[tokio::test]
  async fn submit_with_closed_form_is_a_no_op() {
    let mut app = app();
    assert!(app.submit_form().await.is_none());
  }

  #[test]
  fn empty_form_buffers_become_none_in_draft() {
    let app_fields = FormFields {
      name: "Alice".into(),
      email: "a@x.com".into(),
      ..Default::default()
    };

    let draft = app_fields.to_draft();
    assert_eq!(draft.phone, None);
    assert_eq!(draft.company, None);
  }

  #[test]
  fn category_filter_cycles_through_all_and_back() {
    let mut app = app();
    assert_eq!(app.category_filter, None);

    let mut seen = Vec::new();
    for _ in 0..5 {
      app.cycle_category_filter();
      seen.push(app.category_filter);
    }

    assert_eq!(
      seen,
      vec![
        Some(Category::Work),
        Some(Category::Personal),
        Some(Category::Family),
        Some(Category::Other),
        None,
      ]
    );
  }
}
