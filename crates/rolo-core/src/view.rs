//! The derived view — a pure projection of the contact set under the
//! current search / category / favorites state.
//!
//! Recomputed on demand by the presentation layer; never stored.

use crate::contact::{Category, Contact};

/// Case-insensitive substring match. `needle` must already be lowercased.
fn matches(haystack: &str, needle: &str) -> bool {
  haystack.to_lowercase().contains(needle)
}

/// Filter `contacts` down to those visible under the given state.
///
/// A contact is included iff all three predicates hold:
/// - `term` is empty, or it case-insensitively substring-matches the
///   contact's name, email, or company;
/// - `category` is `None` ("all") or equals the contact's category;
/// - `favorites_only` is false or the contact is a favorite.
///
/// Input order is preserved; the result borrows from `contacts`.
pub fn filter_contacts<'a>(
  contacts:       &'a [Contact],
  term:           &str,
  category:       Option<Category>,
  favorites_only: bool,
) -> Vec<&'a Contact> {
  let needle = term.to_lowercase();

  contacts
    .iter()
    .filter(|c| {
      let matches_search = needle.is_empty()
        || matches(&c.name, &needle)
        || matches(&c.email, &needle)
        || c
          .company
          .as_deref()
          .is_some_and(|company| matches(company, &needle));

      let matches_category = category.is_none_or(|cat| c.category == cat);
      let matches_favorites = !favorites_only || c.favorite;

      matches_search && matches_category && matches_favorites
    })
    .collect()
}
