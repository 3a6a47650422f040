//! CSV serializer.
//!
//! Every field is double-quoted; embedded quotes are doubled per RFC 4180.
//! Rows are joined with `\n` and the header row comes first.

use rolo_core::contact::Contact;

// ─── Field quoting ───────────────────────────────────────────────────────────

/// Quote one CSV field, doubling any embedded quotes.
fn quote(field: &str) -> String {
  format!("\"{}\"", field.replace('"', "\"\""))
}

fn row(fields: &[&str]) -> String {
  fields
    .iter()
    .map(|f| quote(f))
    .collect::<Vec<_>>()
    .join(",")
}

// ─── Rendering ───────────────────────────────────────────────────────────────

const HEADER: [&str; 5] = ["Name", "Email", "Phone", "Company", "Category"];

/// Render `contacts` as a CSV blob, one row per contact in input order.
/// Missing optional fields render as empty quoted strings.
pub fn render_csv(contacts: &[Contact]) -> String {
  let mut lines = Vec::with_capacity(contacts.len() + 1);
  lines.push(row(&HEADER));

  for c in contacts {
    lines.push(row(&[
      &c.name,
      &c.email,
      c.phone.as_deref().unwrap_or(""),
      c.company.as_deref().unwrap_or(""),
      c.category.as_str(),
    ]));
  }

  lines.join("\n")
}

/// Like [`render_csv`] with a trailing `Created At` column holding the
/// creation date as `YYYY-MM-DD` — the column set of the spreadsheet
/// flavour of the export.
pub fn render_csv_with_created(contacts: &[Contact]) -> String {
  let mut lines = Vec::with_capacity(contacts.len() + 1);
  lines.push(row(&[
    "Name", "Email", "Phone", "Company", "Category", "Created At",
  ]));

  for c in contacts {
    let created = c.created_at.format("%Y-%m-%d").to_string();
    lines.push(row(&[
      &c.name,
      &c.email,
      c.phone.as_deref().unwrap_or(""),
      c.company.as_deref().unwrap_or(""),
      c.category.as_str(),
      &created,
    ]));
  }

  lines.join("\n")
}
