//! Entry-form modal — add and edit.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::{App, CATEGORY_FIELD, FormState};

/// Render the entry form as a centered modal over `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let title = match app.form {
    FormState::Adding => " Add New Contact ",
    FormState::Editing(_) => " Edit Contact ",
    FormState::Closed => return,
  };

  let popup = centered_rect(area, 48, 14);
  f.render_widget(Clear, popup);

  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Cyan));
  let inner = block.inner(popup);
  f.render_widget(block, popup);

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(2), // name
      Constraint::Length(2), // email
      Constraint::Length(2), // phone
      Constraint::Length(2), // company
      Constraint::Length(2), // category
      Constraint::Min(1),    // hint
    ])
    .split(inner);

  draw_field(f, rows[0], "Name *", &app.fields.name, app.form_focus == 0);
  draw_field(f, rows[1], "Email *", &app.fields.email, app.form_focus == 1);
  draw_field(f, rows[2], "Phone", &app.fields.phone, app.form_focus == 2);
  draw_field(f, rows[3], "Company", &app.fields.company, app.form_focus == 3);

  // The category row cycles rather than taking typed input.
  let category_value = format!("◂ {} ▸", app.fields.category.as_str());
  draw_selector(
    f,
    rows[4],
    "Category",
    &category_value,
    app.form_focus == CATEGORY_FIELD,
  );

  f.render_widget(
    Paragraph::new("Enter save  Esc cancel  Tab next field")
      .style(Style::default().fg(Color::DarkGray)),
    rows[5],
  );
}

// ─── Field rendering ──────────────────────────────────────────────────────────

fn draw_field(f: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
  let shown = if focused {
    format!("{value}_")
  } else {
    value.to_string()
  };
  render_labeled(f, area, label, &shown, focused);
}

fn draw_selector(
  f: &mut Frame,
  area: Rect,
  label: &str,
  value: &str,
  focused: bool,
) {
  render_labeled(f, area, label, value, focused);
}

fn render_labeled(
  f: &mut Frame,
  area: Rect,
  label: &str,
  value: &str,
  focused: bool,
) {
  let label_style = if focused {
    Style::default()
      .fg(Color::Cyan)
      .add_modifier(Modifier::BOLD)
  } else {
    Style::default().fg(Color::DarkGray)
  };
  let value_style = if focused {
    Style::default().fg(Color::White)
  } else {
    Style::default()
  };

  let lines = vec![
    Line::from(Span::styled(label.to_string(), label_style)),
    Line::from(Span::styled(format!("  {value}"), value_style)),
  ];
  f.render_widget(Paragraph::new(lines), area);
}

// ─── Layout helper ────────────────────────────────────────────────────────────

/// A `width` x `height` rect centered in `area`, clamped to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
  let width = width.min(area.width);
  let height = height.min(area.height);
  Rect {
    x: area.x + (area.width - width) / 2,
    y: area.y + (area.height - height) / 2,
    width,
    height,
  }
}
