//! TUI rendering — orchestrates all panes.

pub mod contact_form;
pub mod contact_list;

use chrono::Local;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Paragraph},
};

use crate::{
  app::{App, FormState},
  notice::Severity,
};

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let area = f.area();

  // Vertical stack: header, body, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0]);
  contact_list::draw(f, rows[1], app);
  draw_status(f, rows[2], app);

  // The entry form renders as a modal over the list.
  if app.form != FormState::Closed {
    contact_form::draw(f, area, app);
  }
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect) {
  let date = Local::now().format("%Y-%m-%d").to_string();

  let left = Span::styled(
    " rolo  [a] add  [/] search  [x] export  [q] quit",
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );
  let right = Span::styled(
    format!("{date} "),
    Style::default().fg(Color::DarkGray),
  );

  // Simple left-right header: pad the middle.
  let left_width = left.content.len() as u16;
  let right_width = right.content.len() as u16;
  let pad = area
    .width
    .saturating_sub(left_width)
    .saturating_sub(right_width);

  let line = Line::from(vec![
    left,
    Span::raw(" ".repeat(pad as usize)),
    right,
  ]);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let (mode_label, hints) = if app.form != FormState::Closed {
    ("FORM", "Tab next field  ←/→ category  Enter save  Esc cancel")
  } else if app.filter_active {
    ("SEARCH", "Type to filter  Esc clear  Enter keep")
  } else {
    (
      "NORMAL",
      "↑↓/jk move  Enter edit  a add  d delete  Space favorite  f favorites  c category  r reload",
    )
  };

  // Notices take precedence over the key hints.
  let (status, status_color) = match &app.notice {
    Some(n) => (
      format!("{}: {}", n.title, n.description),
      match n.severity {
        Severity::Info => Color::Cyan,
        Severity::Success => Color::Green,
        Severity::Error => Color::Red,
      },
    ),
    None => (hints.to_string(), Color::DarkGray),
  };

  // Right side: active filters and the favorites count.
  let favorites = app.repo.contacts().iter().filter(|c| c.favorite).count();
  let mut flags = Vec::new();
  if let Some(cat) = app.category_filter {
    flags.push(format!("category:{}", cat.as_str()));
  }
  if app.favorites_only {
    flags.push("favorites only".to_string());
  }
  flags.push(format!("★ {favorites}"));
  let right = format!("{} ", flags.join("  "));

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );
  let status_span = Span::styled(
    format!("  {status}"),
    Style::default().fg(status_color),
  );

  let used = mode_span.content.len() + status_span.content.len();
  let pad = (area.width as usize)
    .saturating_sub(used)
    .saturating_sub(right.len());
  let right_span =
    Span::styled(right, Style::default().fg(Color::DarkGray));

  let line = Line::from(vec![
    mode_span,
    status_span,
    Span::raw(" ".repeat(pad)),
    right_span,
  ]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}
