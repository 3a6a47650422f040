//! Contact list pane.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::App;

/// Render the contact list into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let visible = app.visible();
  let total = app.repo.contacts().len();

  let filtered = !app.filter.is_empty()
    || app.category_filter.is_some()
    || app.favorites_only;

  // Title with count.
  let title = if filtered || app.filter_active {
    format!(" Contacts ({}/{}) ", visible.len(), total)
  } else {
    format!(" Contacts ({total}) ")
  };

  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  let mut inner_area = block.inner(area);
  f.render_widget(block, area);

  // Search bar pinned to the bottom of the pane while a term is set.
  if (app.filter_active || !app.filter.is_empty()) && inner_area.height > 2 {
    let filter_area = Rect {
      x:      inner_area.x,
      y:      inner_area.y + inner_area.height - 1,
      width:  inner_area.width,
      height: 1,
    };
    inner_area.height = inner_area.height.saturating_sub(1);

    let filter_text = if app.filter_active {
      format!("/{}_", app.filter)
    } else {
      format!("/{}", app.filter)
    };
    f.render_widget(
      Paragraph::new(filter_text).style(Style::default().fg(Color::Yellow)),
      filter_area,
    );
  }

  // A failed load means the list is unavailable, not empty.
  if app.load_failed {
    f.render_widget(
      Paragraph::new("Could not load contacts — press r to retry.")
        .style(Style::default().fg(Color::Red)),
      inner_area,
    );
    return;
  }

  if visible.is_empty() {
    let message = if total == 0 {
      "No contacts yet — press a to add your first contact."
    } else {
      "No contacts match the current search or filters."
    };
    f.render_widget(
      Paragraph::new(message).style(Style::default().fg(Color::DarkGray)),
      inner_area,
    );
    return;
  }

  // Build list items: star, name, email, company, category.
  let items: Vec<ListItem> = visible
    .iter()
    .map(|c| {
      let star = if c.favorite {
        Span::styled("★ ", Style::default().fg(Color::Yellow))
      } else {
        Span::raw("  ")
      };

      let mut spans = vec![
        star,
        Span::raw(c.name.clone()),
        Span::styled(
          format!("  {}", c.email),
          Style::default().fg(Color::DarkGray),
        ),
      ];
      if let Some(company) = &c.company {
        spans.push(Span::styled(
          format!("  {company}"),
          Style::default().fg(Color::DarkGray),
        ));
      }
      spans.push(Span::styled(
        format!("  [{}]", c.category.as_str()),
        Style::default().fg(Color::Cyan),
      ));

      ListItem::new(Line::from(spans))
    })
    .collect();

  // Scrollable list with cursor tracking.
  let mut state = ListState::default();
  state.select(Some(app.list_cursor));

  f.render_stateful_widget(
    List::new(items)
      .highlight_style(
        Style::default()
          .bg(Color::Blue)
          .fg(Color::White)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol(""),
    inner_area,
    &mut state,
  );
}
