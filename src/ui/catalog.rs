//! Catalog screen (route `/`)
//!
//! One row per show, title plus the resolved thumbnail URL as dimmed
//! metadata. Enter opens the show's detail.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::Theme;

pub fn render(frame: &mut Frame, area: Rect, app: &mut App, base_url: &str) {
    let count = app
        .catalog
        .shows
        .loaded()
        .map(|shows| shows.len())
        .unwrap_or(0);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border())
        .title(Span::styled(format!(" SHOWS ({}) ", count), Theme::title()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.catalog.shows.is_loading() {
        let loading = Paragraph::new("Loading catalog...")
            .style(Theme::loading())
            .alignment(Alignment::Center);
        frame.render_widget(loading, inner);
        return;
    }

    if let Some(msg) = app.catalog.shows.error() {
        let error = Paragraph::new(format!("Catalog failed: {}", msg))
            .style(Theme::error())
            .alignment(Alignment::Center);
        frame.render_widget(error, inner);
        return;
    }

    let shows = match app.catalog.shows.loaded() {
        Some(shows) if !shows.is_empty() => shows.clone(),
        _ => {
            let empty = Paragraph::new("No shows found. Press r to reload the library.")
                .style(Theme::dimmed())
                .alignment(Alignment::Center);
            frame.render_widget(empty, inner);
            return;
        }
    };

    app.catalog.list.scroll_into_view(inner.height as usize);
    let offset = app.catalog.list.offset;

    let items: Vec<ListItem> = shows
        .iter()
        .enumerate()
        .skip(offset)
        .take(inner.height as usize)
        .map(|(i, show)| {
            let is_selected = i == app.catalog.list.selected;
            let marker = if is_selected { "> " } else { "  " };
            let thumb = format!("  {}/shows/{}/thumb", base_url, show.id);

            let line = Line::from(vec![
                Span::styled(
                    marker,
                    if is_selected {
                        Theme::accent()
                    } else {
                        Theme::dimmed()
                    },
                ),
                Span::styled(
                    show.title.clone(),
                    if is_selected {
                        Theme::highlighted()
                    } else {
                        Theme::text()
                    },
                ),
                Span::styled(thumb, Theme::dimmed()),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).style(Theme::text());
    frame.render_widget(list, inner);
}
