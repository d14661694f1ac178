//! Show detail screen (route `/shows/{sid}`)
//!
//! Renders the show title and thumbnail URL, then branches on the movie
//! flag: a movie gets a single "Watch now" row bound to its sentinel video
//! id, a series gets one row per episode in the order the backend sent.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::Theme;

pub fn render(frame: &mut Frame, area: Rect, app: &mut App, base_url: &str) {
    let Some(detail) = app.detail.as_mut() else {
        return;
    };

    let title = detail
        .show
        .loaded()
        .map(|show| show.title.clone())
        .unwrap_or_else(|| detail.sid.clone());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border())
        .title(Span::styled(format!(" {} ", title), Theme::title()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if detail.show.is_loading() {
        let loading = Paragraph::new("Loading show...")
            .style(Theme::loading())
            .alignment(Alignment::Center);
        frame.render_widget(loading, inner);
        return;
    }

    if let Some(msg) = detail.show.error() {
        let error = Paragraph::new(format!("Show failed: {}", msg))
            .style(Theme::error())
            .alignment(Alignment::Center);
        frame.render_widget(error, inner);
        return;
    }

    let show = match detail.show.loaded() {
        Some(show) => show.clone(),
        None => return,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Thumbnail URL + spacing
            Constraint::Min(1),    // Episode list
        ])
        .split(inner);

    let thumb = Paragraph::new(Line::from(Span::styled(
        format!("{}/shows/{}/thumb", base_url, show.id),
        Theme::dimmed(),
    )));
    frame.render_widget(thumb, chunks[0]);

    detail.list.scroll_into_view(chunks[1].height as usize);
    let offset = detail.list.offset;

    // Movies have exactly one playable row regardless of the episode list
    let rows: Vec<String> = if show.is_movie {
        vec!["Watch now".to_string()]
    } else {
        show.episodes.iter().map(|ep| ep.title.clone()).collect()
    };

    if rows.is_empty() {
        let empty = Paragraph::new("No episodes")
            .style(Theme::dimmed())
            .alignment(Alignment::Center);
        frame.render_widget(empty, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .skip(offset)
        .take(chunks[1].height as usize)
        .map(|(i, row)| {
            let is_selected = i == detail.list.selected;
            let marker = if is_selected { "> " } else { "  " };

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
                    row.clone(),
                    if is_selected {
                        Theme::highlighted()
                    } else {
                        Theme::text()
                    },
                ),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).style(Theme::text());
    frame.render_widget(list, chunks[1]);
}
