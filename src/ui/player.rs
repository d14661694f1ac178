//! Playback screen (route `/watch/{sid}/{vid}`)
//!
//! The video itself plays in the external player; this screen shows what
//! is playing and where the stream comes from.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::Theme;

pub fn render(frame: &mut Frame, area: Rect, app: &App, base_url: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border())
        .title(Span::styled(" NOW PLAYING ", Theme::success()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(playback) = app.playback.as_ref() else {
        return;
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Show {} / video {}", playback.sid, playback.vid),
            Theme::accent(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{}{}", base_url, playback.path),
            Theme::dimmed(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Playing in the local player; controls live there.",
            Theme::text(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" ESC ", Theme::keybind()),
            Span::styled("Back", Theme::dimmed()),
        ]),
    ];

    let para = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(para, inner);
}

/// Screen for paths outside the route table
pub fn render_not_found(frame: &mut Frame, area: Rect, path: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border())
        .title(Span::styled(" NOT FOUND ", Theme::error()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("No view for {}", path),
            Theme::error(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" ESC ", Theme::keybind()),
            Span::styled("Back", Theme::dimmed()),
        ]),
    ];

    let para = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(para, inner);
}
