//! Color palette and style helpers for the Carflix TUI

use ratatui::style::{Color, Modifier, Style};

/// Dark red-accent palette
pub struct Theme;

impl Theme {
    /// Background: near-black
    pub const BACKGROUND: Color = Color::Rgb(0x0c, 0x0c, 0x0c);

    /// Primary: carflix red
    pub const PRIMARY: Color = Color::Rgb(0xe5, 0x09, 0x14);

    /// Text: soft white
    pub const TEXT: Color = Color::Rgb(0xe0, 0xe0, 0xe0);

    /// Dim: muted grey
    pub const DIM: Color = Color::Rgb(0x58, 0x58, 0x58);

    /// Accent: warm yellow
    pub const ACCENT: Color = Color::Rgb(0xff, 0xc1, 0x07);

    /// Success: green
    pub const SUCCESS: Color = Color::Rgb(0x2e, 0xcc, 0x71);

    /// Error: bright red-orange
    pub const ERROR: Color = Color::Rgb(0xff, 0x45, 0x2b);

    /// Border color
    pub const BORDER: Color = Color::Rgb(0x3a, 0x3a, 0x3a);

    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT)
    }

    /// Highlighted list row (inverted)
    pub fn highlighted() -> Style {
        Style::default()
            .fg(Self::BACKGROUND)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Dimmed/muted text
    pub fn dimmed() -> Style {
        Style::default().fg(Self::DIM)
    }

    /// Error style
    pub fn error() -> Style {
        Style::default().fg(Self::ERROR).add_modifier(Modifier::BOLD)
    }

    /// Success style
    pub fn success() -> Style {
        Style::default()
            .fg(Self::SUCCESS)
            .add_modifier(Modifier::BOLD)
    }

    /// Title/header style
    pub fn title() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Accent text style
    pub fn accent() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Keybind hint style
    pub fn keybind() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Loading indicator style
    pub fn loading() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    /// Border style
    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    /// Status bar style
    pub fn status_bar() -> Style {
        Style::default().fg(Self::DIM).bg(Self::BACKGROUND)
    }
}
