//! Terminal UI components
//!
//! Built with ratatui. Keyboard-first navigation throughout.
//! One screen per route, plus a NotFound screen for unmatched paths.

pub mod catalog;
pub mod detail;
pub mod player;
pub mod theme;

pub use theme::Theme;
