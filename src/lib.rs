//! Carflix - terminal client for a personal media server
//!
//! Browse the catalog, open a show's episode list, and play a chosen video
//! against the Carflix backend HTTP API.
//!
//! # Modules
//!
//! - `models` - Catalog value objects (shows, episodes)
//! - `api` - Backend API client and derived media URLs
//! - `route` - Route table and generation-fenced navigation
//! - `app` - Application state, effects, and key handling
//! - `player` - Local playback via mpv/VLC
//! - `ui` - TUI screens
//! - `cli` / `commands` - Scriptable CLI surface
//! - `config` - Config file and server resolution

pub mod api;
pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod models;
pub mod player;
pub mod route;
pub mod ui;

// Re-export commonly used types
pub use api::{ApiError, CatalogClient};
pub use app::{App, Effect, Msg, ViewState};
pub use models::{EpisodeSummary, ShowDetail, ShowSummary, MOVIE_VIDEO_ID};
pub use route::{Activation, Route, Router};
