//! Data structures and types for the Carflix client
//!
//! Contains the catalog value objects received from the backend:
//! - **ShowSummary**: minimal record behind each catalog tile
//! - **ShowDetail**: full show metadata including the episode list
//! - **EpisodeSummary**: one playable entry of a show
//!
//! All of these are immutable once fetched. Every view activation fetches
//! fresh copies; nothing is cached across navigations or written back.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Video id addressing a movie's single playable stream.
///
/// The backend numbers episodes from 1 and treats a movie as a
/// single-episode show, so its one stream always lives at episode "1".
pub const MOVIE_VIDEO_ID: &str = "1";

/// Server path of one video stream, relative to the base URL
///
/// The playback view computes this from its route parameters alone; the
/// bytes behind it are fetched by the player, never by the API client.
pub fn stream_path(sid: &str, vid: &str) -> String {
    format!("/shows/{}/episodes/{}/video", sid, vid)
}

// =============================================================================
// Catalog Models
// =============================================================================

/// One entry of the catalog listing (GET /shows)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowSummary {
    pub id: String,
    pub title: String,
    /// Thumbnail reference. The backend may omit it; the display URL is
    /// derived from the id either way, so this is informational only.
    #[serde(default)]
    pub thumb: Option<String>,
}

impl fmt::Display for ShowSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.id)
    }
}

/// Full show metadata (GET /shows/{id})
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowDetail {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub thumb: Option<String>,
    /// True for movies: exactly one playable unit, addressed by
    /// [`MOVIE_VIDEO_ID`]; the `episodes` field is ignored.
    #[serde(rename = "isMovie", default)]
    pub is_movie: bool,
    /// Presentation order as decided by the backend, not airing order.
    #[serde(default)]
    pub episodes: Vec<EpisodeSummary>,
}

impl ShowDetail {
    /// Number of playable entries this show renders
    pub fn playable_count(&self) -> usize {
        if self.is_movie {
            1
        } else {
            self.episodes.len()
        }
    }
}

impl fmt::Display for ShowDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_movie {
            write!(f, "{} (movie)", self.title)
        } else {
            write!(f, "{} ({} episodes)", self.title, self.episodes.len())
        }
    }
}

/// One playable entry of a show
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    pub id: String,
    pub title: String,
}

impl fmt::Display for EpisodeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
