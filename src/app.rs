//! App state and core application logic
//!
//! Owns the route-driven state machine: each route activation resets the
//! matching view to Loading and emits an [`Effect`] describing the fetch to
//! run. Responses come back as [`Msg`] values tagged with the generation of
//! the activation that issued them; anything from a superseded activation
//! is dropped, so a slow fetch for a previous route can never overwrite the
//! current view's data.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::api::ApiError;
use crate::models::{stream_path, ShowDetail, ShowSummary, MOVIE_VIDEO_ID};
use crate::route::{Activation, Route, Router};

// =============================================================================
// View State
// =============================================================================

/// Lifecycle of a view's fetched data
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    /// Fetch issued, response not yet applied
    Loading,
    /// Fetch succeeded
    Loaded(T),
    /// Fetch failed; the view renders the message instead of an empty list
    Failed(String),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            ViewState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

// =============================================================================
// Selection State
// =============================================================================

/// Selection state for list views
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListState {
    /// Currently selected index
    pub selected: usize,
    /// Scroll offset for viewport
    pub offset: usize,
    /// Total number of items
    pub len: usize,
}

impl ListState {
    pub fn new(len: usize) -> Self {
        Self {
            selected: 0,
            offset: 0,
            len,
        }
    }

    /// Move selection up
    pub fn up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            if self.selected < self.offset {
                self.offset = self.selected;
            }
        }
    }

    /// Move selection down
    pub fn down(&mut self) {
        if self.len > 0 && self.selected < self.len - 1 {
            self.selected += 1;
        }
    }

    /// Jump to first item
    pub fn first(&mut self) {
        self.selected = 0;
        self.offset = 0;
    }

    /// Jump to last item
    pub fn last(&mut self) {
        if self.len > 0 {
            self.selected = self.len - 1;
        }
    }

    /// Update offset to keep selected item visible
    pub fn scroll_into_view(&mut self, visible_height: usize) {
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if visible_height > 0 && self.selected >= self.offset + visible_height {
            self.offset = self.selected - visible_height + 1;
        }
    }
}

// =============================================================================
// View-Specific State
// =============================================================================

/// Catalog view state (route `/`)
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    pub shows: ViewState<Vec<ShowSummary>>,
    pub list: ListState,
}

impl CatalogState {
    fn loading() -> Self {
        Self {
            shows: ViewState::Loading,
            list: ListState::default(),
        }
    }

    /// Currently selected catalog entry
    pub fn selected_show(&self) -> Option<&ShowSummary> {
        self.shows.loaded()?.get(self.list.selected)
    }
}

/// Detail view state (route `/shows/{sid}`)
///
/// The whole record is replaced on every activation; there is no
/// field-by-field merge, so nothing from a previous show can leak into the
/// current one.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailState {
    pub sid: String,
    pub show: ViewState<ShowDetail>,
    pub list: ListState,
}

impl DetailState {
    fn loading(sid: String) -> Self {
        Self {
            sid,
            show: ViewState::Loading,
            list: ListState::default(),
        }
    }

    /// Video id the current selection plays: the movie sentinel for movies,
    /// the selected episode's id otherwise
    pub fn selected_video_id(&self) -> Option<&str> {
        let show = self.show.loaded()?;
        if show.is_movie {
            Some(MOVIE_VIDEO_ID)
        } else {
            show.episodes.get(self.list.selected).map(|ep| ep.id.as_str())
        }
    }
}

/// Playback view state (route `/watch/{sid}/{vid}`)
///
/// No fetch through the API client: the stream path is computed from the
/// route parameters alone and handed to the local player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub sid: String,
    pub vid: String,
    /// Server path of the stream, without the base URL
    pub path: String,
}

impl PlaybackState {
    fn new(sid: String, vid: String) -> Self {
        let path = stream_path(&sid, &vid);
        Self { sid, vid, path }
    }
}

// =============================================================================
// Effects & Messages
// =============================================================================

/// Side effect requested by the app, executed by the event loop
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Issue `list_shows`, tagging the response with this generation
    FetchCatalog { generation: u64 },
    /// Issue `get_show(sid)`, tagging the response with this generation
    FetchShow { generation: u64, sid: String },
    /// POST /reload
    Reload,
    /// Launch the local player on the stream for these route params
    Play { sid: String, vid: String },
    /// Exit the application
    Quit,
}

/// Completed async work delivered back to the app
#[derive(Debug)]
pub enum Msg {
    Catalog {
        generation: u64,
        result: Result<Vec<ShowSummary>, ApiError>,
    },
    Show {
        generation: u64,
        result: Result<ShowDetail, ApiError>,
    },
    ReloadFinished {
        result: Result<(), ApiError>,
    },
    PlayerExited {
        result: Result<(), String>,
    },
}

// =============================================================================
// Main Application State
// =============================================================================

/// Main application state
#[derive(Debug)]
pub struct App {
    pub router: Router,
    pub running: bool,
    pub catalog: CatalogState,
    pub detail: Option<DetailState>,
    pub playback: Option<PlaybackState>,
    /// One-line feedback for the status bar (reload progress, player exit)
    pub status: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            router: Router::new(),
            running: true,
            catalog: CatalogState::loading(),
            detail: None,
            playback: None,
            status: None,
        }
    }
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate the initial route, returning its fetch effect
    pub fn start(&mut self) -> Option<Effect> {
        let activation = self.router.resolve();
        self.enter(activation)
    }

    /// Enter a route: reset the owning view to Loading and request its fetch
    ///
    /// This is the single place view state is (re)initialized, so every
    /// activation atomically replaces whatever the view held before.
    fn enter(&mut self, activation: Activation) -> Option<Effect> {
        let generation = activation.generation;
        match activation.route {
            Route::Home => {
                self.catalog = CatalogState::loading();
                Some(Effect::FetchCatalog { generation })
            }
            Route::Show { sid } => {
                self.detail = Some(DetailState::loading(sid.clone()));
                Some(Effect::FetchShow { generation, sid })
            }
            Route::Watch { sid, vid } => {
                self.playback = Some(PlaybackState::new(sid.clone(), vid.clone()));
                Some(Effect::Play { sid, vid })
            }
            Route::NotFound { .. } => None,
        }
    }

    /// Navigate to a path and activate the matching view
    pub fn navigate(&mut self, path: &str) -> Option<Effect> {
        let activation = self.router.navigate(path);
        self.enter(activation)
    }

    /// Apply a completed async result
    ///
    /// Responses carry the generation of the activation that issued them;
    /// a mismatch means the view has been re-activated since, and the stale
    /// result is discarded without touching state.
    pub fn apply(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::Catalog { generation, result } => {
                if generation != self.router.generation() {
                    return None;
                }
                match result {
                    Ok(shows) => {
                        self.catalog.list = ListState::new(shows.len());
                        self.catalog.shows = ViewState::Loaded(shows);
                    }
                    Err(e) => self.catalog.shows = ViewState::Failed(e.to_string()),
                }
                None
            }
            Msg::Show { generation, result } => {
                if generation != self.router.generation() {
                    return None;
                }
                if let Some(detail) = self.detail.as_mut() {
                    match result {
                        Ok(show) => {
                            detail.list = ListState::new(show.playable_count());
                            detail.show = ViewState::Loaded(show);
                        }
                        Err(e) => detail.show = ViewState::Failed(e.to_string()),
                    }
                }
                None
            }
            Msg::ReloadFinished { result } => {
                self.status = Some(match result {
                    Ok(()) => "Library reloaded".to_string(),
                    Err(e) => format!("Reload failed: {}", e),
                });
                // The current route re-resolves regardless of the POST's
                // outcome, picking up whatever the rescan produced so far.
                let activation = self.router.resolve();
                self.enter(activation)
            }
            Msg::PlayerExited { result } => {
                if let Err(e) = result {
                    self.status = Some(format!("Player: {}", e));
                }
                None
            }
        }
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Handle a key event, returning any effect it triggers
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Effect> {
        self.status = None;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return Some(Effect::Quit);
        }

        match key.code {
            KeyCode::Char('q') => {
                self.running = false;
                Some(Effect::Quit)
            }
            KeyCode::Char('r') => self.reload(),
            KeyCode::Esc => {
                let activation = self.router.back()?;
                self.enter(activation)
            }
            _ => match self.router.current().clone() {
                Route::Home => self.handle_catalog_key(key),
                Route::Show { .. } => self.handle_detail_key(key),
                Route::Watch { .. } | Route::NotFound { .. } => None,
            },
        }
    }

    /// Trigger a library reload
    ///
    /// Each press fires its own POST; overlapping rescans are tolerated by
    /// the backend, so nothing is deduplicated on this side.
    pub fn reload(&mut self) -> Option<Effect> {
        self.status = Some("Reloading library...".to_string());
        Some(Effect::Reload)
    }

    fn handle_catalog_key(&mut self, key: KeyEvent) -> Option<Effect> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.catalog.list.up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.catalog.list.down();
                None
            }
            KeyCode::Home => {
                self.catalog.list.first();
                None
            }
            KeyCode::End => {
                self.catalog.list.last();
                None
            }
            KeyCode::Enter => {
                let id = self.catalog.selected_show()?.id.clone();
                self.navigate(&format!("/shows/{}", id))
            }
            _ => None,
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) -> Option<Effect> {
        let detail = self.detail.as_mut()?;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                detail.list.up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                detail.list.down();
                None
            }
            KeyCode::Enter => {
                let sid = detail.sid.clone();
                let vid = detail.selected_video_id()?.to_string();
                self.navigate(&format!("/watch/{}/{}", sid, vid))
            }
            _ => None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
