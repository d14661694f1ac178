//! Route table and navigation
//!
//! Maps path strings to views the way the original web client mapped its
//! address fragment: `/` is the catalog, `/shows/{sid}` a show's detail,
//! `/watch/{sid}/{vid}` playback. Anything else resolves to an explicit
//! NotFound route instead of rendering nothing.
//!
//! Every navigation (and every re-resolution) produces an [`Activation`]
//! carrying a monotonically increasing generation. Fetches are tagged with
//! the generation that issued them so a response from a superseded
//! activation can be recognized and discarded.

use std::fmt;

/// A resolved route, with its extracted path parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/` - catalog of all shows
    Home,
    /// `/shows/{sid}` - one show's detail
    Show { sid: String },
    /// `/watch/{sid}/{vid}` - playback of one video
    Watch { sid: String, vid: String },
    /// Any path not matched by the table above
    NotFound { path: String },
}

impl Route {
    /// Resolve a path against the route table, in precedence order
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim_matches('/');
        if trimmed.is_empty() {
            return Route::Home;
        }

        let segments: Vec<&str> = trimmed.split('/').collect();
        match segments.as_slice() {
            ["shows", sid] if !sid.is_empty() => Route::Show {
                sid: (*sid).to_string(),
            },
            ["watch", sid, vid] if !sid.is_empty() && !vid.is_empty() => Route::Watch {
                sid: (*sid).to_string(),
                vid: (*vid).to_string(),
            },
            _ => Route::NotFound {
                path: path.to_string(),
            },
        }
    }

    /// Canonical path string for this route (inverse of [`Route::parse`])
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Show { sid } => format!("/shows/{}", sid),
            Route::Watch { sid, vid } => format!("/watch/{}/{}", sid, vid),
            Route::NotFound { path } => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// One entry into a route: the view to activate plus the generation that
/// fences its fetch against later activations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    pub route: Route,
    pub generation: u64,
}

/// Holds the current route, the back stack, and the activation generation
#[derive(Debug)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
    generation: u64,
}

impl Default for Router {
    fn default() -> Self {
        Self {
            current: Route::Home,
            history: Vec::new(),
            generation: 0,
        }
    }
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently resolved route
    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Generation of the most recent activation
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn activate(&mut self) -> Activation {
        self.generation += 1;
        Activation {
            route: self.current.clone(),
            generation: self.generation,
        }
    }

    /// Push a new location and activate the matching view
    pub fn navigate(&mut self, path: &str) -> Activation {
        let route = Route::parse(path);
        if route != self.current {
            let prev = std::mem::replace(&mut self.current, route);
            self.history.push(prev);
        }
        self.activate()
    }

    /// Re-evaluate the current path without touching history
    ///
    /// Used by the reload action: the same view re-enters its state and
    /// restarts its data load from scratch under a fresh generation.
    pub fn resolve(&mut self) -> Activation {
        self.activate()
    }

    /// Pop back to the previous route, activating it. Returns None at the
    /// bottom of the stack.
    pub fn back(&mut self) -> Option<Activation> {
        let prev = self.history.pop()?;
        self.current = prev;
        Some(self.activate())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
