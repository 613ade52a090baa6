//! Navigation routes.
//!
//! A static table maps a navigation path to the view that owns it:
//!
//! | Path              | Route                |
//! |-------------------|----------------------|
//! | `/`               | [`Route::Splash`]    |
//! | `/domains/:key`   | [`Route::DomainDetail`]  |
//! | `/agents/:key`    | [`Route::AgentDetail`]   |
//! | `/processes/:key` | [`Route::ProcessDetail`] |
//!
//! Anything else redirects to `/`. `:key` is exactly one non-empty path
//! segment and is percent-decoded; keys are standard base64 and may carry an
//! encoded `/`.

use std::fmt;

use percent_encoding::percent_decode_str;
use serde::Serialize;

use maestro_client::encode_segment;

/// The view selected by a navigation path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Route {
    /// Tree view.
    #[default]
    Splash,
    DomainDetail { key: String },
    AgentDetail { key: String },
    ProcessDetail { key: String },
}

impl Route {
    /// Resolve a path, redirecting unmatched paths to [`Route::Splash`].
    pub fn resolve(path: &str) -> Route {
        Route::matched(path).unwrap_or(Route::Splash)
    }

    /// Resolve a path, or `None` when no pattern matches.
    pub fn matched(path: &str) -> Option<Route> {
        // Accept the browser-style `#/processes/..` form as well.
        let path = path.strip_prefix('#').unwrap_or(path);
        let rest = path.strip_prefix('/')?;
        let rest = rest.strip_suffix('/').unwrap_or(rest);

        if rest.is_empty() {
            return Some(Route::Splash);
        }

        let (prefix, raw_key) = rest.split_once('/')?;
        if raw_key.is_empty() || raw_key.contains('/') {
            return None;
        }
        let key = percent_decode_str(raw_key).decode_utf8().ok()?.into_owned();

        match prefix {
            "domains" => Some(Route::DomainDetail { key }),
            "agents" => Some(Route::AgentDetail { key }),
            "processes" => Some(Route::ProcessDetail { key }),
            _ => None,
        }
    }

    /// Canonical path for this route, key percent-encoded.
    pub fn path(&self) -> String {
        match self {
            Route::Splash => "/".to_string(),
            Route::DomainDetail { key } => format!("/domains/{}", encode_segment(key)),
            Route::AgentDetail { key } => format!("/agents/{}", encode_segment(key)),
            Route::ProcessDetail { key } => format!("/processes/{}", encode_segment(key)),
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            Route::Splash => None,
            Route::DomainDetail { key }
            | Route::AgentDetail { key }
            | Route::ProcessDetail { key } => Some(key),
        }
    }

    /// Title shown in the header.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Splash => "Domains",
            Route::DomainDetail { .. } => "Domain",
            Route::AgentDetail { .. } => "Agent",
            Route::ProcessDetail { .. } => "Process",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Current route plus the routes navigated away from.
#[derive(Debug, Clone, Default)]
pub struct Navigation {
    pub current: Route,
    history: Vec<Route>,
}

impl Navigation {
    pub fn new(initial: Route) -> Self {
        Self {
            current: initial,
            history: Vec::new(),
        }
    }

    /// Move to `route`. Navigating to the current route is a no-op and
    /// returns `false`.
    pub fn push(&mut self, route: Route) -> bool {
        if route == self.current {
            return false;
        }
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push(previous);
        true
    }

    /// Return to the previous route, if any.
    pub fn back(&mut self) -> Option<&Route> {
        let previous = self.history.pop()?;
        self.current = previous;
        Some(&self.current)
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }
}
