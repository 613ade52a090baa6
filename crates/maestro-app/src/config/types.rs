//! Configuration types for the maestro console
//!
//! Defines:
//! - `Settings` - the whole `config.toml`
//! - `ApiSettings`, `TreeSettings`, `ProcessSettings`, `UiSettings` - its sections
//! - `TreeSource`, `OrderingPolicy` - section enums

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default maestro API address (the server's `-port` default).
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub tree: TreeSettings,

    #[serde(default)]
    pub process: ProcessSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// `[api]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Base URL of the maestro API, without a trailing resource path
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in milliseconds; 0 waits indefinitely
    #[serde(default)]
    pub timeout_ms: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: 0,
        }
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Where the navigation tree comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeSource {
    /// `GET /domains/` on the maestro API
    #[default]
    Live,
    /// Built-in sample tree, no network
    Demo,
}

impl std::fmt::Display for TreeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeSource::Live => write!(f, "live"),
            TreeSource::Demo => write!(f, "demo"),
        }
    }
}

/// `[tree]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TreeSettings {
    #[serde(default)]
    pub source: TreeSource,
}

/// Which response wins when several requests for one process overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingPolicy {
    /// Apply every response in arrival order; the last to arrive wins
    #[default]
    LastResponse,
    /// Apply a response only if no newer request was issued after it
    LastRequest,
}

/// `[process]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProcessSettings {
    #[serde(default)]
    pub ordering: OrderingPolicy,
}

/// `[ui]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show the decoded store path next to each key
    #[serde(default = "default_true")]
    pub show_key_paths: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_key_paths: true,
        }
    }
}

fn default_true() -> bool {
    true
}
