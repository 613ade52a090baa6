//! Resource paths on the maestro API.
//!
//! Keys are standard base64 and may contain `/` or `+`, so they are
//! percent-encoded before being placed in a path segment.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'+')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// A resource addressable on the maestro API.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourcePath {
    /// `GET /domains/` - every domain with its agents and processes.
    Domains,
    /// `GET /domains/{key}`
    Domain(String),
    /// `GET` / `PATCH /processes/{key}`
    Process(String),
}

impl ResourcePath {
    pub fn domains() -> Self {
        ResourcePath::Domains
    }

    pub fn domain(key: impl Into<String>) -> Self {
        ResourcePath::Domain(key.into())
    }

    pub fn process(key: impl Into<String>) -> Self {
        ResourcePath::Process(key.into())
    }

    /// The key this path addresses, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            ResourcePath::Domains => None,
            ResourcePath::Domain(key) | ResourcePath::Process(key) => Some(key),
        }
    }

    /// Path component of the request URL, key percent-encoded.
    pub fn to_url_path(&self) -> String {
        match self {
            ResourcePath::Domains => "/domains/".to_string(),
            ResourcePath::Domain(key) => format!("/domains/{}", encode_segment(key)),
            ResourcePath::Process(key) => format!("/processes/{}", encode_segment(key)),
        }
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_url_path())
    }
}

/// Percent-encode a key for use as one path segment.
pub fn encode_segment(key: &str) -> String {
    utf8_percent_encode(key, SEGMENT).to_string()
}
