//! # maestro-client - maestro API Access
//!
//! Reads and patches resources on the maestro HTTP API.
//!
//! ## Public API
//!
//! - [`ResourceClient`] - `fetch` / `update` trait (`Send` futures)
//! - [`HttpResourceClient`] - reqwest implementation
//! - [`FixtureResourceClient`] - in-memory implementation for demo mode and tests
//! - [`ApiClient`] - the two, chosen at startup
//! - [`ResourcePath`] - `/domains/`, `/domains/{key}`, `/processes/{key}`
//! - [`api`] - typed helpers per endpoint

pub mod api;
pub mod client;
pub mod fixture;
pub mod paths;

pub use api::{fetch_domain, fetch_domains, fetch_process, patch_process, OneOrMany};
pub use client::{
    ApiClient, HttpResourceClient, LocalResourceClient, ResourceClient, MERGE_PATCH_CONTENT_TYPE,
};
pub use fixture::{
    demo_agent, demo_domains, FixtureFailure, FixtureResourceClient, Method, RecordedRequest,
};
pub use paths::{encode_segment, ResourcePath};
