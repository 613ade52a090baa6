//! maestro console library
//!
//! Wires configuration to a resource client and starts either the terminal
//! UI or headless mode.

pub mod headless;

use maestro_app::config::{Settings, TreeSource};
use maestro_client::{ApiClient, FixtureResourceClient, HttpResourceClient};
use maestro_core::prelude::*;

pub use headless::run_headless;
pub use maestro_tui::run;

/// Build the client the console talks to.
///
/// The demo tree source gets the in-memory fixture, everything else the HTTP
/// client for `api.base_url`.
pub fn build_client(settings: &Settings) -> Result<ApiClient> {
    match settings.tree.source {
        TreeSource::Demo => Ok(ApiClient::Fixture(FixtureResourceClient::demo())),
        TreeSource::Live => {
            let client = HttpResourceClient::new(&settings.api.base_url, settings.api.timeout())?;
            Ok(ApiClient::Http(client))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_source_uses_fixture() {
        let mut settings = Settings::default();
        settings.tree.source = TreeSource::Demo;
        let client = build_client(&settings).unwrap();
        assert!(client.is_fixture());
    }

    #[test]
    fn test_live_source_uses_base_url() {
        let mut settings = Settings::default();
        settings.api.base_url = "http://maestro.internal:9000".into();
        let client = build_client(&settings).unwrap();
        assert!(!client.is_fixture());
        assert_eq!(client.describe(), "http://maestro.internal:9000/");
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let mut settings = Settings::default();
        settings.api.base_url = "ftp://maestro".into();
        let err = build_client(&settings).unwrap_err();
        assert!(!err.is_remote());
    }
}
