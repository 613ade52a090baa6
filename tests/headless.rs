//! Headless capture against the in-memory fixture.

use std::sync::Arc;

use maestro_app::config::{OrderingPolicy, Settings, TreeSource};
use maestro_client::{FixtureFailure, FixtureResourceClient, Method, ResourcePath};
use maestro_console::headless::capture_view;

const P01: &str = "L21hZXN0cm8vZDAxL2NvbmZpZy9wcm9jZXNzZXMvcDAx";

fn live_settings() -> Settings {
    let mut settings = Settings::default();
    settings.tree.source = TreeSource::Live;
    settings.process.ordering = OrderingPolicy::LastRequest;
    settings
}

#[tokio::test]
async fn test_process_route_settles_with_record() {
    let client = Arc::new(FixtureResourceClient::demo());
    let view = capture_view(live_settings(), client.clone(), format!("/processes/{P01}"))
        .await
        .unwrap();

    assert_eq!(view["route"]["route"], "process_detail");
    assert_eq!(view["route"]["key"], P01);
    assert_eq!(view["detail"]["view"], "process");
    assert_eq!(view["detail"]["phase"], "loaded");
    assert_eq!(view["detail"]["record"]["Pid"], 6116);
    assert_eq!(view["tree"]["loading"], false);

    let gets = client.requests_with(Method::Get);
    assert!(gets
        .iter()
        .any(|r| r.path == ResourcePath::Process(P01.into())));
    assert!(client.requests_with(Method::Patch).is_empty());
}

#[tokio::test]
async fn test_demo_splash_needs_no_requests() {
    let client = Arc::new(FixtureResourceClient::demo());
    let mut settings = Settings::default();
    settings.tree.source = TreeSource::Demo;

    let view = capture_view(settings, client.clone(), "/".into()).await.unwrap();

    assert_eq!(view["path"], "/");
    assert_eq!(view["tree"]["source"], "demo");
    assert_eq!(view["tree"]["nodes"][0]["label"], "Animal");
    assert!(client.requests().is_empty());
}

#[tokio::test]
async fn test_unknown_route_redirects_to_splash() {
    let client = Arc::new(FixtureResourceClient::demo());
    let view = capture_view(live_settings(), client, "/widgets/abc".into())
        .await
        .unwrap();

    assert_eq!(view["route"]["route"], "splash");
    assert!(view.get("detail").is_none());
}

#[tokio::test]
async fn test_remote_failure_is_part_of_the_view() {
    let client = Arc::new(FixtureResourceClient::demo());
    client.fail(
        ResourcePath::Process(P01.into()),
        FixtureFailure::Transport("connection refused".into()),
    );

    let view = capture_view(live_settings(), client, format!("/processes/{P01}"))
        .await
        .unwrap();

    assert_eq!(view["detail"]["phase"], "failed");
    assert_eq!(view["detail"]["error"]["kind"], "transport");
    assert!(view["detail"]["record"].is_null());
}
