//! Serializable snapshot of what the console is showing.
//!
//! Used by headless mode to print the view model of the current route.

use serde::Serialize;

use crate::config::TreeSource;
use crate::router::Route;
use crate::state::{AgentDetailState, AppState, DomainDetailState, ProcessDetailState, ViewError};

/// One visible tree row.
#[derive(Debug, Clone, Serialize)]
pub struct NodeSnapshot {
    pub label: String,
    pub depth: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TreeSnapshot<'a> {
    pub source: TreeSource,
    pub output: &'a str,
    pub loading: bool,
    pub error: Option<&'a ViewError>,
    pub nodes: Vec<NodeSnapshot>,
}

/// View model of the active detail view.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum DetailSnapshot<'a> {
    Domain(&'a DomainDetailState),
    Process(&'a ProcessDetailState),
    Agent(&'a AgentDetailState),
}

#[derive(Debug, Clone, Serialize)]
pub struct ViewSnapshot<'a> {
    pub path: String,
    pub route: &'a Route,
    pub tree: TreeSnapshot<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<DetailSnapshot<'a>>,
}

impl<'a> ViewSnapshot<'a> {
    pub fn capture(state: &'a AppState) -> Self {
        let nodes = state
            .visible_nodes()
            .into_iter()
            .map(|v| NodeSnapshot {
                label: v.node.label.clone(),
                depth: v.depth,
                target: v.node.target.clone(),
            })
            .collect();

        let detail = match state.route() {
            Route::Splash => None,
            Route::DomainDetail { .. } => Some(DetailSnapshot::Domain(&state.domain)),
            Route::ProcessDetail { .. } => Some(DetailSnapshot::Process(&state.process)),
            Route::AgentDetail { .. } => Some(DetailSnapshot::Agent(&state.agent)),
        };

        Self {
            path: state.route().path(),
            route: state.route(),
            tree: TreeSnapshot {
                source: state.tree.source,
                output: &state.tree_view.output.output,
                loading: state.tree.loading,
                error: state.tree.error.as_ref(),
                nodes,
            },
            detail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use maestro_core::ProcessRecord;
    use serde_json::Value;

    fn demo_state() -> AppState {
        let mut settings = Settings::default();
        settings.tree.source = TreeSource::Demo;
        AppState::with_settings(settings)
    }

    #[test]
    fn test_splash_snapshot_has_no_detail() {
        let state = demo_state();
        let json = serde_json::to_value(ViewSnapshot::capture(&state)).unwrap();

        assert_eq!(json["path"], "/");
        assert_eq!(json["route"]["route"], "splash");
        assert_eq!(json["tree"]["source"], "demo");
        assert_eq!(json["tree"]["nodes"].as_array().unwrap().len(), 2);
        assert!(json.get("detail").is_none());
    }

    #[test]
    fn test_process_snapshot_uses_wire_field_names() {
        let mut state = demo_state();
        state.nav.push(Route::ProcessDetail { key: "k".into() });
        state.process.activate("k");
        state.process.apply_record(ProcessRecord {
            name: "p01".into(),
            pid: 6116,
            ..Default::default()
        });

        let json = serde_json::to_value(ViewSnapshot::capture(&state)).unwrap();
        let detail = &json["detail"];
        assert_eq!(detail["view"], "process");
        assert_eq!(detail["phase"], "loaded");
        assert_eq!(detail["record"]["Pid"], Value::from(6116));
    }
}
