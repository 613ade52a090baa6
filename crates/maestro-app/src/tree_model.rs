//! Tree data: the loaded domains and the navigation nodes built from them.
//!
//! The tree comes from exactly one [`TreeSource`]. `Live` fetches
//! `/domains/` and projects the records into nodes; `Demo` uses the built-in
//! sample tree and never touches the network.

use maestro_core::{AgentRecord, DisplayState, DomainRecord, ProcessRecord, TreeNode};

use crate::config::TreeSource;
use crate::router::Route;
use crate::state::ViewError;

/// Owner of the navigation tree for the lifetime of the session.
#[derive(Debug, Clone)]
pub struct TreeModel {
    pub source: TreeSource,
    /// Records from the last successful `/domains/` fetch, as received.
    pub domains: Vec<DomainRecord>,
    pub roots: Vec<TreeNode>,
    pub loading: bool,
    pub error: Option<ViewError>,
}

impl TreeModel {
    /// A model for `source`. The demo tree is available immediately; the
    /// live tree is empty until [`TreeModel::apply_domains`].
    pub fn new(source: TreeSource) -> Self {
        let roots = match source {
            TreeSource::Live => Vec::new(),
            TreeSource::Demo => demo_tree(),
        };
        Self {
            source,
            domains: Vec::new(),
            roots,
            loading: false,
            error: None,
        }
    }

    /// Whether loading requires a remote fetch.
    pub fn is_live(&self) -> bool {
        self.source == TreeSource::Live
    }

    pub fn start_loading(&mut self) {
        self.loading = true;
    }

    /// Replace the tree with freshly fetched domains.
    pub fn apply_domains(&mut self, domains: Vec<DomainRecord>) {
        self.roots = domain_tree(&domains);
        self.domains = domains;
        self.loading = false;
        self.error = None;
    }

    /// Record a failed fetch. The previously loaded tree stays in place.
    pub fn apply_failure(&mut self, error: ViewError) {
        self.loading = false;
        self.error = Some(error);
    }

    /// Find an agent in the loaded domains.
    pub fn find_agent(&self, key: &str) -> Option<&AgentRecord> {
        self.domains.iter().find_map(|d| d.find_agent(key))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Live tree
// ─────────────────────────────────────────────────────────────────────────────

/// Project domains into navigation nodes:
///
/// ```text
/// d01
/// ├── Runtime
/// │   └── a01
/// │       └── p01
/// └── Config
///     ├── a01
///     └── p01
/// ```
pub fn domain_tree(domains: &[DomainRecord]) -> Vec<TreeNode> {
    domains.iter().map(domain_node).collect()
}

fn domain_node(domain: &DomainRecord) -> TreeNode {
    let runtime = TreeNode::new("Runtime")
        .with_children(domain.runtime.agents.iter().map(agent_node).collect());

    let config_children = domain
        .config
        .agents
        .iter()
        .map(agent_node)
        .chain(domain.config.processes.iter().map(process_node))
        .collect();
    let config = TreeNode::new("Config").with_children(config_children);

    TreeNode::new(&domain.name)
        .with_data("key", domain.key.as_str())
        .with_target(
            Route::DomainDetail {
                key: domain.key.clone(),
            }
            .path(),
        )
        .with_children(vec![runtime, config])
}

fn agent_node(agent: &AgentRecord) -> TreeNode {
    let mut node = TreeNode::new(&agent.name)
        .with_data("key", agent.key.as_str())
        .with_target(
            Route::AgentDetail {
                key: agent.key.clone(),
            }
            .path(),
        )
        .with_children(agent.processes.iter().map(process_node).collect());
    if !agent.os.is_empty() {
        node = node.with_data("description", agent.os.as_str());
    }
    node
}

fn process_node(process: &ProcessRecord) -> TreeNode {
    TreeNode::new(&process.name)
        .with_data("key", process.key.as_str())
        .with_data("description", format!("admin {}", process.admin_state))
        .with_target(
            Route::ProcessDetail {
                key: process.key.clone(),
            }
            .path(),
        )
}

// ─────────────────────────────────────────────────────────────────────────────
// Demo tree
// ─────────────────────────────────────────────────────────────────────────────

/// The built-in sample tree.
///
/// `Fish` carries its text under `descrption`, so it is shown without a
/// description. `Vegetable` reports its definition instead of the default
/// label.
pub fn demo_tree() -> Vec<TreeNode> {
    let animal = TreeNode::new("Animal").with_children(vec![
        TreeNode::new("Dog").with_data("description", "A man's best friend"),
        TreeNode::new("Cat").with_data("description", "Felis catus"),
        TreeNode::new("Fish").with_data("descrption", "Glub glub!"),
    ]);

    let vegetable = TreeNode::new("Vegetable")
        .with_data("definition", "A plant or part of a plant used as food")
        .with_data("data_can_contain_anything", true)
        .with_handler(|node| {
            DisplayState::new(format!(
                "Vegetable: {}",
                node.data_str("definition").unwrap_or_default()
            ))
        })
        .with_children(vec![
            TreeNode::new("Carrot").with_data("description", "Good for your eyes!"),
            TreeNode::new("Broccoli").with_data("description", "Good for your children"),
        ]);

    vec![animal, vegetable]
}

#[cfg(test)]
mod tests {
    use super::*;
    use maestro_client::demo_domains;
    use maestro_core::{node_at, select};

    #[test]
    fn test_demo_model_needs_no_fetch() {
        let model = TreeModel::new(TreeSource::Demo);
        assert!(!model.is_live());
        assert_eq!(model.roots.len(), 2);
        assert!(model.domains.is_empty());
    }

    #[test]
    fn test_live_model_starts_empty() {
        let model = TreeModel::new(TreeSource::Live);
        assert!(model.is_live());
        assert!(model.roots.is_empty());
    }

    #[test]
    fn test_demo_tree_selection_labels() {
        let roots = demo_tree();
        assert_eq!(select(&roots[0]).output, "You selected: Animal");
        assert_eq!(
            select(node_at(&roots, &[0, 0]).unwrap()).output,
            "You selected: Dog (A man's best friend)"
        );
        assert_eq!(
            select(node_at(&roots, &[0, 2]).unwrap()).output,
            "You selected: Fish"
        );
        assert_eq!(
            select(&roots[1]).output,
            "Vegetable: A plant or part of a plant used as food"
        );
        assert_eq!(
            select(node_at(&roots, &[1, 0]).unwrap()).output,
            "You selected: Carrot (Good for your eyes!)"
        );
    }

    #[test]
    fn test_domain_tree_layout_and_targets() {
        let domains = demo_domains();
        let roots = domain_tree(&domains);

        assert_eq!(roots.len(), 1);
        let d01 = &roots[0];
        assert_eq!(d01.label, "d01");
        assert_eq!(
            d01.target.as_deref(),
            Some(format!("/domains/{}", domains[0].key).as_str())
        );

        let labels: Vec<_> = d01.children.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["Runtime", "Config"]);

        let runtime_agent = d01.descend(&[0, 0]).unwrap();
        assert_eq!(runtime_agent.label, "a01");
        assert!(runtime_agent.target.as_deref().unwrap().starts_with("/agents/"));

        let p01 = d01.descend(&[0, 0, 0]).unwrap();
        assert_eq!(p01.label, "p01");
        assert_eq!(
            p01.target.as_deref(),
            Some("/processes/L21hZXN0cm8vZDAxL2NvbmZpZy9wcm9jZXNzZXMvcDAx")
        );
        assert_eq!(select(p01).output, "You selected: p01 (admin on)");

        // Config lists its agent then the domain-level processes.
        let config = d01.descend(&[1]).unwrap();
        assert_eq!(config.children.len(), 3);
    }

    #[test]
    fn test_apply_domains_and_failure() {
        let mut model = TreeModel::new(TreeSource::Live);
        model.start_loading();
        model.apply_domains(demo_domains());
        assert!(!model.loading);
        assert_eq!(model.roots.len(), 1);
        assert!(model.find_agent(&model.domains[0].runtime.agents[0].key.clone()).is_some());

        model.start_loading();
        model.apply_failure(ViewError::new("transport", "connection refused"));
        assert!(!model.loading);
        assert!(model.error.is_some());
        // Last good tree is kept.
        assert_eq!(model.roots.len(), 1);
    }
}
