//! # Tree Nodes and Selection
//!
//! The navigation tree shown on the left of the console. Nodes are built once
//! (from fetched domains or the demo fixture) and never mutated afterwards.
//!
//! Choosing a node produces a [`DisplayState`]. A node is either
//! default-labelled or carries its own handler; the two cases are an explicit
//! [`OnSelect`] variant rather than an optional callback.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

/// Prefix of the default selection label.
pub const SELECTED_PREFIX: &str = "You selected: ";

/// The single output line derived from a selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DisplayState {
    pub output: String,
}

impl DisplayState {
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
        }
    }
}

/// Custom selection handler.
pub type SelectHandler = Arc<dyn Fn(&TreeNode) -> DisplayState + Send + Sync>;

/// How a node turns a selection into a [`DisplayState`].
#[derive(Clone, Default)]
pub enum OnSelect {
    /// `"You selected: <label>"`, with the description appended when present.
    #[default]
    DefaultLabel,
    /// The handler's output replaces the default label entirely.
    Custom(SelectHandler),
}

impl fmt::Debug for OnSelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OnSelect::DefaultLabel => write!(f, "DefaultLabel"),
            OnSelect::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// A node of the navigation tree.
#[derive(Debug, Clone, Default)]
pub struct TreeNode {
    pub label: String,
    /// Free-form payload, e.g. `description`.
    pub data: BTreeMap<String, Value>,
    pub children: Vec<TreeNode>,
    pub on_select: OnSelect,
    /// Navigation path opened when the node is chosen (e.g. `/processes/<key>`).
    pub target: Option<String>,
}

impl TreeNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children;
        self
    }

    pub fn with_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&TreeNode) -> DisplayState + Send + Sync + 'static,
    {
        self.on_select = OnSelect::Custom(Arc::new(handler));
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// String value of `data[key]`, if present and a string.
    pub fn data_str(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(Value::as_str)
    }

    /// The node's description. Absence is not an error.
    pub fn description(&self) -> Option<&str> {
        self.data_str("description")
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn has_custom_handler(&self) -> bool {
        matches!(self.on_select, OnSelect::Custom(_))
    }

    /// Follow a path of child indices from this node.
    pub fn descend(&self, path: &[usize]) -> Option<&TreeNode> {
        path.iter()
            .try_fold(self, |node, &index| node.children.get(index))
    }
}

/// Default label rule: `"You selected: <label>"` plus `" (<description>)"`
/// when the node has a description.
pub fn default_label(node: &TreeNode) -> DisplayState {
    let mut output = format!("{SELECTED_PREFIX}{}", node.label);
    if let Some(description) = node.description() {
        output.push_str(&format!(" ({description})"));
    }
    DisplayState { output }
}

/// Derive the display state for a chosen node.
///
/// A custom handler fully overrides the default label rule.
pub fn select(node: &TreeNode) -> DisplayState {
    match &node.on_select {
        OnSelect::DefaultLabel => default_label(node),
        OnSelect::Custom(handler) => handler(node),
    }
}

/// Find a node in a forest by index path (`[root, child, grandchild, ..]`).
pub fn node_at<'a>(roots: &'a [TreeNode], path: &[usize]) -> Option<&'a TreeNode> {
    let (first, rest) = path.split_first()?;
    roots.get(*first)?.descend(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_label_with_description() {
        let node = TreeNode::new("Dog").with_data("description", "A man's best friend");
        assert_eq!(
            select(&node).output,
            "You selected: Dog (A man's best friend)"
        );
    }

    #[test]
    fn test_default_label_without_description() {
        let node = TreeNode::new("Animal");
        let state = select(&node);
        assert_eq!(state.output, "You selected: Animal");
        assert!(!state.output.ends_with(')'));
    }

    #[test]
    fn test_non_string_description_is_ignored() {
        let node = TreeNode::new("Fish").with_data("description", 42);
        assert_eq!(select(&node).output, "You selected: Fish");
    }

    #[test]
    fn test_custom_handler_overrides_default() {
        let node = TreeNode::new("Vegetable")
            .with_data("definition", "A plant or part of a plant")
            .with_data("description", "ignored")
            .with_handler(|n| {
                DisplayState::new(format!(
                    "Vegetable: {}",
                    n.data_str("definition").unwrap_or_default()
                ))
            });
        assert!(node.has_custom_handler());
        assert_eq!(select(&node).output, "Vegetable: A plant or part of a plant");
    }

    #[test]
    fn test_node_at_follows_index_path() {
        let roots = vec![
            TreeNode::new("a").with_children(vec![TreeNode::new("a0"), TreeNode::new("a1")]),
            TreeNode::new("b"),
        ];
        assert_eq!(node_at(&roots, &[0, 1]).unwrap().label, "a1");
        assert_eq!(node_at(&roots, &[1]).unwrap().label, "b");
        assert!(node_at(&roots, &[1, 0]).is_none());
        assert!(node_at(&roots, &[]).is_none());
    }

    #[test]
    fn test_on_select_debug_hides_closure() {
        let node = TreeNode::new("x").with_handler(|_| DisplayState::default());
        assert_eq!(format!("{:?}", node.on_select), "Custom(..)");
    }
}
