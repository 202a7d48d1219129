//! Drawable graph of a tree, for consumption by a graph-rendering
//! frontend.
//!
//! Every drawable node is keyed by its own key's display form, so equal
//! keys collapse onto one drawable node with multiple incoming edges.
//! The authoritative structure is always the tree itself; the graph is
//! only a rendering.

use std::fmt::Display;

use avl_forest::AvlTree;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
}

/// Directed edge from a parent node to one of its children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
}

/// Node/edge graph of one tree snapshot, in preorder emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl TreeGraph {
    pub fn from_tree<K, C>(tree: &AvlTree<K, C>) -> Self
    where
        K: Display,
        C: Fn(&K, &K) -> i32,
    {
        let mut graph = TreeGraph::default();
        graph.add_subtree(tree, tree.root(), None);
        graph
    }

    fn add_subtree<K, C>(&mut self, tree: &AvlTree<K, C>, node: Option<u32>, parent: Option<u32>)
    where
        K: Display,
        C: Fn(&K, &K) -> i32,
    {
        let Some(i) = node else {
            return;
        };
        let id = tree.key(i).to_string();
        self.push_node(&id);
        if let Some(p) = parent {
            self.edges.push(GraphEdge {
                from: tree.key(p).to_string(),
                to: id,
            });
        }
        self.add_subtree(tree, tree.left(i), Some(i));
        self.add_subtree(tree, tree.right(i), Some(i));
    }

    fn push_node(&mut self, id: &str) {
        if !self.nodes.iter().any(|n| n.id == id) {
            self.nodes.push(GraphNode {
                id: id.to_string(),
                label: id.to_string(),
            });
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Graphviz DOT rendering.
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph {\n");
        for node in &self.nodes {
            out.push_str(&format!(
                "  \"{}\" [label=\"{}\"]\n",
                escape(&node.id),
                escape(&node.label)
            ));
        }
        for edge in &self.edges {
            out.push_str(&format!(
                "  \"{}\" -> \"{}\"\n",
                escape(&edge.from),
                escape(&edge.to)
            ));
        }
        out.push('}');
        out
    }

    /// JSON rendering for frontends that draw the graph themselves.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
