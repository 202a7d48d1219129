//! Operation-driven session over one live tree.
//!
//! The session owns the tree, applies one mutation per call and records
//! a history of independent duplicated snapshots. History entries are
//! immune to later mutation of the live tree because each one holds its
//! own deep copy.

use std::fmt::Display;

use avl_forest::{AvlTree, Rotation};
use serde::Serialize;

use crate::graph::TreeGraph;
use crate::types::Op;

/// One recorded history entry: the duplicated tree right after a
/// mutation, plus its description and drawable graph.
pub struct Snapshot<K, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    pub tree: AvlTree<K, C>,
    pub description: String,
    pub graph: TreeGraph,
}

/// Result of applying one operation, shaped for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome<K> {
    pub op: Op,
    pub key: K,
    #[serde(skip)]
    pub rotation: Option<Rotation>,
    pub rotation_label: String,
    pub description: String,
    pub preorder: Vec<K>,
    pub preorder_text: String,
    pub graph: TreeGraph,
}

pub struct Session<K, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    tree: AvlTree<K, C>,
    history: Vec<Snapshot<K, C>>,
}

impl<K> Session<K>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self {
            tree: AvlTree::new(),
            history: Vec::new(),
        }
    }
}

impl<K> Default for Session<K>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> Session<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            tree: AvlTree::with_comparator(comparator),
            history: Vec::new(),
        }
    }

    /// Apply one mutation, record a snapshot and return the outcome.
    pub fn apply(&mut self, op: Op, key: K) -> Outcome<K>
    where
        K: Clone + Display,
        C: Clone,
    {
        let rotation = match op {
            Op::Insert => self.tree.insert(key.clone()),
            Op::Delete => self.tree.delete(&key),
        };
        let rotation_label = match rotation {
            Some(r) => r.label().to_string(),
            None => "No Rotation".to_string(),
        };
        let description = format!("Tree after {op} {key}: {rotation_label}");

        let graph = TreeGraph::from_tree(&self.tree);
        let preorder = self.tree.pre_order();
        let preorder_text = if preorder.is_empty() {
            "Tree is empty".to_string()
        } else {
            preorder
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };

        self.history.push(Snapshot {
            tree: self.tree.duplicate(),
            description: description.clone(),
            graph: graph.clone(),
        });

        Outcome {
            op,
            key,
            rotation,
            rotation_label,
            description,
            preorder,
            preorder_text,
            graph,
        }
    }

    /// The live tree.
    pub fn tree(&self) -> &AvlTree<K, C> {
        &self.tree
    }

    /// Recorded snapshots, oldest first.
    pub fn history(&self) -> &[Snapshot<K, C>] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
