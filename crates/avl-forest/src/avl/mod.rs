//! Height-balanced binary search tree with rotation reporting.

#[path = "AvlTree.rs"]
pub mod avl_tree;
pub mod types;
pub mod util;

pub use avl_tree::AvlTree;
pub use types::{Arena, AvlNode};
