//! Arena-based AVL tree engine with rotation reporting.
//!
//! Maintains a height-balanced binary search tree of ordered keys and
//! reports which rebalancing transformation (if any) each mutation
//! applied. Duplicate keys are allowed; the insertion comparison routes
//! ties to the right subtree.
//!
//! Instead of raw pointers, all child links are `Option<u32>` indices
//! into a [`Vec`]-backed [`Arena`]. Tree-manipulation functions take the
//! arena plus a subtree root index and return the new root, so every
//! rotation is an explicit ownership transfer on the recursive return
//! path rather than in-place pointer surgery.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Rotation`] labels and the [`Comparator`] alias |
//! | [`error`] | [`InvariantError`] returned by tree validation |
//! | [`avl::types`] | [`AvlNode`] and the slot [`Arena`] |
//! | [`avl::util`] | rotations, insert, remove, traversal, duplication |
//! | [`avl::avl_tree`] | the owning [`AvlTree`] handle |

pub mod avl;
pub mod error;
pub mod types;

pub use avl::avl_tree::{AvlTree, Iter};
pub use avl::types::{Arena, AvlNode};
pub use avl::util::{
    assert_avl_tree, balance_factor, duplicate, height, in_order, insert, min_value_node,
    pre_order, print, remove, rotate_left, rotate_left_right, rotate_right, rotate_right_left,
};
pub use error::InvariantError;
pub use types::{Comparator, Rotation};
