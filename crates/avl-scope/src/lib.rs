//! Presentation boundary for the `avl-forest` engine.
//!
//! The engine's only boundary is its call contract with an interactive
//! presentation layer: an operation tag plus a single ordered key go in,
//! and the new tree, a rotation label (or "No Rotation") and the preorder
//! key listing come out. This crate implements that contract as a
//! library:
//!
//! - [`Op`]: the operation tag (`Insert` | `Delete`).
//! - [`Session`]: sequences mutations over one live tree and records a
//!   history of independent duplicated snapshots, each paired with the
//!   textual description of the operation and rotation that produced it.
//! - [`TreeGraph`]: drawable node/edge graph of a tree, with Graphviz
//!   DOT and JSON renderings for a graph frontend.

pub mod graph;
pub mod session;
pub mod types;

pub use graph::{GraphEdge, GraphNode, TreeGraph};
pub use session::{Outcome, Session, Snapshot};
pub use types::{Op, ParseOpError};
