use avl_forest::{AvlTree, Rotation};
use avl_scope::{Op, Session, TreeGraph};

fn session_of(keys: &[i64]) -> Session<i64> {
    let mut session = Session::new();
    for &k in keys {
        session.apply(Op::Insert, k);
    }
    session
}

#[test]
fn insert_sequence_reports_rotation_and_preorder() {
    let mut session: Session<i64> = Session::new();
    assert_eq!(session.apply(Op::Insert, 10).rotation, None);
    assert_eq!(session.apply(Op::Insert, 20).rotation, None);

    let outcome = session.apply(Op::Insert, 30);
    assert_eq!(outcome.rotation, Some(Rotation::Left));
    assert_eq!(outcome.rotation_label, "Left Rotation");
    assert_eq!(outcome.description, "Tree after Insert 30: Left Rotation");
    assert_eq!(outcome.preorder, vec![20, 10, 30]);
    assert_eq!(outcome.preorder_text, "20, 10, 30");
    assert_eq!(session.len(), 3);
}

#[test]
fn history_keeps_one_described_snapshot_per_operation() {
    let mut session = session_of(&[10, 20, 30]);
    session.apply(Op::Delete, 10);

    let descriptions: Vec<&str> = session
        .history()
        .iter()
        .map(|s| s.description.as_str())
        .collect();
    assert_eq!(
        descriptions,
        vec![
            "Tree after Insert 10: No Rotation",
            "Tree after Insert 20: No Rotation",
            "Tree after Insert 30: Left Rotation",
            "Tree after Delete 10: No Rotation",
        ]
    );
}

#[test]
fn snapshots_are_immune_to_later_mutation() {
    let mut session = session_of(&[10, 20, 30]);
    let frozen = session.history()[2].tree.pre_order();
    assert_eq!(frozen, vec![20, 10, 30]);

    session.apply(Op::Insert, 5);
    session.apply(Op::Delete, 20);
    session.apply(Op::Delete, 30);
    assert_eq!(session.history()[2].tree.pre_order(), frozen);
    assert_eq!(session.history()[2].graph, TreeGraph::from_tree(&session.history()[2].tree));
}

#[test]
fn deleting_an_absent_key_reports_no_rotation() {
    let mut session = session_of(&[20, 10, 30]);
    let before = session.tree().pre_order();

    let outcome = session.apply(Op::Delete, 99);
    assert_eq!(outcome.rotation, None);
    assert_eq!(outcome.description, "Tree after Delete 99: No Rotation");
    assert_eq!(outcome.preorder, before);
}

#[test]
fn emptied_tree_reports_the_empty_indication() {
    let mut session = session_of(&[7]);
    let outcome = session.apply(Op::Delete, 7);
    assert_eq!(outcome.preorder, Vec::<i64>::new());
    assert_eq!(outcome.preorder_text, "Tree is empty");
    assert!(outcome.graph.is_empty());
}

#[test]
fn graph_walks_parent_to_child_in_preorder() {
    let mut tree: AvlTree<i64> = AvlTree::new();
    for k in [10, 20, 30] {
        tree.insert(k);
    }
    let graph = TreeGraph::from_tree(&tree);

    let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["20", "10", "30"]);

    let edges: Vec<(&str, &str)> = graph
        .edges
        .iter()
        .map(|e| (e.from.as_str(), e.to.as_str()))
        .collect();
    assert_eq!(edges, vec![("20", "10"), ("20", "30")]);
}

#[test]
fn equal_keys_collapse_onto_one_drawable_node() {
    let mut tree: AvlTree<i64> = AvlTree::new();
    tree.insert(10);
    tree.insert(10);
    let graph = TreeGraph::from_tree(&tree);

    assert_eq!(graph.nodes.len(), 1);
    assert_eq!(graph.edges.len(), 1);
    assert_eq!(graph.edges[0].from, "10");
    assert_eq!(graph.edges[0].to, "10");
}

#[test]
fn dot_rendering_lists_nodes_and_edges() {
    let mut tree: AvlTree<i64> = AvlTree::new();
    for k in [10, 20, 30] {
        tree.insert(k);
    }
    let dot = TreeGraph::from_tree(&tree).to_dot();

    assert!(dot.starts_with("digraph {"));
    assert!(dot.contains("\"20\" [label=\"20\"]"));
    assert!(dot.contains("\"20\" -> \"10\""));
    assert!(dot.contains("\"20\" -> \"30\""));
    assert!(dot.ends_with('}'));
}

#[test]
fn json_rendering_round_trips() {
    let mut tree: AvlTree<i64> = AvlTree::new();
    for k in [4, 2, 6] {
        tree.insert(k);
    }
    let graph = TreeGraph::from_tree(&tree);
    let json = graph.to_json().unwrap();
    let back: TreeGraph = serde_json::from_str(&json).unwrap();
    assert_eq!(back, graph);
}

#[test]
fn outcome_serializes_for_the_frontend() {
    let mut session = session_of(&[10, 20]);
    let outcome = session.apply(Op::Insert, 30);
    let value = serde_json::to_value(&outcome).unwrap();

    assert_eq!(value["op"], "Insert");
    assert_eq!(value["key"], 30);
    assert_eq!(value["rotation_label"], "Left Rotation");
    assert_eq!(value["preorder"], serde_json::json!([20, 10, 30]));
    assert_eq!(value["graph"]["nodes"][0]["id"], "20");
}

#[test]
fn op_parses_case_insensitively() {
    assert_eq!("insert".parse::<Op>().unwrap(), Op::Insert);
    assert_eq!("DELETE".parse::<Op>().unwrap(), Op::Delete);
    assert_eq!(Op::Insert.to_string(), "Insert");
    assert!("frobnicate".parse::<Op>().is_err());
}
