//! The tree algebra: rotations, insert, remove, traversal, duplication
//! and validation, as free functions over `(arena, root)`.
//!
//! Every mutator receives the current subtree root and returns the new
//! root together with the rotation label it applied, if any. The label
//! reported by `insert`/`remove` belongs to the deepest node found
//! unbalanced on the return path; balanced ancestors pass it through
//! unchanged.

use std::fmt::Debug;

use crate::error::InvariantError;
use crate::types::Rotation;

use super::types::Arena;

/// Cached height of a subtree. 0 for an absent subtree.
#[inline]
pub fn height<K>(arena: &Arena<K>, node: Option<u32>) -> u32 {
    match node {
        None => 0,
        Some(i) => arena[i].height,
    }
}

/// `height(left) - height(right)`. 0 for an absent subtree.
#[inline]
pub fn balance_factor<K>(arena: &Arena<K>, node: Option<u32>) -> i32 {
    match node {
        None => 0,
        Some(i) => height(arena, arena[i].l) as i32 - height(arena, arena[i].r) as i32,
    }
}

#[inline]
fn update_height<K>(arena: &mut Arena<K>, n: u32) {
    let h = 1 + height(arena, arena[n].l).max(height(arena, arena[n].r));
    arena[n].height = h;
}

/// Single rotation promoting `y`'s left child to subtree root.
///
/// Heights are recomputed child before parent: `y` first, then the
/// promoted node.
pub fn rotate_right<K>(arena: &mut Arena<K>, y: u32) -> (u32, Rotation) {
    let x = arena[y].l.expect("right rotation pivot has a left child");
    let t2 = arena[x].r;
    arena[x].r = Some(y);
    arena[y].l = t2;
    update_height(arena, y);
    update_height(arena, x);
    (x, Rotation::Right)
}

/// Single rotation promoting `x`'s right child to subtree root.
pub fn rotate_left<K>(arena: &mut Arena<K>, x: u32) -> (u32, Rotation) {
    let y = arena[x].r.expect("left rotation pivot has a right child");
    let t2 = arena[y].l;
    arena[y].l = Some(x);
    arena[x].r = t2;
    update_height(arena, x);
    update_height(arena, y);
    (y, Rotation::Left)
}

/// Double rotation for a node leaning left whose left child leans right.
pub fn rotate_left_right<K>(arena: &mut Arena<K>, z: u32) -> (u32, Rotation) {
    let l = arena[z].l.expect("left-right rotation pivot has a left child");
    let (nl, _) = rotate_left(arena, l);
    arena[z].l = Some(nl);
    let (root, _) = rotate_right(arena, z);
    (root, Rotation::LeftRight)
}

/// Double rotation for a node leaning right whose right child leans left.
pub fn rotate_right_left<K>(arena: &mut Arena<K>, z: u32) -> (u32, Rotation) {
    let r = arena[z].r.expect("right-left rotation pivot has a right child");
    let (nr, _) = rotate_right(arena, r);
    arena[z].r = Some(nr);
    let (root, _) = rotate_left(arena, z);
    (root, Rotation::RightLeft)
}

/// Insert the pre-allocated leaf `n` into the subtree rooted at `root`.
///
/// Keys comparing equal to an existing key descend right. Returns the
/// new subtree root and the rotation applied at the deepest node that
/// became unbalanced, or `None` when the whole return path stayed
/// balanced.
pub fn insert<K, C>(
    arena: &mut Arena<K>,
    root: Option<u32>,
    n: u32,
    comparator: &C,
) -> (u32, Option<Rotation>)
where
    C: Fn(&K, &K) -> i32,
{
    let Some(r) = root else {
        return (n, None);
    };

    let cmp = comparator(&arena[n].k, &arena[r].k);
    let rotation = if cmp < 0 {
        let child = arena[r].l;
        let (nl, rot) = insert(arena, child, n, comparator);
        arena[r].l = Some(nl);
        rot
    } else {
        let child = arena[r].r;
        let (nr, rot) = insert(arena, child, n, comparator);
        arena[r].r = Some(nr);
        rot
    };

    update_height(arena, r);
    let balance = balance_factor(arena, Some(r));

    if balance > 1 {
        // The inserted key went left of this node: strictly below the
        // left child's key it sits in the left-left grandchild subtree,
        // otherwise (ties included) in the left-right one.
        let l = arena[r].l.expect("left-heavy node has a left child");
        let (root, rot) = if comparator(&arena[n].k, &arena[l].k) < 0 {
            rotate_right(arena, r)
        } else {
            rotate_left_right(arena, r)
        };
        return (root, Some(rot));
    }
    if balance < -1 {
        // Mirror case. Ties descend right, so a key equal to the right
        // child's key sits in the right-right grandchild subtree.
        let rt = arena[r].r.expect("right-heavy node has a right child");
        let (root, rot) = if comparator(&arena[n].k, &arena[rt].k) >= 0 {
            rotate_left(arena, r)
        } else {
            rotate_right_left(arena, r)
        };
        return (root, Some(rot));
    }

    (r, rotation)
}

/// Remove one node carrying `key` from the subtree rooted at `root`.
///
/// An absent key is a silent no-op. A removed two-children node is
/// overwritten with its in-order successor's key and the successor is
/// removed from the right subtree instead; the label from that inner
/// removal is not reported.
pub fn remove<K, C>(
    arena: &mut Arena<K>,
    root: Option<u32>,
    key: &K,
    comparator: &C,
) -> (Option<u32>, Option<Rotation>)
where
    K: Clone,
    C: Fn(&K, &K) -> i32,
{
    let Some(r) = root else {
        return (None, None);
    };

    let cmp = comparator(key, &arena[r].k);
    let mut rotation = None;
    if cmp < 0 {
        let child = arena[r].l;
        let (nl, rot) = remove(arena, child, key, comparator);
        arena[r].l = nl;
        rotation = rot;
    } else if cmp > 0 {
        let child = arena[r].r;
        let (nr, rot) = remove(arena, child, key, comparator);
        arena[r].r = nr;
        rotation = rot;
    } else {
        let (l, rt) = (arena[r].l, arena[r].r);
        match (l, rt) {
            (None, _) => {
                arena.free(r);
                return (rt, None);
            }
            (_, None) => {
                arena.free(r);
                return (l, None);
            }
            (Some(_), Some(right)) => {
                let succ = min_value_node(arena, right);
                let succ_key = arena[succ].k.clone();
                arena[r].k = succ_key.clone();
                let (nr, _) = remove(arena, Some(right), &succ_key, comparator);
                arena[r].r = nr;
            }
        }
    }

    update_height(arena, r);
    let balance = balance_factor(arena, Some(r));

    if balance > 1 {
        let l = arena[r].l.expect("left-heavy node has a left child");
        let (root, rot) = if balance_factor(arena, Some(l)) >= 0 {
            rotate_right(arena, r)
        } else {
            rotate_left_right(arena, r)
        };
        return (Some(root), Some(rot));
    }
    if balance < -1 {
        let rt = arena[r].r.expect("right-heavy node has a right child");
        let (root, rot) = if balance_factor(arena, Some(rt)) <= 0 {
            rotate_left(arena, r)
        } else {
            rotate_right_left(arena, r)
        };
        return (Some(root), Some(rot));
    }

    (Some(r), rotation)
}

/// Leftmost node of the subtree rooted at `node`.
pub fn min_value_node<K>(arena: &Arena<K>, node: u32) -> u32 {
    let mut curr = node;
    while let Some(l) = arena[curr].l {
        curr = l;
    }
    curr
}

/// Key sequence in root, left, right order. Empty for an absent root.
pub fn pre_order<K: Clone>(arena: &Arena<K>, root: Option<u32>) -> Vec<K> {
    fn walk<K: Clone>(arena: &Arena<K>, node: Option<u32>, out: &mut Vec<K>) {
        if let Some(i) = node {
            out.push(arena[i].k.clone());
            walk(arena, arena[i].l, out);
            walk(arena, arena[i].r, out);
        }
    }
    let mut out = Vec::new();
    walk(arena, root, &mut out);
    out
}

/// Key sequence in left, root, right order. Non-decreasing for any
/// valid tree.
pub fn in_order<K: Clone>(arena: &Arena<K>, root: Option<u32>) -> Vec<K> {
    fn walk<K: Clone>(arena: &Arena<K>, node: Option<u32>, out: &mut Vec<K>) {
        if let Some(i) = node {
            walk(arena, arena[i].l, out);
            out.push(arena[i].k.clone());
            walk(arena, arena[i].r, out);
        }
    }
    let mut out = Vec::new();
    walk(arena, root, &mut out);
    out
}

/// Deep-copy a subtree into a fresh compact arena.
///
/// The copy shares no storage with the source: later mutation of either
/// tree leaves the other untouched.
pub fn duplicate<K: Clone>(arena: &Arena<K>, root: Option<u32>) -> (Arena<K>, Option<u32>) {
    fn copy_into<K: Clone>(src: &Arena<K>, node: Option<u32>, dst: &mut Arena<K>) -> Option<u32> {
        let i = node?;
        let n = dst.alloc(src[i].k.clone());
        let l = copy_into(src, src[i].l, dst);
        let r = copy_into(src, src[i].r, dst);
        dst[n].l = l;
        dst[n].r = r;
        dst[n].height = src[i].height;
        Some(n)
    }
    let mut out = Arena::with_capacity(arena.len());
    let new_root = copy_into(arena, root, &mut out);
    (out, new_root)
}

/// Validate the three structural invariants: cached heights, AVL
/// balance, and non-decreasing in-order key sequence.
pub fn assert_avl_tree<K, C>(
    arena: &Arena<K>,
    root: Option<u32>,
    comparator: &C,
) -> Result<(), InvariantError>
where
    C: Fn(&K, &K) -> i32,
{
    fn check_heights<K>(arena: &Arena<K>, node: Option<u32>) -> Result<u32, InvariantError> {
        let Some(i) = node else {
            return Ok(0);
        };
        let lh = check_heights(arena, arena[i].l)?;
        let rh = check_heights(arena, arena[i].r)?;
        let expected = 1 + lh.max(rh);
        let actual = arena[i].height;
        if actual != expected {
            return Err(InvariantError::HeightMismatch { expected, actual });
        }
        let bf = lh as i32 - rh as i32;
        if !(-1..=1).contains(&bf) {
            return Err(InvariantError::BalanceViolated { bf });
        }
        Ok(expected)
    }

    fn collect<'a, K>(arena: &'a Arena<K>, node: Option<u32>, out: &mut Vec<&'a K>) {
        if let Some(i) = node {
            collect(arena, arena[i].l, out);
            out.push(&arena[i].k);
            collect(arena, arena[i].r, out);
        }
    }

    check_heights(arena, root)?;

    let mut keys = Vec::new();
    collect(arena, root, &mut keys);
    for pair in keys.windows(2) {
        if comparator(pair[0], pair[1]) > 0 {
            return Err(InvariantError::OrderViolated);
        }
    }

    Ok(())
}

/// Debug printer for subtrees.
pub fn print<K: Debug>(arena: &Arena<K>, node: Option<u32>, tab: &str) -> String {
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i];
            let left = print(arena, n.l, &format!("{tab}  "));
            let right = print(arena, n.r, &format!("{tab}  "));
            format!(
                "Node[{i}] [h={}] {{ {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.height, n.k
            )
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn cmp(a: &i64, b: &i64) -> i32 {
        if a == b {
            0
        } else if a < b {
            -1
        } else {
            1
        }
    }

    /// Left-leaning chain 30 ← 20 ← 10 with correct cached heights.
    fn left_chain() -> (Arena<i64>, u32) {
        let mut arena = Arena::new();
        let y = arena.alloc(30);
        let x = arena.alloc(20);
        let t = arena.alloc(10);
        arena[y].l = Some(x);
        arena[x].l = Some(t);
        arena[y].height = 3;
        arena[x].height = 2;
        (arena, y)
    }

    #[test]
    fn rotate_right_promotes_left_child() {
        let (mut arena, y) = left_chain();
        let (root, rot) = rotate_right(&mut arena, y);
        assert_eq!(rot, Rotation::Right);
        assert_eq!(arena[root].k, 20);
        assert_eq!(arena[root].height, 2);
        assert_eq!(arena[arena[root].l.unwrap()].k, 10);
        assert_eq!(arena[arena[root].r.unwrap()].k, 30);
        assert_eq!(arena[arena[root].r.unwrap()].height, 1);
    }

    #[test]
    fn rotate_left_promotes_right_child() {
        let mut arena = Arena::new();
        let x = arena.alloc(10);
        let y = arena.alloc(20);
        let t = arena.alloc(30);
        arena[x].r = Some(y);
        arena[y].r = Some(t);
        arena[x].height = 3;
        arena[y].height = 2;

        let (root, rot) = rotate_left(&mut arena, x);
        assert_eq!(rot, Rotation::Left);
        assert_eq!(arena[root].k, 20);
        assert_eq!(pre_order(&arena, Some(root)), vec![20, 10, 30]);
        assert_avl_tree(&arena, Some(root), &cmp).unwrap();
    }

    #[test]
    fn insert_into_empty_is_a_leaf_without_rotation() {
        let mut arena = Arena::new();
        let n = arena.alloc(7);
        let (root, rot) = insert(&mut arena, None, n, &cmp);
        assert_eq!(root, n);
        assert_eq!(rot, None);
        assert_eq!(arena[root].height, 1);
    }

    #[test]
    fn min_value_node_follows_left_children() {
        let (arena, y) = left_chain();
        let min = min_value_node(&arena, y);
        assert_eq!(arena[min].k, 10);
    }

    #[test]
    fn remove_absent_key_from_empty_subtree() {
        let mut arena: Arena<i64> = Arena::new();
        let (root, rot) = remove(&mut arena, None, &1, &cmp);
        assert_eq!(root, None);
        assert_eq!(rot, None);
    }

    #[test]
    fn assert_avl_tree_rejects_stale_height() {
        let (mut arena, y) = left_chain();
        let (root, _) = rotate_right(&mut arena, y);
        arena[root].height = 9;
        assert_eq!(
            assert_avl_tree(&arena, Some(root), &cmp),
            Err(InvariantError::HeightMismatch {
                expected: 2,
                actual: 9
            })
        );
    }

    #[test]
    fn assert_avl_tree_rejects_unbalanced_chain() {
        let (arena, y) = left_chain();
        assert_eq!(
            assert_avl_tree(&arena, Some(y), &cmp),
            Err(InvariantError::BalanceViolated { bf: 2 })
        );
    }
}
