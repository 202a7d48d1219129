use std::fmt::Debug;

use crate::error::InvariantError;
use crate::types::Rotation;

use super::types::Arena;
use super::util;

fn default_comparator<K: PartialOrd>(a: &K, b: &K) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}

/// Owning AVL tree handle: arena, root index and comparator.
///
/// Each mutation returns the rotation label the rebalancing applied, or
/// `None` when the tree stayed balanced along the whole mutation path.
/// Duplicate keys are allowed and accumulate in the right subtree of
/// equal-valued nodes.
pub struct AvlTree<K, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    arena: Arena<K>,
    root: Option<u32>,
    comparator: C,
}

impl<K> AvlTree<K>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K> Default for AvlTree<K>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> AvlTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            comparator,
        }
    }

    /// Insert `key` as a new leaf and rebalance the path back to the
    /// root. Reports the rotation applied at the deepest node found
    /// unbalanced, if any.
    pub fn insert(&mut self, key: K) -> Option<Rotation> {
        let n = self.arena.alloc(key);
        let (root, rotation) = util::insert(&mut self.arena, self.root, n, &self.comparator);
        self.root = Some(root);
        rotation
    }

    /// Remove one node carrying `key`, if present, and rebalance the
    /// path back to the root. An absent key is a silent no-op reporting
    /// `None`.
    pub fn delete(&mut self, key: &K) -> Option<Rotation>
    where
        K: Clone,
    {
        let (root, rotation) = util::remove(&mut self.arena, self.root, key, &self.comparator);
        self.root = root;
        rotation
    }

    pub fn contains(&self, key: &K) -> bool {
        let mut curr = self.root;
        while let Some(i) = curr {
            let cmp = (self.comparator)(key, &self.arena[i].k);
            if cmp == 0 {
                return true;
            }
            curr = if cmp < 0 {
                self.arena[i].l
            } else {
                self.arena[i].r
            };
        }
        false
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the whole tree. 0 when empty.
    pub fn height(&self) -> u32 {
        util::height(&self.arena, self.root)
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    /// Root index for external walkers (graph adapters and the like).
    pub fn root(&self) -> Option<u32> {
        self.root
    }

    pub fn key(&self, i: u32) -> &K {
        &self.arena[i].k
    }

    pub fn left(&self, i: u32) -> Option<u32> {
        self.arena[i].l
    }

    pub fn right(&self, i: u32) -> Option<u32> {
        self.arena[i].r
    }

    pub fn pre_order(&self) -> Vec<K>
    where
        K: Clone,
    {
        util::pre_order(&self.arena, self.root)
    }

    pub fn in_order(&self) -> Vec<K>
    where
        K: Clone,
    {
        util::in_order(&self.arena, self.root)
    }

    /// In-order iterator over key references.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(&self.arena, self.root)
    }

    /// Independent deep copy. Later mutation of either tree leaves the
    /// other untouched.
    pub fn duplicate(&self) -> Self
    where
        K: Clone,
        C: Clone,
    {
        let (arena, root) = util::duplicate(&self.arena, self.root);
        Self {
            arena,
            root,
            comparator: self.comparator.clone(),
        }
    }

    pub fn assert_valid(&self) -> Result<(), InvariantError> {
        util::assert_avl_tree(&self.arena, self.root, &self.comparator)
    }

    pub fn print(&self) -> String
    where
        K: Debug,
    {
        util::print(&self.arena, self.root, "")
    }
}

impl<K: Clone + Debug, C: Fn(&K, &K) -> i32> Debug for AvlTree<K, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AvlTree")
            .field("size", &self.size())
            .field("keys", &self.in_order())
            .finish()
    }
}

/// Stack-based in-order iterator.
pub struct Iter<'a, K> {
    arena: &'a Arena<K>,
    stack: Vec<u32>,
}

impl<'a, K> Iter<'a, K> {
    fn new(arena: &'a Arena<K>, root: Option<u32>) -> Self {
        let mut iter = Self {
            arena,
            stack: Vec::new(),
        };
        iter.push_left(root);
        iter
    }

    fn push_left(&mut self, mut node: Option<u32>) {
        while let Some(i) = node {
            self.stack.push(i);
            node = self.arena[i].l;
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let i = self.stack.pop()?;
        let right = self.arena[i].r;
        self.push_left(right);
        Some(&self.arena[i].k)
    }
}

impl<'a, K, C> IntoIterator for &'a AvlTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
