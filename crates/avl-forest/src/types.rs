//! Shared type definitions.

use std::fmt;

/// Rebalancing transformation applied by a mutation.
///
/// A mutation reports at most one rotation: the one applied at the
/// deepest node found unbalanced on the recursive return path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// Single rotation promoting the right child (Right-Right case).
    Left,
    /// Single rotation promoting the left child (Left-Left case).
    Right,
    /// Inner left rotation followed by an outer right rotation.
    LeftRight,
    /// Inner right rotation followed by an outer left rotation.
    RightLeft,
}

impl Rotation {
    /// Display label used by the presentation layer.
    pub fn label(&self) -> &'static str {
        match self {
            Rotation::Left => "Left Rotation",
            Rotation::Right => "Right Rotation",
            Rotation::LeftRight => "Left-Right Rotation",
            Rotation::RightLeft => "Right-Left Rotation",
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Comparator used by tree structures.
pub type Comparator<K> = dyn Fn(&K, &K) -> i32;
