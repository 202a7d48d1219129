use thiserror::Error;

/// Structural-invariant violation reported by tree validation.
///
/// Every public mutation keeps the tree valid, so these only surface
/// when validation is run against a tree that was corrupted through
/// direct arena manipulation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("cached height mismatch: expected {expected}, got {actual}")]
    HeightMismatch { expected: u32, actual: u32 },

    #[error("AVL balance violated: balance factor {bf}")]
    BalanceViolated { bf: i32 },

    #[error("BST order violated: in-order key sequence is not non-decreasing")]
    OrderViolated,
}
