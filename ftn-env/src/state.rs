//! State of [`FruitTreeNavigation`](crate::FruitTreeNavigation).
use ftn_core::Obs;
use serde::{Deserialize, Serialize};

/// A node of the full binary tree, as zero-based `(row, column)`.
///
/// `row` is the depth from the root and `column` the horizontal position in
/// that row. The root is `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct State {
    /// Depth of the node, 0 for the root.
    pub row: usize,

    /// Position of the node in its row.
    pub column: usize,
}

impl State {
    /// Dimension of the encoded state.
    pub const DIMENSION: usize = 2;

    /// Constructs a state.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// The root of the tree.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns `[row, column]`.
    pub fn as_array(&self) -> [usize; Self::DIMENSION] {
        [self.row, self.column]
    }

    /// Returns `true` if the node lies inside a tree of the given depth,
    /// i.e., `row <= depth` and `column < 2^row`.
    pub fn is_within(&self, depth: usize) -> bool {
        self.row <= depth && self.column < (1 << self.row)
    }
}

impl From<[usize; 2]> for State {
    fn from([row, column]: [usize; 2]) -> Self {
        Self { row, column }
    }
}

impl Obs for State {
    fn len(&self) -> usize {
        Self::DIMENSION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_within() {
        assert!(State::root().is_within(5));
        assert!(State::new(3, 7).is_within(5));
        assert!(!State::new(3, 8).is_within(5));
        assert!(State::new(5, 31).is_within(5));
        assert!(!State::new(6, 0).is_within(5));
    }

    #[test]
    fn test_array_conversion() {
        let state = State::from([4, 2]);
        assert_eq!(state, State::new(4, 2));
        assert_eq!(state.as_array(), [4, 2]);
        assert_eq!(state.len(), State::DIMENSION);
    }
}
