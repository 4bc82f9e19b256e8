//! Errors in the environment.
use thiserror::Error;

/// Errors raised by [`RewardTable`](crate::RewardTable) and
/// [`FruitTreeNavigation`](crate::FruitTreeNavigation).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FtnError {
    /// The tree depth has no reward table.
    #[error("Invalid depth value: {depth} provided. Only depth values of: {valid:?} are allowed")]
    InvalidConfiguration {
        /// The requested depth.
        depth: usize,
        /// The supported depths.
        valid: [usize; 3],
    },

    /// A state does not address a node of the tree.
    #[error("Invalid state: ({row}, {column}) is outside the tree of depth {depth}")]
    InvalidState {
        /// Row of the state.
        row: usize,
        /// Column of the state.
        column: usize,
        /// Depth of the tree.
        depth: usize,
    },
}
