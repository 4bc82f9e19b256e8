//! Mapping from tree coordinates to reward table columns.
use crate::State;

/// Returns the column of the reward table holding the reward of a leaf.
///
/// The offset is `2^(row - 1) + column`. For a tree of depth `d` the table
/// stores `2^(d - 1)` interior columns followed by `2^d` leaf columns, so leaf
/// column `c` lands on the `c`-th leaf column. The root is never indexed and
/// no bounds are checked here; callers pass leaves of the configured depth.
#[inline]
pub fn tree_index(state: &State) -> usize {
    debug_assert!(state.row >= 1, "the root has no table column");
    (1 << (state.row - 1)) + state.column
}
