//! Reward table of the fruit tree.
use crate::{
    ccs::{FRUITS_DEPTH_5, FRUITS_DEPTH_6, FRUITS_DEPTH_7},
    tree_index::tree_index,
    FtnError, State,
};
use log::debug;
use ndarray::{s, Array1, Array2, ArrayView2};
use std::sync::{Arc, OnceLock};

/// The number of objectives: protein, carbs, fats, vitamins, minerals and water.
pub const REWARD_SIZE: usize = 6;

/// Depths for which a convex coverage set is defined.
pub const VALID_DEPTHS: [usize; 3] = [5, 6, 7];

/// A reward vector with [`REWARD_SIZE`] components.
pub type Reward = Array1<f64>;

// One slot per entry of `VALID_DEPTHS`.
static SHARED_TABLES: [OnceLock<Arc<RewardTable>>; 3] =
    [OnceLock::new(), OnceLock::new(), OnceLock::new()];

/// Rewards of every node of a full binary tree of a supported depth.
///
/// The table is a `REWARD_SIZE x (2^(depth-1) + 2^depth)` matrix: a block of
/// all-zero columns for the branches followed by the leaf rewards of the
/// convex coverage set. It is immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct RewardTable {
    depth: usize,
    tree: Array2<f64>,
}

impl RewardTable {
    /// Builds the table of the given depth.
    ///
    /// # Errors
    ///
    /// Returns [`FtnError::InvalidConfiguration`] unless `depth` is one of
    /// [`VALID_DEPTHS`].
    pub fn new(depth: usize) -> Result<Self, FtnError> {
        let fruits = match depth {
            5 => leaf_block(&FRUITS_DEPTH_5),
            6 => leaf_block(&FRUITS_DEPTH_6),
            7 => leaf_block(&FRUITS_DEPTH_7),
            _ => return Err(invalid_depth(depth)),
        };

        let branches: usize = 1 << (depth - 1);
        let mut tree = Array2::zeros((REWARD_SIZE, branches + fruits.ncols()));
        tree.slice_mut(s![.., branches..]).assign(&fruits);
        debug!("Built reward table of depth {} ({} columns)", depth, tree.ncols());

        Ok(Self { depth, tree })
    }

    /// Returns the table of the given depth, built at most once per process.
    ///
    /// Every call with the same depth returns the same allocation.
    pub fn shared(depth: usize) -> Result<Arc<Self>, FtnError> {
        let slot = VALID_DEPTHS
            .iter()
            .position(|&d| d == depth)
            .ok_or_else(|| invalid_depth(depth))?;

        if let Some(table) = SHARED_TABLES[slot].get() {
            return Ok(table.clone());
        }
        let table = Arc::new(Self::new(depth)?);
        Ok(SHARED_TABLES[slot].get_or_init(|| table).clone())
    }

    /// Returns the reward of a node.
    ///
    /// Branches yield the all-zero vector, leaves their convex coverage set vector.
    ///
    /// # Errors
    ///
    /// Returns [`FtnError::InvalidState`] if `state` lies outside the tree.
    pub fn reward_at(&self, state: &State) -> Result<Reward, FtnError> {
        if !state.is_within(self.depth) {
            return Err(FtnError::InvalidState {
                row: state.row,
                column: state.column,
                depth: self.depth,
            });
        }

        if state.row < self.depth {
            Ok(Reward::zeros(REWARD_SIZE))
        } else {
            Ok(self.tree.column(tree_index(state)).to_owned())
        }
    }

    /// Depth of the tree.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The number of leaves, `2^depth`.
    pub fn leaves(&self) -> usize {
        1 << self.depth
    }

    /// The leaf rewards, one column per leaf.
    pub fn fruits(&self) -> ArrayView2<f64> {
        let branches: usize = 1 << (self.depth - 1);
        self.tree.slice(s![.., branches..])
    }
}

fn leaf_block<const N: usize>(table: &[[f64; N]; REWARD_SIZE]) -> Array2<f64> {
    Array2::from_shape_fn((REWARD_SIZE, N), |(i, j)| table[i][j])
}

fn invalid_depth(depth: usize) -> FtnError {
    FtnError::InvalidConfiguration {
        depth,
        valid: VALID_DEPTHS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr1;

    #[test]
    fn test_invalid_depth() {
        for depth in [0, 1, 4, 8, 100].iter() {
            assert_eq!(
                RewardTable::new(*depth),
                Err(FtnError::InvalidConfiguration {
                    depth: *depth,
                    valid: [5, 6, 7]
                })
            );
            assert!(RewardTable::shared(*depth).is_err());
        }
    }

    #[test]
    fn test_error_message_names_depth_and_valid_set() {
        let err = RewardTable::new(4).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid depth value: 4 provided. Only depth values of: [5, 6, 7] are allowed"
        );
    }

    #[test]
    fn test_shape() {
        for &depth in VALID_DEPTHS.iter() {
            let table = RewardTable::new(depth).unwrap();
            assert_eq!(table.depth(), depth);
            assert_eq!(table.leaves(), 1 << depth);
            assert_eq!(table.fruits().dim(), (REWARD_SIZE, 1 << depth));
            assert_eq!(table.tree.ncols(), (1 << (depth - 1)) + (1 << depth));
            let branches: usize = 1 << (depth - 1);
            assert!(table.tree.slice(s![.., ..branches]).iter().all(|v| *v == 0.0));
        }
    }

    #[test]
    fn test_branches_yield_zero() {
        for &depth in VALID_DEPTHS.iter() {
            let table = RewardTable::new(depth).unwrap();
            for row in 0..depth {
                for column in 0..(1 << row) {
                    let r = table.reward_at(&State::new(row, column)).unwrap();
                    assert_eq!(r, Reward::zeros(REWARD_SIZE));
                }
            }
        }
    }

    #[test]
    fn test_leaves_yield_literal_vectors() {
        let table = RewardTable::new(5).unwrap();
        for column in 0..32 {
            let r = table.reward_at(&State::new(5, column)).unwrap();
            let expected = (0..REWARD_SIZE)
                .map(|i| FRUITS_DEPTH_5[i][column])
                .collect::<Array1<_>>();
            assert_eq!(r, expected);
        }

        assert_eq!(
            table.reward_at(&State::new(5, 0)).unwrap(),
            arr1(&[3.67917966, 0.38835143, 8.09989551, 2.86026356, 3.24527031, 1.41124976])
        );

        let table = RewardTable::new(6).unwrap();
        assert_eq!(
            table.reward_at(&State::new(6, 63)).unwrap(),
            arr1(&[4.72502594, 5.38532887, 5.40386645, 1.57883722, 0.24912224, 4.11288237])
        );

        let table = RewardTable::new(7).unwrap();
        assert_eq!(
            table.reward_at(&State::new(7, 127)).unwrap(),
            arr1(&[1.68967122, 1.11253309, 3.74425011, 3.12606095, 3.20780397, 7.86292624])
        );
    }

    #[test]
    fn test_out_of_tree_state() {
        let table = RewardTable::new(6).unwrap();
        assert_eq!(
            table.reward_at(&State::new(7, 0)),
            Err(FtnError::InvalidState {
                row: 7,
                column: 0,
                depth: 6
            })
        );
        assert!(table.reward_at(&State::new(6, 64)).is_err());
        assert!(table.reward_at(&State::new(2, 4)).is_err());
    }

    #[test]
    fn test_shared_tables_are_built_once() {
        let a = RewardTable::shared(6).unwrap();
        let b = RewardTable::shared(6).unwrap();
        let c = RewardTable::shared(7).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(*a, RewardTable::new(6).unwrap());
    }
}
