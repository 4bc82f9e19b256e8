#![warn(missing_docs)]
//! Fruit Tree Navigation, a deterministic multi-objective benchmark environment.
//!
//! An agent walks down a full binary tree with `Left`/`Right` decisions. The
//! leaves carry 6-dimensional rewards lying on a known convex coverage set;
//! every branch pays the all-zero vector. Supported depths are 5, 6 and 7.
//!
//! ```rust
//! use ftn_env::{Action, FruitTreeNavigation, State};
//!
//! # fn main() -> Result<(), ftn_env::FtnError> {
//! let mut env = FruitTreeNavigation::new(0, 5)?;
//! let mut state = env.initial_sample();
//! let mut reward = None;
//!
//! while !env.is_terminal(&state) {
//!     let (r, next_state) = env.sample(&state, Action::Left)?;
//!     reward = Some(r);
//!     state = next_state;
//! }
//!
//! assert_eq!(state, State::new(5, 0));
//! assert_eq!(reward.unwrap()[0], 3.67917966);
//! # Ok(())
//! # }
//! ```
//!
//! [`FruitTreeNavigation`] also implements [`ftn_core::Env`], so it can be
//! driven by [`ftn_core::DefaultEvaluator`] and [`ftn_core::util::eval_with_recorder`].
mod act;
mod ccs;
mod env;
mod error;
mod reward_table;
mod state;
mod tree_index;
pub use act::Action;
pub use env::{
    FruitTreeNavigation, FruitTreeNavigationConfig, RewardAttribution, TerminationReason,
};
pub use error::FtnError;
pub use reward_table::{Reward, RewardTable, REWARD_SIZE, VALID_DEPTHS};
pub use state::State;
pub use tree_index::tree_index;
