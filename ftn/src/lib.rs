//! Policies and an episode runner for [`ftn_env::FruitTreeNavigation`].
//!
//! The `ftn-rollout` binary of this crate runs episodes with one of the
//! policies below and dumps the per-step records as CSV.
mod policy;
mod rollout;
pub use policy::{PathPolicy, PathPolicyConfig, RandomPolicy, RandomPolicyConfig};
pub use rollout::{mean_return, write_csv, StepRow};
