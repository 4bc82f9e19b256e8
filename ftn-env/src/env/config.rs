//! Configuration of [`FruitTreeNavigation`](super::FruitTreeNavigation).
use ftn_core::Persist;
use serde::{Deserialize, Serialize};

/// The node whose reward is paid for a transition.
///
/// Rewards live on nodes. With `Arrived` the step reaching a leaf pays the
/// leaf. With `Departed` a leaf pays when the caller samples from it, unless
/// that step exhausts the step budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardAttribution {
    /// The node the transition leaves.
    Departed,

    /// The node the transition lands on.
    Arrived,
}

impl Default for RewardAttribution {
    fn default() -> Self {
        Self::Arrived
    }
}

/// Configurations of [`FruitTreeNavigation`](super::FruitTreeNavigation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FruitTreeNavigationConfig {
    /// The number of steps after which an episode is truncated, 0 for no limit.
    pub max_steps: usize,

    /// Depth of the tree, one of [`VALID_DEPTHS`](crate::VALID_DEPTHS).
    pub depth: usize,

    /// The node whose reward is paid for a transition.
    pub reward_attribution: RewardAttribution,
}

impl Default for FruitTreeNavigationConfig {
    fn default() -> Self {
        Self {
            max_steps: 500,
            depth: 6,
            reward_attribution: RewardAttribution::Arrived,
        }
    }
}

impl FruitTreeNavigationConfig {
    /// Sets the step budget of an episode.
    pub fn max_steps(mut self, v: usize) -> Self {
        self.max_steps = v;
        self
    }

    /// Sets the depth of the tree.
    pub fn depth(mut self, v: usize) -> Self {
        self.depth = v;
        self
    }

    /// Sets the node whose reward is paid for a transition.
    pub fn reward_attribution(mut self, v: RewardAttribution) -> Self {
        self.reward_attribution = v;
        self
    }
}

impl Persist for FruitTreeNavigationConfig {}
