//! Policies that do not learn.
use ftn_core::{Configurable, Persist, Policy};
use ftn_env::{Action, FruitTreeNavigation, State};
use serde::{Deserialize, Serialize};

/// Configuration of [`RandomPolicy`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RandomPolicyConfig {
    /// Seed of the random number generator.
    pub seed: u64,
}

impl Persist for RandomPolicyConfig {}

/// Picks `Left` or `Right` uniformly at random.
pub struct RandomPolicy {
    rng: fastrand::Rng,
}

impl Configurable<FruitTreeNavigation> for RandomPolicy {
    type Config = RandomPolicyConfig;

    fn build(config: Self::Config) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(config.seed),
        }
    }
}

impl Policy<FruitTreeNavigation> for RandomPolicy {
    fn sample(&mut self, _obs: &State) -> Action {
        if self.rng.bool() {
            Action::Right
        } else {
            Action::Left
        }
    }
}

/// Configuration of [`PathPolicy`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPolicyConfig {
    /// Actions taken from the root, in order.
    pub actions: Vec<Action>,
}

impl Persist for PathPolicyConfig {}

/// Replays a fixed path from the root.
///
/// The path restarts whenever the policy observes the root. Once the path is
/// used up the last action is repeated; an empty path always goes left.
pub struct PathPolicy {
    actions: Vec<Action>,
    cursor: usize,
}

impl Configurable<FruitTreeNavigation> for PathPolicy {
    type Config = PathPolicyConfig;

    fn build(config: Self::Config) -> Self {
        Self {
            actions: config.actions,
            cursor: 0,
        }
    }
}

impl Policy<FruitTreeNavigation> for PathPolicy {
    fn sample(&mut self, obs: &State) -> Action {
        if *obs == State::root() {
            self.cursor = 0;
        }
        let a = match self.actions.get(self.cursor) {
            Some(a) => *a,
            None => self.actions.last().copied().unwrap_or(Action::Left),
        };
        self.cursor += 1;
        a
    }
}
