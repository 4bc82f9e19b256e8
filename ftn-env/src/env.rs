//! The Fruit Tree Navigation environment.
mod config;
mod termination;
use crate::{Action, FtnError, Reward, RewardTable, State, REWARD_SIZE};
use anyhow::{bail, Result};
pub use config::{FruitTreeNavigationConfig, RewardAttribution};
use ftn_core::{
    record::{Record, RecordValue},
    Env, Step,
};
use log::{info, trace};
use std::sync::Arc;
pub use termination::TerminationReason;

/// Fruit Tree Navigation.
///
/// An agent walks from the root of a full binary tree down to a leaf. Every
/// leaf carries a 6-dimensional reward on a convex coverage set, branches carry
/// none. The dynamics are deterministic.
///
/// A transition pays the reward of the node it arrives at by default, so the
/// step reaching a leaf pays that leaf's reward; see [`RewardAttribution`].
///
/// The inherent methods follow a state-passing protocol: the caller owns the
/// current [`State`] and feeds it back to [`sample`](Self::sample). The [`Env`]
/// implementation wraps the same protocol and tracks the current state itself.
#[derive(Debug, Clone)]
pub struct FruitTreeNavigation {
    // Step budget of an episode, 0 for no limit.
    max_steps: usize,

    // Number of `sample` calls since the last `initial_sample`.
    steps_performed: usize,

    reward_attribution: RewardAttribution,

    // Shared with every other environment of the same depth.
    table: Arc<RewardTable>,

    // Current node, only used through `Env`.
    current: State,
}

impl FruitTreeNavigation {
    /// Constructs an environment with the given step budget (0 for no limit)
    /// and tree depth.
    ///
    /// # Errors
    ///
    /// Returns [`FtnError::InvalidConfiguration`] if `depth` is not one of
    /// [`VALID_DEPTHS`](crate::VALID_DEPTHS).
    pub fn new(max_steps: usize, depth: usize) -> Result<Self, FtnError> {
        Ok(Self::with_table(max_steps, RewardTable::shared(depth)?))
    }

    /// Constructs an environment on an already built reward table.
    pub fn with_table(max_steps: usize, table: Arc<RewardTable>) -> Self {
        Self {
            max_steps,
            steps_performed: 0,
            reward_attribution: RewardAttribution::default(),
            table,
            current: State::root(),
        }
    }

    /// Constructs an environment from a configuration.
    pub fn from_config(config: &FruitTreeNavigationConfig) -> Result<Self, FtnError> {
        Ok(Self::new(config.max_steps, config.depth)?
            .with_reward_attribution(config.reward_attribution))
    }

    /// Sets the node whose reward is paid for a transition.
    pub fn with_reward_attribution(mut self, v: RewardAttribution) -> Self {
        self.reward_attribution = v;
        self
    }

    /// Starts an episode: resets the step counter and returns the root.
    pub fn initial_sample(&mut self) -> State {
        self.steps_performed = 0;
        State::root()
    }

    /// Moves from `state` to one of its children.
    ///
    /// Returns the reward of the transition and the next state. The reward is
    /// the all-zero vector if the step budget is used up with this transition.
    /// Otherwise it is the reward of the arrived node, or of the departed node
    /// with [`RewardAttribution::Departed`].
    ///
    /// Leaves are accepted. Leaving one lands below the tree, on a node whose
    /// own reward is the all-zero vector.
    ///
    /// # Errors
    ///
    /// Returns [`FtnError::InvalidState`] if `state` is outside the tree. The
    /// step counter is left untouched in that case.
    pub fn sample(&mut self, state: &State, action: Action) -> Result<(Reward, State), FtnError> {
        let depth = self.table.depth();
        if !state.is_within(depth) {
            return Err(FtnError::InvalidState {
                row: state.row,
                column: state.column,
                depth,
            });
        }

        self.steps_performed += 1;
        let next_state = child(state, action);
        trace!("{:?} --{:?}--> {:?}", state, action, next_state);

        let reward = match self.termination(&next_state) {
            Some(TerminationReason::StepLimit) => Reward::zeros(REWARD_SIZE),
            _ => match self.reward_attribution {
                RewardAttribution::Departed => self.table.reward_at(state)?,
                RewardAttribution::Arrived if next_state.row > depth => Reward::zeros(REWARD_SIZE),
                RewardAttribution::Arrived => self.table.reward_at(&next_state)?,
            },
        };

        Ok((reward, next_state))
    }

    /// Same as [`sample`](Self::sample), discarding the next state.
    pub fn sample_reward(&mut self, state: &State, action: Action) -> Result<Reward, FtnError> {
        self.sample(state, action).map(|(reward, _)| reward)
    }

    /// Returns `true` if the episode is over at `state`.
    pub fn is_terminal(&self, state: &State) -> bool {
        self.termination(state).is_some()
    }

    /// Returns why the episode is over at `state`, if it is.
    ///
    /// An exhausted step budget takes precedence over reaching a leaf.
    pub fn termination(&self, state: &State) -> Option<TerminationReason> {
        if self.max_steps != 0 && self.steps_performed >= self.max_steps {
            Some(TerminationReason::StepLimit)
        } else if state.row >= self.table.depth() {
            Some(TerminationReason::LeafReached)
        } else {
            None
        }
    }

    /// The number of steps performed in the current episode.
    pub fn steps_performed(&self) -> usize {
        self.steps_performed
    }

    /// The step budget of an episode, 0 for no limit.
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Changes the step budget. The step counter is not affected.
    pub fn set_max_steps(&mut self, v: usize) {
        self.max_steps = v;
    }

    /// Depth of the tree.
    pub fn depth(&self) -> usize {
        self.table.depth()
    }

    /// The reward table.
    pub fn reward_table(&self) -> &Arc<RewardTable> {
        &self.table
    }
}

fn child(state: &State, action: Action) -> State {
    match action {
        Action::Left => State::new(state.row + 1, state.column),
        Action::Right => State::new(state.row + 1, state.column + 1),
    }
}

impl Env for FruitTreeNavigation {
    type Config = FruitTreeNavigationConfig;
    type Obs = State;
    type Act = Action;
    type Info = ();

    /// The dynamics are deterministic, so `seed` is ignored.
    fn build(config: &Self::Config, _seed: i64) -> Result<Self> {
        Ok(Self::from_config(config)?)
    }

    /// Episodes end on the step that reaches a leaf, so with
    /// [`RewardAttribution::Departed`] no step of an episode pays a leaf reward.
    ///
    /// Fails once the episode is over; call [`Env::reset`] first.
    fn step(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)> {
        let state = self.current;
        if let Some(reason) = self.termination(&state) {
            bail!("Episode is over at {:?} ({}), reset before stepping", state, reason);
        }
        let (reward, next_state) = self.sample(&state, *a)?;
        self.current = next_state;

        let mut record = Record::from_slice(&[
            ("row", RecordValue::Scalar(next_state.row as f32)),
            ("column", RecordValue::Scalar(next_state.column as f32)),
            ("steps", RecordValue::Scalar(self.steps_performed as f32)),
        ]);

        let reason = self.termination(&next_state);
        if let Some(reason) = reason {
            info!(
                "Episode terminated after {} steps: {}",
                self.steps_performed, reason
            );
            record.insert("termination", RecordValue::String(reason.to_string()));
        }

        let step = Step::new(
            next_state,
            *a,
            reward.to_vec(),
            reason == Some(TerminationReason::LeafReached),
            reason == Some(TerminationReason::StepLimit),
            (),
        );
        Ok((step, record))
    }

    fn reset(&mut self) -> Result<State> {
        self.current = self.initial_sample();
        Ok(self.current)
    }

    fn reset_with_index(&mut self, _ix: usize) -> Result<State> {
        self.reset()
    }
}
