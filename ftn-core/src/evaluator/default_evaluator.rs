//! Default implementation of the [`Evaluator`] trait.
//!
//! This module provides a simple evaluator that runs a fixed number of episodes
//! and calculates the average return of every objective across all episodes.
use super::Evaluator;
use crate::{
    record::{Record, RecordValue},
    util::accumulate,
    Env, Policy,
};
use anyhow::Result;
use log::debug;

/// A default implementation of the [`Evaluator`] trait.
///
/// Rewards are vectors, so the return of an episode is the element-wise sum of
/// its step rewards. The evaluator reports
///
/// * `"Episode return"` - the mean return vector across episodes,
/// * `"Episode length"` - the mean number of steps per episode.
pub struct DefaultEvaluator<E: Env> {
    /// The number of episodes to run during evaluation.
    n_episodes: usize,

    /// The environment instance used for evaluation.
    env: E,
}

impl<E: Env> Evaluator<E> for DefaultEvaluator<E> {
    /// Evaluates a policy by running `n_episodes` episodes.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment fails to reset or to step.
    fn evaluate<P>(&mut self, policy: &mut P) -> Result<Record>
    where
        P: Policy<E>,
    {
        let mut r_total: Vec<f64> = Vec::new();
        let mut n_steps = 0usize;

        for ix in 0..self.n_episodes {
            let mut prev_obs = self.env.reset_with_index(ix)?;

            loop {
                let act = policy.sample(&prev_obs);
                let (step, _) = self.env.step(&act)?;
                n_steps += 1;
                accumulate(&mut r_total, &step.reward);
                if step.is_done() {
                    break;
                }
                prev_obs = step.obs;
            }
            debug!("Evaluation episode {} finished", ix);
        }

        let n = self.n_episodes.max(1) as f64;
        let mean_return = r_total.iter().map(|r| (r / n) as f32).collect();
        let mut record = Record::empty();
        record.insert("Episode return", RecordValue::Array1(mean_return));
        record.insert("Episode length", RecordValue::Scalar((n_steps as f64 / n) as f32));
        Ok(record)
    }
}

impl<E: Env> DefaultEvaluator<E> {
    /// Constructs a new [`DefaultEvaluator`].
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the environment
    /// * `seed` - Random seed for environment initialization
    /// * `n_episodes` - Number of episodes to run during evaluation
    pub fn new(config: &E::Config, seed: i64, n_episodes: usize) -> Result<Self> {
        Ok(Self {
            n_episodes,
            env: E::build(config, seed)?,
        })
    }
}
