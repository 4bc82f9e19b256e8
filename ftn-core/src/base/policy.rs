//! Policy.
use super::Env;
use crate::Persist;
use anyhow::Result;
use std::path::Path;

/// A policy on an environment.
///
/// Maps an observation to an action. Rewards are vectors with one component
/// per objective, so a policy encodes one trade-off between objectives; it
/// never sees the reward itself.
pub trait Policy<E: Env> {
    /// Sample an action given an observation.
    fn sample(&mut self, obs: &E::Obs) -> E::Act;
}

/// An object built from a persistable configuration.
pub trait Configurable<E: Env> {
    /// Configuration.
    type Config: Persist + Clone;

    /// Builds the object.
    fn build(config: Self::Config) -> Self;

    /// Builds the object from the YAML configuration at `path`.
    ///
    /// See [`Persist::load`].
    fn build_from_path(path: impl AsRef<Path>) -> Result<Self>
    where
        Self: Sized,
    {
        Ok(Self::build(Self::Config::load(path)?))
    }
}
