//! Core functionalities.
mod env;
mod policy;
mod step;
pub use env::Env;
pub use policy::{Configurable, Policy};
use std::fmt::Debug;
pub use step::{Info, Step};

/// An observation of an environment.
///
/// Vectorized environments are not supported, so an observation describes
/// exactly one environment state.
pub trait Obs: Clone + Debug {
    /// Returns the number of scalar components of the observation.
    fn len(&self) -> usize;

    /// Returns `true` if the observation has no component.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An action applied to an environment.
pub trait Act: Clone + Debug {
    /// Returns the number of scalar components of the action.
    fn len(&self) -> usize;

    /// Returns `true` if the action has no component.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
