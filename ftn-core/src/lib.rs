#![warn(missing_docs)]
//! Interfaces between multi-objective environments and the loops that drive them.
//!
//! The crate does not know about any concrete environment. It defines how an
//! environment is stepped ([`Env`], [`Step`]), how actions are chosen
//! ([`Policy`]), how episode data is logged ([`record`]) and how a policy is
//! evaluated ([`Evaluator`]).
pub mod error;
pub mod record;
pub mod util;

mod base;
pub use base::{Act, Configurable, Env, Info, Obs, Policy, Step};

mod evaluator;
pub use evaluator::{DefaultEvaluator, Evaluator};

mod persist;
pub use persist::Persist;
