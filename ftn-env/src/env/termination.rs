use serde::{Deserialize, Serialize};
use std::fmt;

/// Why an episode ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminationReason {
    /// The step budget was used up. Such episodes are truncated.
    StepLimit,

    /// A leaf of the tree was reached.
    LeafReached,
}

impl TerminationReason {
    /// Returns a short human readable description.
    pub fn as_str(&self) -> &'static str {
        match self {
            TerminationReason::StepLimit => "step limit",
            TerminationReason::LeafReached => "leaf reached",
        }
    }
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
