//! Action of [`FruitTreeNavigation`](crate::FruitTreeNavigation).
use ftn_core::Act;
use serde::{Deserialize, Serialize};

/// Which child of the current node to move to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move to the left child.
    Left,

    /// Move to the right child.
    Right,
}

impl Action {
    /// The number of actions.
    pub const SIZE: usize = 2;

    /// All actions, indexed by their discriminant.
    pub const ALL: [Action; Self::SIZE] = [Action::Left, Action::Right];

    /// Returns the discriminant, 0 for [`Action::Left`] and 1 for [`Action::Right`].
    pub fn index(&self) -> usize {
        match self {
            Action::Left => 0,
            Action::Right => 1,
        }
    }
}

impl TryFrom<u8> for Action {
    type Error = anyhow::Error;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Action::Left),
            1 => Ok(Action::Right),
            _ => Err(anyhow::anyhow!("Action index out of range: {}", v)),
        }
    }
}

impl Act for Action {
    fn len(&self) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for a in Action::ALL.iter() {
            assert_eq!(Action::try_from(a.index() as u8).unwrap(), *a);
        }
        assert!(Action::try_from(2).is_err());
    }
}
