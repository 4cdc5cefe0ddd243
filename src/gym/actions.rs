use serde::{Deserialize, Serialize};

use crate::gym::base::Action;

/// The five discrete actions of the environment, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, enum_map::Enum)]
pub enum Actions {
    Neutral,
    LongEnter,
    LongExit,
    ShortEnter,
    ShortExit,
}

impl Actions {
    pub const COUNT: usize = 5;

    pub fn is_enter(&self) -> bool {
        matches!(self, Actions::LongEnter | Actions::ShortEnter)
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Actions::LongExit | Actions::ShortExit)
    }
}

impl Action for Actions {
    fn enumerate() -> Vec<Self> {
        vec![
            Actions::Neutral,
            Actions::LongEnter,
            Actions::LongExit,
            Actions::ShortEnter,
            Actions::ShortExit,
        ]
    }

    fn size() -> usize {
        Self::COUNT
    }
}

impl TryFrom<usize> for Actions {
    type Error = usize;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Actions::Neutral),
            1 => Ok(Actions::LongEnter),
            2 => Ok(Actions::LongExit),
            3 => Ok(Actions::ShortEnter),
            4 => Ok(Actions::ShortExit),
            other => Err(other),
        }
    }
}

impl From<Actions> for usize {
    fn from(action: Actions) -> Self {
        match action {
            Actions::Neutral => 0,
            Actions::LongEnter => 1,
            Actions::LongExit => 2,
            Actions::ShortEnter => 3,
            Actions::ShortExit => 4,
        }
    }
}
