/// Action space advertised to the training loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionSpace {
    Discrete(usize),
}

impl ActionSpace {
    pub fn n(&self) -> usize {
        match self {
            ActionSpace::Discrete(n) => *n,
        }
    }

    pub fn contains(&self, action: usize) -> bool {
        action < self.n()
    }
}

/// Bounded box of `shape` = (rows, columns).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservationSpace {
    pub shape: (usize, usize),
    pub low: f64,
    pub high: f64,
}
