use rand::{rngs::StdRng, SeedableRng};

use crate::gym::base::Action;

/// Baseline policy that samples uniformly from the action space.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn act<A: Action>(&mut self) -> usize {
        A::random(&mut self.rng).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gym::Actions;

    #[test]
    fn same_seed_same_actions() {
        let mut a = RandomAgent::new(3);
        let mut b = RandomAgent::new(3);

        let left: Vec<usize> = (0..32).map(|_| a.act::<Actions>()).collect();
        let right: Vec<usize> = (0..32).map(|_| b.act::<Actions>()).collect();

        assert_eq!(left, right);
        assert!(left.iter().all(|id| *id < Actions::COUNT));
    }
}
