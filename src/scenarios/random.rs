use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::common::errors::Result;
use crate::common::powerset::powerset;
use crate::model::network::BayesianNetwork;

use super::ScenarioMaker;

/// Seeded random DAG over `x0 .. x{size-1}`.
///
/// Edges only point from lower to higher indices, so the graph is acyclic.
/// Each variable draws up to `max_parents` parents and a complete table of
/// uniform probabilities. The same seed always yields the same network.
pub struct RandomNetwork {
    pub seed: u64,
    pub size: usize,
    pub max_parents: usize,
}

impl RandomNetwork {
    pub fn new(seed: u64, size: usize, max_parents: usize) -> Self {
        RandomNetwork {
            seed,
            size,
            max_parents,
        }
    }
}

impl ScenarioMaker for RandomNetwork {
    fn setup_scenario(&self) -> Result<BayesianNetwork> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut network = BayesianNetwork::new();
        let names: Vec<String> = (0..self.size).map(|i| format!("x{}", i)).collect();

        for (index, name) in names.iter().enumerate() {
            network.add_variable(name)?;
            let limit = self.max_parents.min(index);
            let count = if limit == 0 { 0 } else { rng.gen_range(0..=limit) };
            let parents: Vec<String> = names[..index]
                .choose_multiple(&mut rng, count)
                .cloned()
                .collect();
            for parent in &parents {
                network.add_dependency(parent, name)?;
            }
            for subset in powerset(&parents) {
                network.set_probability(name, subset.as_slice(), rng.r#gen::<f64>())?;
            }
        }
        Ok(network)
    }
}
