use crate::common::errors::Result;
use crate::model::network::BayesianNetwork;

use super::ScenarioMaker;

/// `A -> B` with `P(A) = 0.3`, `P(B | A) = 0.8` and `P(B | !A) = 0.1`.
pub struct Chain {}

impl ScenarioMaker for Chain {
    fn setup_scenario(&self) -> Result<BayesianNetwork> {
        let mut network = BayesianNetwork::new();
        network.add_variable("A")?;
        network.add_variable("B")?;
        network.add_dependency("A", "B")?;
        network.set_prior_probability("A", 0.3)?;
        network.set_probability("B", &["A"], 0.8)?;
        network.set_probability::<&str>("B", &[], 0.1)?;
        Ok(network)
    }
}
