use crate::common::errors::Result;
use crate::model::network::BayesianNetwork;

use super::ScenarioMaker;

/// A single root variable `exciting` that is true with probability 0.3.
pub struct OneVariable {}

impl ScenarioMaker for OneVariable {
    fn setup_scenario(&self) -> Result<BayesianNetwork> {
        let mut network = BayesianNetwork::new();
        network.add_variable("exciting")?;
        network.set_prior_probability("exciting", 0.3)?;
        Ok(network)
    }
}
