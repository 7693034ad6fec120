use crate::common::errors::Result;
use crate::model::network::BayesianNetwork;

use super::ScenarioMaker;

/// Cloudy weather drives both the sprinkler and the rain, either of which
/// wets the grass.
pub struct Sprinkler {}

impl ScenarioMaker for Sprinkler {
    fn setup_scenario(&self) -> Result<BayesianNetwork> {
        let mut network = BayesianNetwork::new();
        for name in ["cloudy", "sprinkler", "rain", "wet_grass"] {
            network.add_variable(name)?;
        }
        network.add_dependency("cloudy", "sprinkler")?;
        network.add_dependency("cloudy", "rain")?;
        network.add_dependency("sprinkler", "wet_grass")?;
        network.add_dependency("rain", "wet_grass")?;

        network.set_prior_probability("cloudy", 0.5)?;

        network.set_probability("sprinkler", &["cloudy"], 0.1)?;
        network.set_probability::<&str>("sprinkler", &[], 0.5)?;

        network.set_probability("rain", &["cloudy"], 0.8)?;
        network.set_probability::<&str>("rain", &[], 0.2)?;

        network.set_probability("wet_grass", &["sprinkler", "rain"], 0.99)?;
        network.set_probability("wet_grass", &["sprinkler"], 0.9)?;
        network.set_probability("wet_grass", &["rain"], 0.9)?;
        network.set_probability::<&str>("wet_grass", &[], 0.0)?;
        Ok(network)
    }
}
