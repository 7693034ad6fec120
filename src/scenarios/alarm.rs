use crate::common::errors::Result;
use crate::model::network::BayesianNetwork;

use super::ScenarioMaker;

/// Burglary and earthquake both set off an alarm that two neighbours may
/// report.
pub struct Alarm {}

impl ScenarioMaker for Alarm {
    fn setup_scenario(&self) -> Result<BayesianNetwork> {
        let mut network = BayesianNetwork::new();
        for name in ["burglary", "earthquake", "alarm", "john_calls", "mary_calls"] {
            network.add_variable(name)?;
        }
        network.add_dependency("burglary", "alarm")?;
        network.add_dependency("earthquake", "alarm")?;
        network.add_dependency("alarm", "john_calls")?;
        network.add_dependency("alarm", "mary_calls")?;

        network.set_prior_probability("burglary", 0.001)?;
        network.set_prior_probability("earthquake", 0.002)?;

        network.set_probability("alarm", &["burglary", "earthquake"], 0.95)?;
        network.set_probability("alarm", &["burglary"], 0.94)?;
        network.set_probability("alarm", &["earthquake"], 0.29)?;
        network.set_probability::<&str>("alarm", &[], 0.001)?;

        network.set_probability("john_calls", &["alarm"], 0.90)?;
        network.set_probability::<&str>("john_calls", &[], 0.05)?;
        network.set_probability("mary_calls", &["alarm"], 0.70)?;
        network.set_probability::<&str>("mary_calls", &[], 0.01)?;
        Ok(network)
    }
}
