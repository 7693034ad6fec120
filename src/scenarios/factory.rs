use crate::common::errors::{BayesError, Result};
use crate::model::network::BayesianNetwork;

use super::{
    alarm::Alarm, chain::Chain, one_var::OneVariable, random::RandomNetwork,
    sprinkler::Sprinkler, ScenarioMaker,
};

pub struct ScenarioMakerFactory;

impl ScenarioMakerFactory {
    pub const NAMES: [&'static str; 5] = ["one_var", "chain", "sprinkler", "alarm", "random"];

    pub fn new_shared(name: &str) -> Result<Box<dyn ScenarioMaker>> {
        match name {
            "one_var" => Ok(Box::new(OneVariable {})),
            "chain" => Ok(Box::new(Chain {})),
            "sprinkler" => Ok(Box::new(Sprinkler {})),
            "alarm" => Ok(Box::new(Alarm {})),
            "random" => Ok(Box::new(RandomNetwork::new(7, 8, 3))),
            _ => Err(BayesError::UnknownScenario(name.to_string())),
        }
    }

    pub fn new_network(name: &str) -> Result<BayesianNetwork> {
        Self::new_shared(name)?.setup_scenario()
    }
}
