pub mod alarm;
pub mod chain;
pub mod factory;
pub mod one_var;
pub mod random;
pub mod sprinkler;

use crate::common::errors::Result;
use crate::model::network::BayesianNetwork;

/// Builds one of the reference networks.
pub trait ScenarioMaker: Send + Sync {
    fn setup_scenario(&self) -> Result<BayesianNetwork>;
}

pub use factory::ScenarioMakerFactory;
