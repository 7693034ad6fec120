pub mod errors;
pub mod logging;
pub mod powerset;
pub mod setup;

pub use errors::{BayesError, Result};
pub use powerset::{powerset, Powerset};
