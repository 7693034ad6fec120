pub mod driver;
pub mod elimination;
pub mod enumeration;
pub mod problem;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::common::errors::Result;
use crate::model::distribution::Distribution;

pub use driver::InferenceDriver;
pub use elimination::VariableEliminationSolver;
pub use enumeration::EnumerationSolver;
pub use problem::{Evidence, InferenceProblem, InferenceRequest};

/// An exact inference algorithm.
///
/// A solver is a pure function of its problem: it never mutates the
/// network, keeps no state between calls, and owns every intermediate
/// factor it creates. The returned distribution covers all truth
/// combinations of the query variables but need not be normalized.
pub trait Solver: Send + Sync {
    fn name(&self) -> &'static str;

    fn solve(&self, problem: &InferenceProblem) -> Result<Distribution>;
}

/// Selects one of the built-in solvers.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SolverKind {
    /// Full enumeration of hidden assignments (small networks only)
    Enumeration,

    /// Pruning plus interleaved factor elimination
    #[default]
    VariableElimination,
}

impl SolverKind {
    pub fn solver(&self) -> Box<dyn Solver> {
        match self {
            SolverKind::Enumeration => Box::new(EnumerationSolver),
            SolverKind::VariableElimination => Box::new(VariableEliminationSolver),
        }
    }
}
