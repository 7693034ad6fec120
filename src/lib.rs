pub mod common;
pub mod inference;
pub mod model;
pub mod scenarios;

pub use common::errors::{BayesError, Result};
pub use inference::{
    EnumerationSolver, Evidence, InferenceDriver, InferenceProblem, InferenceRequest, Solver,
    SolverKind, VariableEliminationSolver,
};
pub use model::{BayesianNetwork, Distribution, Event, Factor, Variable};
