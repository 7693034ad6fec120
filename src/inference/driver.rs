use log::info;
use rayon::prelude::*;

use crate::common::errors::{BayesError, Result};
use crate::common::powerset::powerset;
use crate::model::distribution::Distribution;
use crate::model::network::BayesianNetwork;
use crate::model::variable::{Event, Variable};

use super::problem::{Evidence, InferenceProblem, InferenceRequest};
use super::{Solver, SolverKind};

/// Runs a solver on a network and hands back the normalized posterior.
pub struct InferenceDriver {
    solver: Box<dyn Solver>,
}

impl InferenceDriver {
    pub fn new(kind: SolverKind) -> Self {
        InferenceDriver {
            solver: kind.solver(),
        }
    }

    pub fn with_solver(solver: Box<dyn Solver>) -> Self {
        InferenceDriver { solver }
    }

    pub fn solver_name(&self) -> &'static str {
        self.solver.name()
    }

    /// Posterior over `query` given `evidence`, normalized so that all
    /// `2^|query|` entries sum to one.
    pub fn infer(
        &self,
        network: &BayesianNetwork,
        evidence: &Evidence,
        query: &[Variable],
    ) -> Result<Distribution> {
        let problem = InferenceProblem::new(network, evidence.clone(), query.to_vec())?;
        self.run(&problem)
    }

    pub fn run(&self, problem: &InferenceProblem) -> Result<Distribution> {
        let posterior = self.solver.solve(problem)?.normalize()?;
        info!(
            "{}: posterior over {} query variables given {} observations",
            self.solver.name(),
            problem.query().len(),
            problem.evidence().len()
        );
        Ok(posterior)
    }

    /// Runs independent requests in parallel against one shared network.
    /// Results come back in request order.
    pub fn infer_batch(
        &self,
        network: &BayesianNetwork,
        requests: &[InferenceRequest],
    ) -> Vec<Result<Distribution>> {
        requests
            .par_iter()
            .map(|request| {
                let problem = InferenceProblem::from_request(network, request)?;
                self.run(&problem)
            })
            .collect()
    }
}

/// Largest absolute difference between two posteriors over the same query
/// variables, taken over every truth combination.
pub fn max_difference(left: &Distribution, right: &Distribution) -> Result<f64> {
    let mut scope = left.scope().to_vec();
    scope.sort();
    let mut other = right.scope().to_vec();
    other.sort();
    if scope != other {
        return Err(BayesError::InvalidOperation(
            "posteriors cover different variables".to_string(),
        ));
    }
    Ok(powerset(&scope)
        .map(|subset| {
            let event: Event = subset.into_iter().collect();
            (left.probability(&event) - right.probability(&event)).abs()
        })
        .fold(0.0, f64::max))
}
