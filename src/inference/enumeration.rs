use log::debug;

use crate::common::errors::Result;
use crate::common::powerset::powerset;
use crate::model::distribution::Distribution;
use crate::model::network::BayesianNetwork;
use crate::model::variable::Event;

use super::problem::InferenceProblem;
use super::Solver;

/// Exact inference by summing the full joint over every completion of the
/// hidden variables.
///
/// For each truth choice of the query variables, every assignment of the
/// hidden variables is visited and the product of all conditional
/// probabilities is accumulated. Cost is
/// `O(2^|query| * 2^|hidden| * |variables|)`, so this solver serves as a
/// reference for small networks.
///
/// The returned distribution is not normalized; its total mass is the
/// probability of the evidence.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumerationSolver;

impl EnumerationSolver {
    pub fn new() -> Self {
        EnumerationSolver
    }
}

/// Probability of one complete assignment: the product over every variable
/// of `P(variable | parents)`.
fn joint_probability(network: &BayesianNetwork, assignment: &Event) -> Result<f64> {
    let mut product = 1.0;
    for variable in network.variables() {
        let value = assignment.contains(variable.name());
        product *= network.probability_of(variable.name(), value, assignment)?;
    }
    Ok(product)
}

impl Solver for EnumerationSolver {
    fn name(&self) -> &'static str {
        "enumeration"
    }

    fn solve(&self, problem: &InferenceProblem) -> Result<Distribution> {
        let network = problem.network();
        let hidden = problem.hidden_variables();
        let observed = problem.evidence_event();
        debug!(
            "enumeration: {} query, {} evidence, {} hidden variables",
            problem.query().len(),
            problem.evidence().len(),
            hidden.len()
        );

        let mut result = Distribution::with_scope(problem.query().to_vec());
        for query_true in powerset(problem.query()) {
            let query_event: Event = query_true.into_iter().collect();
            let partial = query_event.union(&observed);
            let mut mass = 0.0;
            for hidden_true in powerset(&hidden) {
                let hidden_event: Event = hidden_true.into_iter().collect();
                mass += joint_probability(network, &partial.union(&hidden_event))?;
            }
            result.add_entry(query_event, mass);
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::errors::BayesError;

    fn chain() -> BayesianNetwork {
        let mut network = BayesianNetwork::new();
        network.add_variable("A").unwrap();
        network.add_variable("B").unwrap();
        network.add_dependency("A", "B").unwrap();
        network.set_prior_probability("A", 0.3).unwrap();
        network.set_probability("B", &["A"], 0.8).unwrap();
        network.set_probability::<&str>("B", &[], 0.1).unwrap();
        network
    }

    #[test]
    fn test_marginal_of_child() {
        let network = chain();
        let problem = InferenceProblem::from_names(&network, &[], &["B"]).unwrap();
        let result = EnumerationSolver.solve(&problem).unwrap();
        let b_true: Event = ["B"].into_iter().collect();
        assert!((result.probability(&b_true) - 0.31).abs() < 1e-12);
        assert!((result.probability(&Event::new()) - 0.69).abs() < 1e-12);
    }

    #[test]
    fn test_unnormalized_mass_is_evidence_probability() {
        let network = chain();
        let problem = InferenceProblem::from_names(&network, &[("A", true)], &["B"]).unwrap();
        let result = EnumerationSolver.solve(&problem).unwrap();
        assert!((result.total_mass() - 0.3).abs() < 1e-12);
        let posterior = result.normalize().unwrap();
        let b_true: Event = ["B"].into_iter().collect();
        assert!((posterior.probability(&b_true) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_incomplete_table_fails() {
        let mut network = chain();
        network.add_variable("C").unwrap();
        let problem = InferenceProblem::from_names(&network, &[], &["B"]).unwrap();
        let result = EnumerationSolver.solve(&problem);
        assert!(matches!(result, Err(BayesError::IncompleteTable { .. })));
    }
}
