use std::collections::{HashMap, HashSet};

use log::{debug, trace};

use crate::common::errors::{BayesError, Result};
use crate::common::powerset::powerset;
use crate::model::distribution::Distribution;
use crate::model::factor::{sum_out, Factor};
use crate::model::variable::{Event, Variable};

use super::problem::InferenceProblem;
use super::Solver;

/// Exact inference by variable elimination.
///
/// Barren variables are pruned first, then the remaining variables are
/// visited children before parents. Each variable's table becomes a factor
/// over its unobserved parents, and hidden variables are summed out as soon
/// as their factor is built, which keeps intermediate scopes small. The
/// product of what remains is the joint mass of each query assignment with
/// the evidence. It is left unnormalized, so its total is `P(evidence)`.
///
/// Pruning only removes sinks that are neither queried nor observed,
/// repeatedly. It does not remove every d-separated variable.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariableEliminationSolver;

impl VariableEliminationSolver {
    pub fn new() -> Self {
        VariableEliminationSolver
    }
}

/// Mutable copy of the dependency structure used for pruning and ordering.
struct WorkingGraph {
    remaining: Vec<Variable>,
    children: HashMap<Variable, HashSet<Variable>>,
    parents: HashMap<Variable, Vec<Variable>>,
}

impl WorkingGraph {
    fn new(problem: &InferenceProblem) -> Result<Self> {
        let network = problem.network();
        let mut children = HashMap::new();
        let mut parents = HashMap::new();
        for variable in network.variables() {
            let child_set: HashSet<Variable> =
                network.children(variable.name())?.iter().cloned().collect();
            children.insert(variable.clone(), child_set);
            parents.insert(variable.clone(), network.parents(variable.name())?.to_vec());
        }
        Ok(WorkingGraph {
            remaining: network.variables().to_vec(),
            children,
            parents,
        })
    }

    /// Remaining variables without remaining children, in declaration order.
    fn sinks(&self) -> Vec<Variable> {
        self.remaining
            .iter()
            .filter(|variable| {
                self.children
                    .get(*variable)
                    .is_none_or(|children| children.is_empty())
            })
            .cloned()
            .collect()
    }

    fn remove(&mut self, variable: &Variable) {
        self.remaining.retain(|v| v != variable);
        self.children.remove(variable);
        if let Some(parents) = self.parents.remove(variable) {
            for parent in parents {
                if let Some(children) = self.children.get_mut(&parent) {
                    children.remove(variable);
                }
            }
        }
    }

    fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }
}

/// Removes sinks that are neither queried nor observed until none are left.
fn prune(graph: &mut WorkingGraph, problem: &InferenceProblem) -> Vec<Variable> {
    let mut pruned = Vec::new();
    loop {
        let barren: Vec<Variable> = graph
            .sinks()
            .into_iter()
            .filter(|v| !problem.is_query(v) && !problem.is_evidence(v))
            .collect();
        if barren.is_empty() {
            return pruned;
        }
        for variable in barren {
            graph.remove(&variable);
            pruned.push(variable);
        }
    }
}

/// Peels off all current sinks round by round, yielding children before
/// their parents.
fn peel_sinks(graph: &mut WorkingGraph) -> Result<Vec<Variable>> {
    let mut order = Vec::new();
    while !graph.is_empty() {
        let sinks = graph.sinks();
        if sinks.is_empty() {
            let names: Vec<String> = graph.remaining.iter().map(|v| v.to_string()).collect();
            return Err(BayesError::InvalidOperation(format!(
                "dependency cycle among {}",
                names.join(", ")
            )));
        }
        for variable in sinks {
            graph.remove(&variable);
            order.push(variable);
        }
    }
    Ok(order)
}

/// The variables that survive pruning, in the order they are eliminated.
pub fn elimination_order(problem: &InferenceProblem) -> Result<Vec<Variable>> {
    let mut graph = WorkingGraph::new(problem)?;
    let pruned = prune(&mut graph, problem);
    let order = peel_sinks(&mut graph)?;
    debug!(
        "variable elimination: pruned {:?}, order {:?}",
        pruned.iter().map(Variable::name).collect::<Vec<_>>(),
        order.iter().map(Variable::name).collect::<Vec<_>>()
    );
    Ok(order)
}

/// Factor for one variable's table with the evidence plugged in.
///
/// The scope is the variable's unobserved parents plus the variable itself
/// unless it is observed, in which case only the entries consistent with
/// the observation are kept and the variable drops out of the scope.
fn build_factor(problem: &InferenceProblem, variable: &Variable) -> Result<Factor> {
    let network = problem.network();
    let free_parents: Vec<Variable> = network
        .parents(variable.name())?
        .iter()
        .filter(|parent| !problem.is_evidence(parent))
        .cloned()
        .collect();
    let observed = problem.evidence_event();
    let observation = problem.evidence().get(variable).copied();

    let mut scope = free_parents.clone();
    if observation.is_none() {
        scope.push(variable.clone());
    }
    let mut factor = Factor::with_scope(scope);

    for parents_true in powerset(&free_parents) {
        let event: Event = parents_true.into_iter().collect();
        let p = network.conditional_probability(variable.name(), &event.union(&observed))?;
        match observation {
            Some(true) => factor.add_entry(event, p),
            Some(false) => factor.add_entry(event, 1.0 - p),
            None => {
                factor.add_entry(event.with(variable, true), p);
                factor.add_entry(event, 1.0 - p);
            }
        }
    }
    trace!(
        "factor for {} over {} variables",
        variable,
        factor.scope().len()
    );
    Ok(factor)
}

impl Solver for VariableEliminationSolver {
    fn name(&self) -> &'static str {
        "variable-elimination"
    }

    fn solve(&self, problem: &InferenceProblem) -> Result<Distribution> {
        let order = elimination_order(problem)?;

        let mut factors: Vec<Factor> = Vec::new();
        for variable in &order {
            factors.push(build_factor(problem, variable)?);
            if !problem.is_query(variable) && !problem.is_evidence(variable) {
                factors = sum_out(variable, factors)?;
            }
        }
        debug!("variable elimination: multiplying {} remaining factors", factors.len());

        let product = factors
            .iter()
            .fold(Distribution::unit(), |acc, factor| acc.multiply(factor));

        let mut posterior = Distribution::with_scope(problem.query().to_vec());
        for query_true in powerset(problem.query()) {
            let event: Event = query_true.into_iter().collect();
            let mass = product.probability(&event);
            posterior.add_entry(event, mass);
        }
        Ok(posterior)
    }
}
