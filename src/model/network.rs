use std::collections::HashMap;

use log::debug;

use crate::common::errors::{BayesError, Result};
use crate::common::powerset::powerset;

use super::distribution::Distribution;
use super::variable::{Event, Variable};

/// A DAG of boolean variables with one conditional probability table per
/// variable.
///
/// Each table maps "which parents are true" to `P(variable = true)`. The
/// network is built incrementally and is read-only while inference runs, so
/// a shared reference can serve any number of concurrent solvers.
///
/// Acyclicity is the caller's responsibility. Table completeness is only
/// checked by [`BayesianNetwork::validate`].
#[derive(Clone, Debug, Default)]
pub struct BayesianNetwork {
    variables: Vec<Variable>,
    parents: HashMap<Variable, Vec<Variable>>,
    children: HashMap<Variable, Vec<Variable>>,
    tables: HashMap<Variable, Distribution>,
}

impl BayesianNetwork {
    pub fn new() -> Self {
        BayesianNetwork::default()
    }

    pub fn add_variable(&mut self, name: &str) -> Result<()> {
        if self.contains(name) {
            return Err(BayesError::DuplicateVariable(name.to_string()));
        }
        let variable = Variable::from(name);
        self.parents.insert(variable.clone(), Vec::new());
        self.children.insert(variable.clone(), Vec::new());
        self.tables.insert(variable.clone(), Distribution::new());
        self.variables.push(variable);
        Ok(())
    }

    /// Adds the edge `parent -> child`. Adding an existing edge again has no
    /// effect.
    pub fn add_dependency(&mut self, parent: &str, child: &str) -> Result<()> {
        let parent = self.lookup(parent)?.clone();
        let child = self.lookup(child)?.clone();

        let parents = self
            .parents
            .get_mut(&child)
            .ok_or_else(|| BayesError::UnknownVariable(child.to_string()))?;
        if parents.contains(&parent) {
            return Ok(());
        }
        parents.push(parent.clone());
        self.children
            .get_mut(&parent)
            .ok_or_else(|| BayesError::UnknownVariable(parent.to_string()))?
            .push(child);
        Ok(())
    }

    /// Sets `P(variable = true | exactly true_parents are true)`.
    ///
    /// The probability range is not checked here; `validate` reports values
    /// outside `[0, 1]`.
    pub fn set_probability<S: AsRef<str>>(
        &mut self,
        variable: &str,
        true_parents: &[S],
        probability: f64,
    ) -> Result<()> {
        let variable = self.lookup(variable)?.clone();
        let parents = self.parents(variable.name())?;
        let mut event = Event::new();
        for parent in true_parents {
            let parent = self.lookup(parent.as_ref())?.name();
            if !parents.iter().any(|p| p.name() == parent) {
                return Err(BayesError::NotAParent {
                    variable: variable.to_string(),
                    parent: parent.to_string(),
                });
            }
            event.insert(parent);
        }
        self.tables
            .get_mut(&variable)
            .ok_or_else(|| BayesError::UnknownVariable(variable.to_string()))?
            .add_entry(event, probability);
        Ok(())
    }

    /// Sets the prior of a variable without parents.
    pub fn set_prior_probability(&mut self, variable: &str, probability: f64) -> Result<()> {
        if !self.parents(variable)?.is_empty() {
            return Err(BayesError::InvalidOperation(format!(
                "'{}' has parents, a prior probability does not apply",
                variable
            )));
        }
        self.set_probability::<&str>(variable, &[], probability)
    }

    /// Checks that every table has one entry per subset of its variable's
    /// parents and that each entry lies in `[0, 1]`.
    ///
    /// Cost is the sum over variables of `2^|parents|`.
    pub fn validate(&self) -> Result<()> {
        for variable in &self.variables {
            let parents = self.parents(variable.name())?;
            let table = self.table(variable.name())?;
            for subset in powerset(parents) {
                let event: Event = subset.into_iter().collect();
                match table.get(&event) {
                    None => {
                        return Err(BayesError::IncompleteTable {
                            variable: variable.to_string(),
                            event: event.to_string(),
                        });
                    }
                    Some(p) if !(0.0..=1.0).contains(&p) => {
                        return Err(BayesError::InvalidProbability {
                            variable: variable.to_string(),
                            event: event.to_string(),
                            probability: p,
                        });
                    }
                    Some(_) => {}
                }
            }
        }
        debug!("network of {} variables is valid", self.variables.len());
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// `P(variable = true | parents)`, reading the parents' values from
    /// `event`. Variables of `event` that are not parents are ignored.
    pub fn conditional_probability(&self, variable: &str, event: &Event) -> Result<f64> {
        let parents = self.parents(variable)?;
        let key = event.restrict(parents);
        self.table(variable)?
            .get(&key)
            .ok_or_else(|| BayesError::IncompleteTable {
                variable: variable.to_string(),
                event: key.to_string(),
            })
    }

    /// `P(variable = value | parents)`.
    pub fn probability_of(&self, variable: &str, value: bool, event: &Event) -> Result<f64> {
        let p = self.conditional_probability(variable, event)?;
        Ok(if value { p } else { 1.0 - p })
    }

    pub fn parents(&self, variable: &str) -> Result<&[Variable]> {
        self.parents
            .get(variable)
            .map(Vec::as_slice)
            .ok_or_else(|| BayesError::UnknownVariable(variable.to_string()))
    }

    pub fn children(&self, variable: &str) -> Result<&[Variable]> {
        self.children
            .get(variable)
            .map(Vec::as_slice)
            .ok_or_else(|| BayesError::UnknownVariable(variable.to_string()))
    }

    pub fn table(&self, variable: &str) -> Result<&Distribution> {
        self.tables
            .get(variable)
            .ok_or_else(|| BayesError::UnknownVariable(variable.to_string()))
    }

    /// Variables in declaration order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn contains(&self, variable: &str) -> bool {
        self.parents.contains_key(variable)
    }

    pub fn lookup(&self, variable: &str) -> Result<&Variable> {
        self.variables
            .iter()
            .find(|v| v.name() == variable)
            .ok_or_else(|| BayesError::UnknownVariable(variable.to_string()))
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
