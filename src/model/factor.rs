use log::trace;

use crate::common::errors::{BayesError, Result};
use crate::common::powerset::powerset;

use super::distribution::Distribution;
use super::variable::{Event, Variable};

/// A distribution scoped to an explicit variable subset, used as an
/// intermediate table during elimination. Factors are built per inference
/// call and dropped with it.
pub type Factor = Distribution;

impl Distribution {
    /// Pointwise product over the union of both scopes.
    ///
    /// Every assignment to the shared variables is crossed with every
    /// assignment to the variables only one side mentions; the joint mass is
    /// the product of each operand's mass for its own restriction. Cost is
    /// `2^|union scope|` regardless of how many entries either side holds.
    pub fn multiply(&self, other: &Distribution) -> Distribution {
        let shared: Vec<Variable> = self
            .scope()
            .iter()
            .filter(|variable| other.scope().contains(variable))
            .cloned()
            .collect();
        let exclusive: Vec<Variable> = self
            .scope()
            .iter()
            .chain(other.scope().iter())
            .filter(|variable| !shared.contains(variable))
            .cloned()
            .collect();

        let mut scope = self.scope().to_vec();
        scope.extend(
            other
                .scope()
                .iter()
                .filter(|variable| !self.scope().contains(variable))
                .cloned(),
        );
        let mut product = Distribution::with_scope(scope);

        for shared_true in powerset(&shared) {
            let shared_event: Event = shared_true.into_iter().collect();
            for exclusive_true in powerset(&exclusive) {
                let exclusive_event: Event = exclusive_true.into_iter().collect();
                let joint = shared_event.union(&exclusive_event);
                let mass = self.probability(&joint.restrict(self.scope()))
                    * other.probability(&joint.restrict(other.scope()));
                product.add_entry(joint, mass);
            }
        }
        trace!(
            "multiply: {} x {} variables -> {} entries",
            self.scope().len(),
            other.scope().len(),
            product.len()
        );
        product
    }

    /// Sums `variable` out of this table, keeping every other variable.
    pub fn marginalize(&self, variable: &Variable) -> Distribution {
        let remaining: Vec<Variable> = self
            .scope()
            .iter()
            .filter(|v| *v != variable)
            .cloned()
            .collect();
        let mut result = Distribution::with_scope(remaining.clone());
        for subset in powerset(&remaining) {
            let event: Event = subset.into_iter().collect();
            let mass = self.probability(&event) + self.probability(&event.with(variable, true));
            result.add_entry(event, mass);
        }
        result
    }
}

/// Eliminates `variable` from a set of factors.
///
/// The factors that mention `variable` are multiplied together and the
/// variable is summed out of their product; the others pass through
/// untouched. The returned list holds the untouched factors followed by the
/// new one. At least one factor must mention `variable`.
pub fn sum_out(variable: &Variable, factors: Vec<Factor>) -> Result<Vec<Factor>> {
    let (eliminated, mut kept): (Vec<Factor>, Vec<Factor>) = factors
        .into_iter()
        .partition(|factor| factor.mentions(variable.name()));

    let mut eliminated = eliminated.into_iter();
    let first = eliminated.next().ok_or_else(|| {
        BayesError::InvalidOperation(format!("no factor mentions '{}' to sum out", variable))
    })?;
    let product = eliminated.fold(first, |acc, factor| acc.multiply(&factor));
    let summed = product.marginalize(variable);
    trace!(
        "sum_out {}: product over {} variables, result over {}",
        variable,
        product.scope().len(),
        summed.scope().len()
    );

    kept.push(summed);
    Ok(kept)
}
