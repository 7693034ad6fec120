use std::collections::BTreeMap;
use std::fmt;

use crate::common::errors::{BayesError, Result};
use crate::common::powerset::powerset;

use super::variable::{Event, Variable};

/// Sparse probability table over a growing, ordered set of boolean variables.
///
/// Each entry maps an [`Event`] (the variables assumed true) to a
/// non-negative mass. The scope order only drives enumeration and printing;
/// two distributions with the same entries are interchangeable regardless of
/// how their scopes are ordered.
///
/// Entries may be missing while a table is being built. An absent event
/// carries no mass.
#[derive(Clone, Debug, Default)]
pub struct Distribution {
    scope: Vec<Variable>,
    table: BTreeMap<Event, f64>,
}

impl Distribution {
    pub fn new() -> Self {
        Distribution::default()
    }

    /// An empty distribution that already declares `scope`.
    pub fn with_scope(scope: Vec<Variable>) -> Self {
        let mut distribution = Distribution::new();
        for variable in scope {
            distribution.extend_scope(&variable);
        }
        distribution
    }

    /// The multiplicative identity: empty scope, the empty event has mass 1.
    pub fn unit() -> Self {
        let mut distribution = Distribution::new();
        distribution.add_entry(Event::new(), 1.0);
        distribution
    }

    /// Inserts or overwrites the mass of `event`, adding any variable it
    /// mentions to the scope.
    pub fn add_entry(&mut self, event: Event, probability: f64) {
        for variable in event.iter() {
            self.extend_scope(variable);
        }
        self.table.insert(event, probability);
    }

    fn extend_scope(&mut self, variable: &Variable) {
        if !self.scope.contains(variable) {
            self.scope.push(variable.clone());
        }
    }

    pub fn scope(&self) -> &[Variable] {
        &self.scope
    }

    pub fn mentions(&self, variable: &str) -> bool {
        self.scope.iter().any(|v| v.name() == variable)
    }

    pub fn entries(&self) -> &BTreeMap<Event, f64> {
        &self.table
    }

    pub fn get(&self, event: &Event) -> Option<f64> {
        self.table.get(event).copied()
    }

    /// Mass of `event`, zero when the table has no entry for it.
    pub fn probability(&self, event: &Event) -> f64 {
        self.get(event).unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn total_mass(&self) -> f64 {
        self.table.values().sum()
    }

    /// True when every truth combination of the scope has an entry.
    pub fn is_complete(&self) -> bool {
        self.iter_assignments().all(|event| self.table.contains_key(&event))
    }

    /// Every truth combination of the scope, in powerset order.
    pub fn iter_assignments(&self) -> impl Iterator<Item = Event> + '_ {
        powerset(&self.scope).map(|subset| subset.into_iter().collect())
    }

    /// Total mass of the events in which `variable` is true.
    pub fn marginal(&self, variable: &str) -> f64 {
        self.table
            .iter()
            .filter(|(event, _)| event.contains(variable))
            .map(|(_, mass)| mass)
            .sum()
    }

    /// Copy with every mass divided by the total mass.
    pub fn normalize(&self) -> Result<Distribution> {
        let total = self.total_mass();
        if total == 0.0 || !total.is_finite() {
            return Err(BayesError::DegenerateDistribution);
        }
        Ok(Distribution {
            scope: self.scope.clone(),
            table: self
                .table
                .iter()
                .map(|(event, mass)| (event.clone(), mass / total))
                .collect(),
        })
    }
}

impl PartialEq for Distribution {
    fn eq(&self, other: &Self) -> bool {
        self.table == other.table
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for event in self.iter_assignments() {
            let row: Vec<String> = self
                .scope
                .iter()
                .map(|variable| format!("{}={}", variable, event.contains(variable.name())))
                .collect();
            match self.get(&event) {
                Some(mass) => writeln!(f, "{} : {}", row.join(" "), mass)?,
                None => writeln!(f, "{} : -", row.join(" "))?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(names: &[&str]) -> Event {
        names.iter().copied().collect()
    }

    #[test]
    fn test_add_entry_extends_scope_in_insertion_order() {
        let mut distribution = Distribution::new();
        distribution.add_entry(event(&["B"]), 0.2);
        distribution.add_entry(event(&["A", "B"]), 0.3);
        let names: Vec<&str> = distribution.scope().iter().map(Variable::name).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn test_add_entry_overwrites() {
        let mut distribution = Distribution::new();
        distribution.add_entry(event(&["A"]), 0.2);
        distribution.add_entry(event(&["A"]), 0.7);
        assert_eq!(distribution.get(&event(&["A"])), Some(0.7));
        assert_eq!(distribution.len(), 1);
    }

    #[test]
    fn test_normalize_sums_to_one() {
        let mut distribution = Distribution::new();
        distribution.add_entry(event(&[]), 1.0);
        distribution.add_entry(event(&["A"]), 2.0);
        distribution.add_entry(event(&["B"]), 3.0);
        distribution.add_entry(event(&["A", "B"]), 4.0);
        let normalized = distribution.normalize().unwrap();
        let total: f64 = normalized
            .iter_assignments()
            .map(|e| normalized.probability(&e))
            .sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert_eq!(normalized.get(&event(&["A", "B"])), Some(0.4));
    }

    #[test]
    fn test_normalize_zero_mass_is_degenerate() {
        let mut distribution = Distribution::new();
        distribution.add_entry(event(&[]), 0.0);
        distribution.add_entry(event(&["A"]), 0.0);
        let result = distribution.normalize();
        assert!(matches!(result, Err(BayesError::DegenerateDistribution)));
    }

    #[test]
    fn test_completeness() {
        let mut distribution = Distribution::with_scope(vec!["A".into(), "B".into()]);
        assert!(!distribution.is_complete());
        distribution.add_entry(event(&[]), 0.1);
        distribution.add_entry(event(&["A"]), 0.2);
        distribution.add_entry(event(&["B"]), 0.3);
        assert!(!distribution.is_complete());
        distribution.add_entry(event(&["A", "B"]), 0.4);
        assert!(distribution.is_complete());
    }

    #[test]
    fn test_marginal() {
        let mut distribution = Distribution::new();
        distribution.add_entry(event(&[]), 0.1);
        distribution.add_entry(event(&["A"]), 0.2);
        distribution.add_entry(event(&["B"]), 0.3);
        distribution.add_entry(event(&["A", "B"]), 0.4);
        assert!((distribution.marginal("A") - 0.6).abs() < 1e-12);
        assert!((distribution.marginal("B") - 0.7).abs() < 1e-12);
    }
}
