use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::common::errors::{BayesError, Result};
use crate::model::network::BayesianNetwork;
use crate::model::variable::{Event, Variable};

/// Observed truth values, fixed before inference.
pub type Evidence = BTreeMap<Variable, bool>;

/// Builds [`Evidence`] from `(name, value)` pairs.
pub fn evidence(pairs: &[(&str, bool)]) -> Evidence {
    pairs
        .iter()
        .map(|(name, value)| (Variable::from(*name), *value))
        .collect()
}

/// Evidence and query variables for one inference call, without the
/// network. This is what callers queue up for batch runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InferenceRequest {
    #[serde(default)]
    pub evidence: Evidence,
    pub query: Vec<Variable>,
}

impl InferenceRequest {
    pub fn new(evidence: Evidence, query: Vec<Variable>) -> Self {
        InferenceRequest { evidence, query }
    }
}

/// One network together with the evidence and query variables of a single
/// inference call.
///
/// Construction checks that every named variable exists and that no
/// variable is both observed and queried. Repeated query names collapse to
/// their first occurrence.
#[derive(Debug, Clone)]
pub struct InferenceProblem<'a> {
    network: &'a BayesianNetwork,
    evidence: Evidence,
    query: Vec<Variable>,
}

impl<'a> InferenceProblem<'a> {
    pub fn new(
        network: &'a BayesianNetwork,
        evidence: Evidence,
        query: Vec<Variable>,
    ) -> Result<InferenceProblem<'a>> {
        for variable in evidence.keys() {
            network.lookup(variable.name())?;
        }
        let mut unique: Vec<Variable> = Vec::with_capacity(query.len());
        for variable in query {
            network.lookup(variable.name())?;
            if evidence.contains_key(&variable) {
                return Err(BayesError::EvidenceQueryOverlap(variable.to_string()));
            }
            if !unique.contains(&variable) {
                unique.push(variable);
            }
        }
        Ok(InferenceProblem {
            network,
            evidence,
            query: unique,
        })
    }

    pub fn from_request(
        network: &'a BayesianNetwork,
        request: &InferenceRequest,
    ) -> Result<InferenceProblem<'a>> {
        InferenceProblem::new(network, request.evidence.clone(), request.query.clone())
    }

    /// Convenience constructor from plain names.
    pub fn from_names(
        network: &'a BayesianNetwork,
        observed: &[(&str, bool)],
        query: &[&str],
    ) -> Result<InferenceProblem<'a>> {
        InferenceProblem::new(
            network,
            evidence(observed),
            query.iter().map(|name| Variable::from(*name)).collect(),
        )
    }

    pub fn network(&self) -> &'a BayesianNetwork {
        self.network
    }

    pub fn evidence(&self) -> &Evidence {
        &self.evidence
    }

    pub fn query(&self) -> &[Variable] {
        &self.query
    }

    pub fn is_evidence(&self, variable: &Variable) -> bool {
        self.evidence.contains_key(variable)
    }

    pub fn is_query(&self, variable: &Variable) -> bool {
        self.query.contains(variable)
    }

    /// Network variables that are neither observed nor queried, in
    /// declaration order.
    pub fn hidden_variables(&self) -> Vec<Variable> {
        self.network
            .variables()
            .iter()
            .filter(|variable| !self.is_evidence(variable) && !self.is_query(variable))
            .cloned()
            .collect()
    }

    /// The evidence variables observed true.
    pub fn evidence_event(&self) -> Event {
        self.evidence
            .iter()
            .filter(|(_, value)| **value)
            .map(|(variable, _)| variable)
            .collect()
    }
}
