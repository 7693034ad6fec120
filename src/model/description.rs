use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::common::errors::Result;
use crate::common::powerset::powerset;

use super::network::BayesianNetwork;
use super::variable::Event;

/// Serializable form of a [`BayesianNetwork`].
///
/// ```json
/// { "variables": [
///     { "name": "A", "parents": [], "table": [ { "true_parents": [], "probability": 0.3 } ] },
///     { "name": "B", "parents": ["A"], "table": [
///         { "true_parents": ["A"], "probability": 0.8 },
///         { "true_parents": [], "probability": 0.1 } ] } ] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkDescription {
    pub variables: Vec<VariableDescription>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDescription {
    pub name: String,
    #[serde(default)]
    pub parents: Vec<String>,
    #[serde(default)]
    pub table: Vec<TableEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableEntry {
    #[serde(default)]
    pub true_parents: Vec<String>,
    pub probability: f64,
}

impl BayesianNetwork {
    /// Builds a network by declaring every variable, then every edge, then
    /// every table entry, so a description fails exactly where the same
    /// sequence of direct calls would.
    pub fn from_description(description: &NetworkDescription) -> Result<BayesianNetwork> {
        let mut network = BayesianNetwork::new();
        for variable in &description.variables {
            network.add_variable(&variable.name)?;
        }
        for variable in &description.variables {
            for parent in &variable.parents {
                network.add_dependency(parent, &variable.name)?;
            }
        }
        for variable in &description.variables {
            for entry in &variable.table {
                network.set_probability(&variable.name, entry.true_parents.as_slice(), entry.probability)?;
            }
        }
        Ok(network)
    }

    /// Inverse of [`BayesianNetwork::from_description`]. Table rows follow
    /// powerset order over the parents; rows the network lacks are skipped.
    pub fn to_description(&self) -> Result<NetworkDescription> {
        let mut variables = Vec::with_capacity(self.len());
        for variable in self.variables() {
            let parents = self.parents(variable.name())?;
            let table = self.table(variable.name())?;
            let rows = powerset(parents)
                .filter_map(|subset| {
                    let event: Event = subset.iter().copied().collect();
                    table.get(&event).map(|probability| TableEntry {
                        true_parents: subset.iter().map(|p| p.to_string()).collect(),
                        probability,
                    })
                })
                .collect();
            variables.push(VariableDescription {
                name: variable.to_string(),
                parents: parents.iter().map(|p| p.to_string()).collect(),
                table: rows,
            });
        }
        Ok(NetworkDescription { variables })
    }

    pub fn from_json(json: &str) -> Result<BayesianNetwork> {
        let description: NetworkDescription = serde_json::from_str(json)?;
        BayesianNetwork::from_description(&description)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_description()?)?)
    }
}

/// Reads a JSON network description from disk.
pub fn load_network<P: AsRef<Path>>(path: P) -> Result<BayesianNetwork> {
    let contents = fs::read_to_string(path)?;
    BayesianNetwork::from_json(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::errors::BayesError;

    const CHAIN: &str = r#"{
        "variables": [
            { "name": "A", "table": [ { "probability": 0.3 } ] },
            { "name": "B", "parents": ["A"], "table": [
                { "true_parents": ["A"], "probability": 0.8 },
                { "true_parents": [], "probability": 0.1 }
            ] }
        ]
    }"#;

    #[test]
    fn test_from_json() {
        let network = BayesianNetwork::from_json(CHAIN).unwrap();
        assert!(network.is_valid());
        assert_eq!(network.parents("B").unwrap().len(), 1);
        let a_true: Event = ["A"].into_iter().collect();
        assert_eq!(network.conditional_probability("B", &a_true).unwrap(), 0.8);
    }

    #[test]
    fn test_description_round_trip() {
        let network = BayesianNetwork::from_json(CHAIN).unwrap();
        let description = network.to_description().unwrap();
        assert_eq!(description.variables[1].table[0].true_parents, Vec::<String>::new());
        let rebuilt = BayesianNetwork::from_description(&description).unwrap();
        assert_eq!(rebuilt.to_description().unwrap(), description);
    }

    #[test]
    fn test_unknown_parent_in_description() {
        let json = r#"{ "variables": [ { "name": "B", "parents": ["A"] } ] }"#;
        let result = BayesianNetwork::from_json(json);
        assert!(matches!(result, Err(BayesError::UnknownVariable(name)) if name == "A"));
    }

    #[test]
    fn test_malformed_json() {
        let result = BayesianNetwork::from_json("{ not json");
        assert!(matches!(result, Err(BayesError::Json(_))));
    }
}
