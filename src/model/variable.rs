use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

/// Name of one boolean random variable. Uniqueness is enforced by the
/// network that declares it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variable(String);

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Variable(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Variable {
    fn from(name: &str) -> Self {
        Variable(name.to_string())
    }
}

impl From<String> for Variable {
    fn from(name: String) -> Self {
        Variable(name)
    }
}

impl From<&Variable> for Variable {
    fn from(variable: &Variable) -> Self {
        variable.clone()
    }
}

impl AsRef<str> for Variable {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Variable {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// The set of variables that are true under some assignment. Any variable of
/// the surrounding scope that is absent is false.
///
/// Events compare by their variable sets, so `{A, B}` built in either order
/// is the same key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Event(BTreeSet<Variable>);

impl Event {
    pub fn new() -> Self {
        Event(BTreeSet::new())
    }

    pub fn contains(&self, variable: &str) -> bool {
        self.0.contains(variable)
    }

    pub fn insert(&mut self, variable: impl Into<Variable>) {
        self.0.insert(variable.into());
    }

    /// Copy of this event with `variable` set to `value`.
    pub fn with(&self, variable: &Variable, value: bool) -> Event {
        let mut event = self.clone();
        if value {
            event.0.insert(variable.clone());
        } else {
            event.0.remove(variable);
        }
        event
    }

    /// Union of two events.
    pub fn union(&self, other: &Event) -> Event {
        Event(self.0.union(&other.0).cloned().collect())
    }

    /// Keeps only the true variables that belong to `scope`.
    pub fn restrict(&self, scope: &[Variable]) -> Event {
        Event(
            scope
                .iter()
                .filter(|variable| self.0.contains(*variable))
                .cloned()
                .collect(),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V: Into<Variable>> FromIterator<V> for Event {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Event(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(Variable::name).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}
