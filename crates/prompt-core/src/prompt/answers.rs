//! Collected answers

use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// A collected value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// `true`, non-empty text, or a non-zero number
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Text(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

/// Read-only snapshot of the answers collected so far.
///
/// Cloning is cheap. Callbacks only ever receive a snapshot, so nothing they
/// do can change the run's results behind the dispatcher's back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Answers {
    values: Arc<BTreeMap<String, Value>>,
}

impl Answers {
    pub fn from_map(values: BTreeMap<String, Value>) -> Self {
        Self {
            values: Arc::new(values),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    pub fn get_number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_f64)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn to_map(&self) -> BTreeMap<String, Value> {
        self.values.as_ref().clone()
    }
}

impl Serialize for Answers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.values.serialize(serializer)
    }
}

/// Values an acknowledgement callback asks the dispatcher to record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assignments(Vec<(String, Value)>);

impl Assignments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn one(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new().set(name, value)
    }

    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.push((name.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for Assignments {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Passed to acknowledgement callbacks
#[derive(Debug, Clone)]
pub struct Acknowledged {
    pub answers: Answers,
    pub accepted: bool,
}

/// The single writable result map of one prompt run
#[derive(Debug, Default)]
pub(crate) struct Accumulator {
    values: BTreeMap<String, Value>,
    snapshot: Answers,
}

impl Accumulator {
    /// Record `value` under `name`, replacing any earlier value
    pub(crate) fn set(&mut self, name: &str, value: Value) -> Answers {
        self.values.insert(name.to_string(), value);
        self.snapshot = Answers::from_map(self.values.clone());
        self.snapshot.clone()
    }

    pub(crate) fn apply(&mut self, assignments: Assignments) {
        for (name, value) in assignments {
            self.set(&name, value);
        }
    }

    #[cfg(test)]
    pub(crate) fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub(crate) fn snapshot(&self) -> Answers {
        self.snapshot.clone()
    }

    pub(crate) fn into_answers(self) -> Answers {
        self.snapshot
    }
}
