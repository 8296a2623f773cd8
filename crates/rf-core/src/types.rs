use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Scalar cell value. `Missing` is the explicit not-a-value sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Value {
    Number(f64),
    Text(String),
    Bool(bool),
    Missing,
}

impl Value {
    /// Truthiness of a cell, or `None` when the value is missing.
    ///
    /// This single conversion defines predicate semantics for every scalar
    /// type a dataset may contain:
    /// - `Number(n)` — truthy iff `n != 0.0`; NaN counts as missing
    /// - `Text(s)` — truthy iff non-empty
    /// - `Bool(b)` — `b`
    /// - `Missing` — `None`
    pub fn truthiness(&self) -> Option<bool> {
        match self {
            Value::Number(n) if n.is_nan() => None,
            Value::Number(n) => Some(*n != 0.0),
            Value::Text(s) => Some(!s.is_empty()),
            Value::Bool(b) => Some(*b),
            Value::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        self.truthiness().is_none()
    }
}

/// One dataset row: attribute name → value. Immutable once loaded;
/// an absent attribute reads the same as `Value::Missing`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Record {
    values: HashMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, attr: impl Into<String>, value: Value) {
        self.values.insert(attr.into(), value);
    }

    pub fn get(&self, attr: &str) -> Option<&Value> {
        self.values.get(attr)
    }
}

impl<S: Into<String>> FromIterator<(S, Value)> for Record {
    fn from_iter<T: IntoIterator<Item = (S, Value)>>(iter: T) -> Self {
        Record {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// An ordered collection of records with a designated boolean label column.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Record>,
    label_column: String,
}

impl Dataset {
    pub fn new(records: Vec<Record>, label_column: impl Into<String>) -> Self {
        Self {
            records,
            label_column: label_column.into(),
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn label_column(&self) -> &str {
        &self.label_column
    }

    /// Records whose label is truthy. Re-derived on every call; the
    /// partition is never cached.
    pub fn positives(&self) -> impl Iterator<Item = &Record> {
        self.partition(true)
    }

    /// Records whose label is defined and falsy. A record with a missing
    /// label belongs to neither partition.
    pub fn negatives(&self) -> impl Iterator<Item = &Record> {
        self.partition(false)
    }

    fn partition(&self, wanted: bool) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(move |r| {
            r.get(&self.label_column)
                .and_then(Value::truthiness)
                .map(|t| t == wanted)
                .unwrap_or(false)
        })
    }
}

/// An optionally negated test that an attribute's value is truthy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Predicate {
    pub negated: bool,
    pub attr: String,
}

impl Predicate {
    pub fn new(negated: bool, attr: impl Into<String>) -> Self {
        Self {
            negated,
            attr: attr.into(),
        }
    }
}

/// Per-rule coverage statistics, computed once per compression run.
#[derive(Debug, Clone, Serialize)]
pub struct RuleStats {
    /// Full original rule text, separator and consequent included.
    pub rule: String,
    pub predicates: Vec<Predicate>,
    /// Positive-class records the rule fires on.
    pub tp: usize,
    /// Negative-class records the rule fires on.
    pub fp: usize,
    /// tp / |positive class|, 0 when the positive class is empty.
    pub coverage: f64,
    /// tp / (tp + fp), 0 when the rule never fires.
    pub precision: f64,
    /// coverage × precision.
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, Value)]) -> Record {
        pairs.iter().map(|(k, v)| (*k, v.clone())).collect()
    }

    #[test]
    fn test_truthiness_numbers() {
        assert_eq!(Value::Number(1.0).truthiness(), Some(true));
        assert_eq!(Value::Number(-3.5).truthiness(), Some(true));
        assert_eq!(Value::Number(0.0).truthiness(), Some(false));
        assert_eq!(Value::Number(f64::NAN).truthiness(), None);
    }

    #[test]
    fn test_truthiness_text() {
        assert_eq!(Value::Text("x".into()).truthiness(), Some(true));
        assert_eq!(Value::Text(String::new()).truthiness(), Some(false));
    }

    #[test]
    fn test_truthiness_bool_and_missing() {
        assert_eq!(Value::Bool(true).truthiness(), Some(true));
        assert_eq!(Value::Bool(false).truthiness(), Some(false));
        assert_eq!(Value::Missing.truthiness(), None);
        assert!(Value::Missing.is_missing());
        assert!(Value::Number(f64::NAN).is_missing());
    }

    #[test]
    fn test_record_absent_attribute() {
        let r = record(&[("age", Value::Number(70.0))]);
        assert!(r.get("age").is_some());
        assert!(r.get("sex").is_none());
    }

    #[test]
    fn test_dataset_partitions() {
        let ds = Dataset::new(
            vec![
                record(&[("donor_is_old", Value::Bool(true))]),
                record(&[("donor_is_old", Value::Bool(false))]),
                record(&[("donor_is_old", Value::Number(1.0))]),
                record(&[("donor_is_old", Value::Missing)]),
                record(&[]),
            ],
            "donor_is_old",
        );
        assert_eq!(ds.positives().count(), 2);
        assert_eq!(ds.negatives().count(), 1);
        assert_eq!(ds.len(), 5);
        assert_eq!(ds.label_column(), "donor_is_old");
    }

    #[test]
    fn test_dataset_partitions_rederived() {
        let ds = Dataset::new(
            vec![record(&[("donor_is_old", Value::Bool(true))])],
            "donor_is_old",
        );
        assert_eq!(ds.positives().count(), 1);
        assert_eq!(ds.positives().count(), 1);
    }

    #[test]
    fn test_predicate_equality() {
        assert_eq!(Predicate::new(true, "age"), Predicate::new(true, "age"));
        assert_ne!(Predicate::new(true, "age"), Predicate::new(false, "age"));
        assert_ne!(Predicate::new(false, "age"), Predicate::new(false, "sex"));
    }
}
