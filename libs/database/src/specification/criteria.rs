//! Filter predicates as data.
//!
//! A [`Criteria`] tree names fields through the entity's field enum instead of
//! holding closures or SQL fragments, so every store backend can translate it
//! into its own query language.

use std::cmp::Ordering;
use std::fmt;

/// A scalar field value as seen by criteria and orderings.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i32),
    Float(f64),
    Text(String),
}

impl Value {
    /// Total order used when sorting in memory.
    ///
    /// Values of the same kind compare naturally (floats via `total_cmp`);
    /// mixed kinds order as `Int < Float < Text`.
    pub fn sort_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => a.total_cmp(b),
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Int(_) => 0,
            Value::Float(_) => 1,
            Value::Text(_) => 2,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Text(v) => write!(f, "'{}'", v),
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

/// Boolean predicate over the fields `F` of one entity type.
///
/// Only the shapes the catalog needs exist: equality, case-insensitive
/// substring match, and conjunction.
#[derive(Debug, Clone, PartialEq)]
pub enum Criteria<F> {
    /// `field == value`
    Eq(F, Value),
    /// Case-insensitive `field LIKE %needle%`. The needle is stored lower-cased.
    Contains(F, String),
    /// Every clause holds. An empty conjunction matches everything.
    All(Vec<Criteria<F>>),
}

impl<F> Criteria<F> {
    pub fn eq(field: F, value: impl Into<Value>) -> Self {
        Criteria::Eq(field, value.into())
    }

    pub fn contains(field: F, needle: impl AsRef<str>) -> Self {
        Criteria::Contains(field, needle.as_ref().to_lowercase())
    }

    /// Conjunction of the given clauses, or `None` when there are none.
    ///
    /// A single clause is returned as-is rather than wrapped.
    pub fn all_of(clauses: impl IntoIterator<Item = Criteria<F>>) -> Option<Self> {
        let mut clauses: Vec<_> = clauses.into_iter().collect();
        match clauses.len() {
            0 => None,
            1 => clauses.pop(),
            _ => Some(Criteria::All(clauses)),
        }
    }

    /// Conjunction of `self` and `other`, flattening nested `All`s.
    pub fn and(self, other: Criteria<F>) -> Self {
        let mut clauses = match self {
            Criteria::All(clauses) => clauses,
            single => vec![single],
        };
        match other {
            Criteria::All(more) => clauses.extend(more),
            single => clauses.push(single),
        }
        Criteria::All(clauses)
    }

    /// Evaluate against an in-memory row, reading fields through `field_value`.
    pub fn matches(&self, field_value: &impl Fn(&F) -> Value) -> bool {
        match self {
            Criteria::Eq(field, expected) => field_value(field) == *expected,
            Criteria::Contains(field, needle) => match field_value(field) {
                Value::Text(text) => text.to_lowercase().contains(needle.as_str()),
                _ => false,
            },
            Criteria::All(clauses) => clauses.iter().all(|c| c.matches(field_value)),
        }
    }
}
