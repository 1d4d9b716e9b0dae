// crates/todo_record/src/priority.rs

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::cmp::Ordering;
use std::fmt;

/// The urgency of a TODO record as emitted by the scanner: either a JSON number
/// or a JSON string.
///
/// Numbers compare numerically, strings compare lexicographically, and any
/// number sorts before any string so that a mixed list still has a total order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Priority {
    Number(Number),
    Text(String),
}

impl Priority {
    /// Returns true if the priority was given as a JSON number.
    pub fn is_number(&self) -> bool {
        matches!(self, Priority::Number(_))
    }
}

fn integer_value(n: &Number) -> Option<i128> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
}

/// Compares an integer against a float by exact value, without rounding the
/// integer through `f64`.
fn compare_integer_float(integer: i128, float: f64) -> Ordering {
    let limit = 2f64.powi(127);
    if float >= limit {
        return Ordering::Less;
    }
    if float < -limit {
        return Ordering::Greater;
    }
    let whole = float.trunc();
    match integer.cmp(&(whole as i128)) {
        // Same integer part: the fractional part decides.
        Ordering::Equal => whole.partial_cmp(&float).unwrap_or(Ordering::Equal),
        other => other,
    }
}

fn compare_numbers(a: &Number, b: &Number) -> Ordering {
    // JSON numbers are never NaN, so `partial_cmp` always answers.
    match (integer_value(a), integer_value(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(x), None) => compare_integer_float(x, b.as_f64().unwrap_or_default()),
        (None, Some(y)) => compare_integer_float(y, a.as_f64().unwrap_or_default()).reverse(),
        (None, None) => {
            let x = a.as_f64().unwrap_or_default();
            let y = b.as_f64().unwrap_or_default();
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Priority::Number(a), Priority::Number(b)) => compare_numbers(a, b),
            (Priority::Text(a), Priority::Text(b)) => a.cmp(b),
            (Priority::Number(_), Priority::Text(_)) => Ordering::Less,
            (Priority::Text(_), Priority::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Priority {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Priority {}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Number(n) => write!(f, "{}", n),
            Priority::Text(s) => f.write_str(s),
        }
    }
}

impl From<i32> for Priority {
    fn from(value: i32) -> Self {
        Priority::Number(Number::from(value))
    }
}

impl From<i64> for Priority {
    fn from(value: i64) -> Self {
        Priority::Number(Number::from(value))
    }
}

impl From<&str> for Priority {
    fn from(value: &str) -> Self {
        Priority::Text(value.to_string())
    }
}
