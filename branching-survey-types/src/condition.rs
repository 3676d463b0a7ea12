use serde::{Deserialize, Serialize};

/// A predicate over a previously given answer that gates a question's
/// visibility.
///
/// Conditions reference the target question by id. Which phase that answer
/// was recorded in does not matter as long as it is at or before the phase
/// currently being evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// The id of the question whose answer is inspected.
    #[serde(rename = "questionId")]
    pub question_id: u32,

    /// How the answer is compared against `value`.
    pub operator: ConditionOperator,

    /// The comparison value. Its expected shape depends on `operator`;
    /// a mismatched shape is recovered with a neutral substitute at
    /// evaluation time, never rejected here.
    pub value: ConditionValue,
}

impl Condition {
    /// Create a new condition.
    pub fn new(question_id: u32, operator: ConditionOperator, value: impl Into<ConditionValue>) -> Self {
        Self {
            question_id,
            operator,
            value: value.into(),
        }
    }
}

/// The comparison performed by a [`Condition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConditionOperator {
    /// Answer (or any of its selections) is a member of a string list.
    Includes,
    /// Answer equals a single string value.
    Equals,
    /// Answer does not equal a single string value.
    NotEquals,
    /// Numeric answer is strictly greater than a number.
    GreaterThan,
    /// Numeric answer is strictly less than a number.
    LessThan,
    /// Numeric answer lies within an inclusive range.
    Between,
}

/// The operator-typed value a [`Condition`] compares against.
///
/// Serialized untagged, so JSON definitions write the natural shape:
/// `["a", "b"]`, `"b2b"`, `42`, or `{"min": 10, "max": 20}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionValue {
    /// A string list, expected by `includes`.
    List(Vec<String>),
    /// An inclusive numeric range, expected by `between`.
    Range { min: f64, max: f64 },
    /// A number, expected by `greater-than` and `less-than`.
    Number(f64),
    /// A single string, expected by `equals` and `not-equals`.
    Text(String),
}

impl From<Vec<String>> for ConditionValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl From<Vec<&str>> for ConditionValue {
    fn from(items: Vec<&str>) -> Self {
        Self::List(items.into_iter().map(str::to_string).collect())
    }
}

impl From<String> for ConditionValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for ConditionValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<f64> for ConditionValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<(f64, f64)> for ConditionValue {
    fn from((min, max): (f64, f64)) -> Self {
        Self::Range { min, max }
    }
}
