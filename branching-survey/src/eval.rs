use branching_survey_types::{AnswerValue, Answers, Condition, ConditionOperator, ConditionValue};

/// Evaluate a single condition against the recorded answers.
///
/// The referenced answer is the first one in store order whose phase is at
/// or before `current_phase` (see [`Answers::first_up_to_phase`] for the
/// ordering caveat). An unanswered reference evaluates to `false`, keeping
/// the dependent question hidden.
pub fn evaluate(condition: &Condition, answers: &Answers, current_phase: u32) -> bool {
    let Some(answer) = answers.first_up_to_phase(condition.question_id, current_phase) else {
        return false;
    };
    let value = answer.value();

    match (condition.operator, shape_checked(condition)) {
        (ConditionOperator::Includes, ConditionValue::List(members)) => match value {
            AnswerValue::Selections(picked) => picked.iter().any(|p| members.contains(p)),
            scalar => members.contains(&scalar_form(scalar)),
        },
        (ConditionOperator::Equals, ConditionValue::Text(expected)) => match value {
            AnswerValue::Selections(picked) => picked.len() == 1 && picked[0] == expected,
            scalar => scalar_form(scalar) == expected,
        },
        (ConditionOperator::NotEquals, ConditionValue::Text(expected)) => match value {
            AnswerValue::Selections(picked) => !picked.iter().any(|p| *p == expected),
            scalar => scalar_form(scalar) != expected,
        },
        (ConditionOperator::GreaterThan, ConditionValue::Number(bound)) => {
            as_number(value).is_some_and(|n| n > bound)
        }
        (ConditionOperator::LessThan, ConditionValue::Number(bound)) => {
            as_number(value).is_some_and(|n| n < bound)
        }
        (ConditionOperator::Between, ConditionValue::Range { min, max }) => {
            as_number(value).is_some_and(|n| min <= n && n <= max)
        }
        // shape_checked pairs every operator with its required shape.
        _ => false,
    }
}

/// Resolve a condition's value to the shape its operator requires.
///
/// On a mismatch (say, a scalar string supplied for `includes`), a warning
/// is logged and the operator's neutral value is substituted: an empty
/// list, an empty string, zero, or a zero-width range. Evaluation then
/// proceeds against the neutral value, so most comparisons become false
/// while `not-equals` against the empty string may hold vacuously.
fn shape_checked(condition: &Condition) -> ConditionValue {
    use ConditionOperator::*;

    match (condition.operator, &condition.value) {
        (Includes, value @ ConditionValue::List(_)) => value.clone(),
        (Includes, other) => neutral(condition, other, ConditionValue::List(Vec::new())),

        (Equals | NotEquals, value @ ConditionValue::Text(_)) => value.clone(),
        (Equals | NotEquals, other) => neutral(condition, other, ConditionValue::Text(String::new())),

        (GreaterThan | LessThan, value @ ConditionValue::Number(_)) => value.clone(),
        (GreaterThan | LessThan, other) => neutral(condition, other, ConditionValue::Number(0.0)),

        (Between, value @ ConditionValue::Range { .. }) => value.clone(),
        (Between, other) => neutral(condition, other, ConditionValue::Range { min: 0.0, max: 0.0 }),
    }
}

fn neutral(condition: &Condition, actual: &ConditionValue, substitute: ConditionValue) -> ConditionValue {
    tracing::warn!(
        question_id = condition.question_id,
        operator = ?condition.operator,
        actual = ?actual,
        substitute = ?substitute,
        "condition value does not match operator shape, substituting neutral value"
    );
    substitute
}

/// String form of a scalar answer for membership and equality checks.
/// Numbers render the way `f64` displays, so `5.0` compares as `"5"`.
fn scalar_form(value: &AnswerValue) -> String {
    match value {
        AnswerValue::Text(s) => s.clone(),
        AnswerValue::Number(n) => n.to_string(),
        AnswerValue::Selections(items) => items.join(","),
    }
}

/// Coerce an answer to a number for the ordering operators.
///
/// Numbers pass through, strings parse, and a selection list is judged by
/// its first element (the original stringified the array and read the
/// leading number). Failure means the condition is false.
fn as_number(value: &AnswerValue) -> Option<f64> {
    match value {
        AnswerValue::Number(n) => Some(*n),
        AnswerValue::Text(s) => s.trim().parse().ok(),
        AnswerValue::Selections(items) => items.first().and_then(|s| s.trim().parse().ok()),
    }
}
