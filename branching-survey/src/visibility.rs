use branching_survey_types::{Answers, Question};

use crate::eval::evaluate;

/// Decide whether a question is currently shown.
///
/// A question with no conditions is always visible. Otherwise every
/// condition must hold, evaluated in declaration order.
pub fn is_visible(question: &Question, answers: &Answers, current_phase: u32) -> bool {
    question
        .conditions()
        .iter()
        .all(|condition| evaluate(condition, answers, current_phase))
}

/// Filter a phase's questions down to the currently visible ones,
/// preserving their order.
///
/// Recomputed fresh on every call: the same inputs always yield the same
/// sequence, content and order.
pub fn visible_questions<'a>(
    questions: &'a [Question],
    answers: &Answers,
    current_phase: u32,
) -> Vec<&'a Question> {
    questions
        .iter()
        .filter(|question| is_visible(question, answers, current_phase))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use branching_survey_types::{Condition, ConditionOperator, QuestionKind};

    fn unconditional(id: u32) -> Question {
        Question::new(id, format!("Question {id}"), QuestionKind::Text)
    }

    fn gated_on(id: u32, target: u32, expected: &str) -> Question {
        Question::new(id, format!("Question {id}"), QuestionKind::Text).with_conditions(vec![
            Condition::new(target, ConditionOperator::Equals, expected),
        ])
    }

    #[test]
    fn no_conditions_means_always_visible() {
        let question = unconditional(1);
        assert!(is_visible(&question, &Answers::new(), 1));
    }

    #[test]
    fn all_conditions_must_hold() {
        let question = Question::new(3, "Gated twice", QuestionKind::Text).with_conditions(vec![
            Condition::new(1, ConditionOperator::Equals, "yes"),
            Condition::new(2, ConditionOperator::Equals, "yes"),
        ]);

        let mut answers = Answers::new();
        answers.record(1, 1, "yes");
        assert!(!is_visible(&question, &answers, 1));

        answers.record(2, 1, "yes");
        assert!(is_visible(&question, &answers, 1));
    }

    #[test]
    fn filtering_preserves_order_and_is_idempotent() {
        let questions = vec![unconditional(1), gated_on(2, 1, "yes"), unconditional(3)];
        let mut answers = Answers::new();
        answers.record(1, 1, "yes");

        let first: Vec<u32> = visible_questions(&questions, &answers, 1)
            .iter()
            .map(|q| q.id())
            .collect();
        let second: Vec<u32> = visible_questions(&questions, &answers, 1)
            .iter()
            .map(|q| q.id())
            .collect();

        assert_eq!(first, vec![1, 2, 3]);
        assert_eq!(first, second);
    }

    #[test]
    fn hidden_questions_are_dropped_not_reordered() {
        let questions = vec![gated_on(1, 9, "never"), unconditional(2)];

        let visible: Vec<u32> = visible_questions(&questions, &Answers::new(), 1)
            .iter()
            .map(|q| q.id())
            .collect();
        assert_eq!(visible, vec![2]);
    }
}
