use branching_survey_types::{AnswerValue, Answers, Phase, Question};

use crate::visibility::visible_questions;

/// Percentage of a phase's visible questions that have a recorded answer,
/// rounded to the nearest integer. A phase with no visible questions
/// reports 0.
///
/// Visibility is evaluated with `phase_id` as the context phase, and only
/// answers recorded for that exact phase count as answered.
pub fn phase_completion_percentage(
    phase_questions: &[Question],
    answers: &Answers,
    phase_id: u32,
) -> u8 {
    let visible = visible_questions(phase_questions, answers, phase_id);
    let answered = visible
        .iter()
        .filter(|question| answers.contains(question.id(), phase_id))
        .count();

    percentage(answered, visible.len())
}

/// Percentage of visible questions answered across all phases, each
/// phase's visibility evaluated with its own id as the context phase.
/// A survey with no visible questions anywhere reports 0.
pub fn overall_completion_percentage(phases: &[Phase], answers: &Answers) -> u8 {
    let mut total = 0;
    let mut answered = 0;

    for phase in phases {
        let visible = visible_questions(phase.questions(), answers, phase.id());
        total += visible.len();
        answered += visible
            .iter()
            .filter(|question| answers.contains(question.id(), phase.id()))
            .count();
    }

    percentage(answered, total)
}

/// A phase is complete when it has at least one visible question and every
/// visible question is answered. An empty visible set is NOT complete, so
/// a phase whose questions are all conditioned away cannot be marked done
/// by accident.
pub fn is_phase_complete(phase_questions: &[Question], answers: &Answers, phase_id: u32) -> bool {
    let visible = visible_questions(phase_questions, answers, phase_id);

    !visible.is_empty()
        && visible
            .iter()
            .all(|question| answers.contains(question.id(), phase_id))
}

/// Exact-pair lookup of the recorded answer value for a question in a
/// phase.
pub fn answer_for<'a>(
    question_id: u32,
    phase_id: u32,
    answers: &'a Answers,
) -> Option<&'a AnswerValue> {
    answers.value_for(question_id, phase_id)
}

fn percentage(answered: usize, total: usize) -> u8 {
    if total == 0 {
        0
    } else {
        ((answered as f64 / total as f64) * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use branching_survey_types::{Condition, ConditionOperator, QuestionKind};

    fn question(id: u32) -> Question {
        Question::new(id, format!("Question {id}"), QuestionKind::Text)
    }

    #[test]
    fn zero_visible_questions_is_zero_percent() {
        assert_eq!(phase_completion_percentage(&[], &Answers::new(), 1), 0);
    }

    #[test]
    fn percentage_rounds_to_nearest() {
        let questions = vec![question(1), question(2), question(3)];
        let mut answers = Answers::new();
        answers.record(1, 1, "a");

        // 1 of 3 rounds to 33, 2 of 3 rounds to 67.
        assert_eq!(phase_completion_percentage(&questions, &answers, 1), 33);
        answers.record(2, 1, "b");
        assert_eq!(phase_completion_percentage(&questions, &answers, 1), 67);
    }

    #[test]
    fn answers_from_other_phases_do_not_count() {
        let questions = vec![question(1)];
        let mut answers = Answers::new();
        answers.record(1, 2, "answered elsewhere");

        assert_eq!(phase_completion_percentage(&questions, &answers, 1), 0);
        assert!(!is_phase_complete(&questions, &answers, 1));
    }

    #[test]
    fn empty_visible_set_is_not_complete() {
        assert!(!is_phase_complete(&[], &Answers::new(), 1));

        // All questions conditioned away behaves the same.
        let gated = vec![question(1).with_conditions(vec![Condition::new(
            9,
            ConditionOperator::Equals,
            "never",
        )])];
        assert!(!is_phase_complete(&gated, &Answers::new(), 1));
    }

    #[test]
    fn hidden_questions_do_not_block_completion() {
        let questions = vec![
            question(1),
            question(2).with_conditions(vec![Condition::new(
                1,
                ConditionOperator::Equals,
                "show",
            )]),
        ];
        let mut answers = Answers::new();
        answers.record(1, 1, "hide");

        assert!(is_phase_complete(&questions, &answers, 1));
        assert_eq!(phase_completion_percentage(&questions, &answers, 1), 100);
    }

    #[test]
    fn overall_percentage_spans_phases() {
        let phases = vec![
            Phase::new(1, "One", vec![question(1), question(2)]),
            Phase::new(2, "Two", vec![question(3), question(4)]),
        ];
        let mut answers = Answers::new();
        answers.record(1, 1, "a");

        // 1 answered of 4 visible.
        assert_eq!(overall_completion_percentage(&phases, &answers), 25);
    }

    #[test]
    fn answer_for_is_exact_pair() {
        let mut answers = Answers::new();
        answers.record(1, 1, "a");

        assert_eq!(answer_for(1, 1, &answers), Some(&AnswerValue::Text("a".into())));
        assert_eq!(answer_for(1, 2, &answers), None);
    }
}
