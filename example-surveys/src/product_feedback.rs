use branching_survey::{
    Condition, ConditionOperator, Phase, Question, QuestionKind, QuestionOption, RangeConfig,
    SurveyDefinition,
};

/// A two-phase product feedback survey using every condition operator.
pub fn product_feedback() -> SurveyDefinition {
    SurveyDefinition::new(vec![
        Phase::new(
            1,
            "Satisfaction",
            vec![
                Question::new(1, "How satisfied are you overall?", QuestionKind::Range)
                    .with_range(RangeConfig::new(0.0, 10.0).with_step(1.0)),
                Question::new(2, "What went wrong?", QuestionKind::Multiline).with_conditions(
                    vec![Condition::new(1, ConditionOperator::LessThan, 5.0)],
                ),
                Question::new(3, "Anything we could polish?", QuestionKind::Text).with_conditions(
                    vec![Condition::new(
                        1,
                        ConditionOperator::Between,
                        (5.0, 8.0),
                    )],
                ),
                Question::new(4, "Would you recommend us?", QuestionKind::SingleChoice)
                    .with_options(vec![
                        QuestionOption::new("yes", "Yes"),
                        QuestionOption::new("no", "No"),
                    ])
                    .with_conditions(vec![Condition::new(
                        1,
                        ConditionOperator::GreaterThan,
                        8.0,
                    )]),
            ],
        ),
        Phase::new(
            2,
            "Follow-up",
            vec![
                Question::new(5, "Which features do you use?", QuestionKind::MultiChoice)
                    .with_options(vec![
                        QuestionOption::new("reports", "Reports"),
                        QuestionOption::new("exports", "Exports"),
                        QuestionOption::new("api", "API"),
                    ]),
                Question::new(6, "What is missing from the API?", QuestionKind::Multiline)
                    .with_conditions(vec![Condition::new(
                        5,
                        ConditionOperator::Includes,
                        vec!["api"],
                    )]),
                Question::new(7, "May we quote you publicly?", QuestionKind::SingleChoice)
                    .with_options(vec![
                        QuestionOption::new("yes", "Yes"),
                        QuestionOption::new("no", "No"),
                    ])
                    .with_conditions(vec![
                        Condition::new(4, ConditionOperator::Equals, "yes"),
                        Condition::new(5, ConditionOperator::NotEquals, "none"),
                    ]),
            ],
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use branching_survey::{SurveyProgress, visible_questions};

    #[test]
    fn definition_is_valid() {
        product_feedback().validate().unwrap();
    }

    #[test]
    fn satisfaction_score_selects_exactly_one_follow_up() {
        let survey = product_feedback();
        let phase = &survey.phases()[0];

        for (score, expected) in [(3.0, 2), (6.0, 3), (9.0, 4)] {
            let mut progress = SurveyProgress::for_survey(&survey);
            progress.record_answer(1, score, 1);

            let visible: Vec<u32> = visible_questions(phase.questions(), progress.answers(), 1)
                .iter()
                .map(|q| q.id())
                .collect();
            assert_eq!(visible, vec![1, expected], "score {score}");
        }
    }

    #[test]
    fn quote_request_needs_both_conditions() {
        let survey = product_feedback();
        let phase = &survey.phases()[1];
        let mut progress = SurveyProgress::for_survey(&survey);

        // Recommendation from phase 1 alone is not enough.
        progress.record_answer(1, 9.0, 1);
        progress.record_answer(4, "yes", 1);
        let visible = visible_questions(phase.questions(), progress.answers(), 2);
        assert!(!visible.iter().any(|q| q.id() == 7));

        progress.record_answer(5, vec!["reports"], 2);
        let visible = visible_questions(phase.questions(), progress.answers(), 2);
        assert!(visible.iter().any(|q| q.id() == 7));
    }

    #[test]
    fn definition_survives_a_json_round_trip() {
        let survey = product_feedback();
        let json = serde_json::to_string(&survey).unwrap();
        let reloaded = SurveyDefinition::from_json(&json).unwrap();

        assert_eq!(survey, reloaded);
    }
}
