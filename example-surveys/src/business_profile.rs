use branching_survey::{
    Condition, ConditionOperator, Phase, Question, QuestionKind, QuestionOption, RangeConfig,
    SurveyDefinition,
};

/// A three-phase business profile survey.
///
/// Phase 2 branches on the customer type chosen in phase 1, and phase 3
/// only asks about hiring when the team size answer from phase 2 is large
/// enough — a cross-phase condition.
pub fn business_profile() -> SurveyDefinition {
    SurveyDefinition::new(vec![
        Phase::new(
            1,
            "Business Basics",
            vec![
                Question::new(1, "What is your company called?", QuestionKind::Text),
                Question::new(2, "Who do you sell to?", QuestionKind::SingleChoice).with_options(
                    vec![
                        QuestionOption::new("b2b", "Businesses"),
                        QuestionOption::new("b2c", "Consumers"),
                        QuestionOption::new("both", "Both"),
                    ],
                ),
            ],
        ),
        Phase::new(
            2,
            "Customers & Team",
            vec![
                Question::new(3, "Which industries do your business customers come from?", QuestionKind::MultiChoice)
                    .with_options(vec![
                        QuestionOption::new("manufacturing", "Manufacturing"),
                        QuestionOption::new("retail", "Retail"),
                        QuestionOption::new("software", "Software"),
                        QuestionOption::new("services", "Services"),
                    ])
                    .with_conditions(vec![Condition::new(
                        2,
                        ConditionOperator::Includes,
                        vec!["b2b", "both"],
                    )]),
                Question::new(4, "How do consumers find you?", QuestionKind::Dropdown)
                    .with_options(vec![
                        QuestionOption::new("ads", "Advertising"),
                        QuestionOption::new("word-of-mouth", "Word of mouth"),
                        QuestionOption::new("retail", "Retail partners"),
                    ])
                    .with_conditions(vec![Condition::new(
                        2,
                        ConditionOperator::NotEquals,
                        "b2b",
                    )]),
                Question::new(5, "How many people work at your company?", QuestionKind::Range)
                    .with_range(RangeConfig::new(1.0, 500.0).with_step(1.0).with_unit("employees")),
            ],
        ),
        Phase::new(
            3,
            "Outlook",
            vec![
                Question::new(6, "Are you hiring this year?", QuestionKind::SingleChoice)
                    .with_options(vec![
                        QuestionOption::new("yes", "Yes"),
                        QuestionOption::new("no", "No"),
                    ])
                    .with_conditions(vec![Condition::new(
                        5,
                        ConditionOperator::GreaterThan,
                        10.0,
                    )]),
                Question::new(7, "What is your biggest challenge right now?", QuestionKind::Multiline),
            ],
        ),
    ])
}
