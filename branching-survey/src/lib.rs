//! # branching-survey
//!
//! Conditional visibility and progress aggregation for multi-phase,
//! branching questionnaires. Presentation-agnostic.
//!
//! A survey is a static [`SurveyDefinition`]: ordered phases of questions,
//! where each question may carry conditions referencing earlier answers.
//! The engine takes that definition plus the accumulated [`Answers`] and
//! decides which questions are currently visible, whether a phase or the
//! whole survey is complete, and what percentage to display. Form widgets,
//! styling and routing are the caller's concern.
//!
//! ## Usage
//!
//! ```rust
//! use branching_survey::{
//!     Condition, ConditionOperator, Phase, Question, QuestionKind, QuestionOption,
//!     SurveyDefinition, SurveyProgress, phase_completion_percentage, visible_questions,
//! };
//!
//! let phase = Phase::new(
//!     1,
//!     "Business Basics",
//!     vec![
//!         Question::new(1, "Who do you sell to?", QuestionKind::SingleChoice).with_options(vec![
//!             QuestionOption::new("b2b", "Businesses"),
//!             QuestionOption::new("b2c", "Consumers"),
//!         ]),
//!         Question::new(2, "How many business customers?", QuestionKind::Range)
//!             .with_conditions(vec![Condition::new(1, ConditionOperator::Equals, "b2b")]),
//!     ],
//! );
//! let survey = SurveyDefinition::new(vec![phase]);
//! let mut progress = SurveyProgress::for_survey(&survey);
//!
//! // Only the unconditional question is visible at first.
//! let visible = visible_questions(survey.phases()[0].questions(), progress.answers(), 1);
//! assert_eq!(visible.len(), 1);
//!
//! // Answering it reveals the dependent question.
//! progress.record_answer(1, "b2b", 1);
//! let visible = visible_questions(survey.phases()[0].questions(), progress.answers(), 1);
//! assert_eq!(visible.len(), 2);
//! assert_eq!(
//!     phase_completion_percentage(survey.phases()[0].questions(), progress.answers(), 1),
//!     50
//! );
//! ```
//!
//! All engine functions are pure: they recompute from the definition and
//! the answer store on every call, with no cached derived state. The only
//! side effect anywhere is a `tracing` warning when a condition's value
//! does not match the shape its operator requires.

// Re-export all types from branching-survey-types
pub use branching_survey_types::*;

mod eval;
pub use eval::evaluate;

mod visibility;
pub use visibility::{is_visible, visible_questions};

mod completion;
pub use completion::{
    answer_for, is_phase_complete, overall_completion_percentage, phase_completion_percentage,
};
