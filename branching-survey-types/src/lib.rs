//! Core types for the branching-survey crate.
//!
//! This crate provides the foundational types for defining phased surveys:
//! - `SurveyDefinition` and `Phase` - The static question graph
//! - `Question`, `QuestionKind`, `Condition` - Individual questions and their visibility rules
//! - `Answers` and `AnswerValue` - The ordered store of recorded answers
//! - `SurveyProgress` - Navigation and completion state

mod answer_value;
pub use answer_value::AnswerValue;

mod answers;
pub use answers::{Answer, Answers};

mod condition;
pub use condition::{Condition, ConditionOperator, ConditionValue};

mod question;
pub use question::{Question, QuestionKind, QuestionOption, RangeConfig};

mod survey_definition;
pub use survey_definition::{Phase, SurveyDefinition};

mod progress;
pub use progress::SurveyProgress;

mod error;
pub use error::DefinitionError;
