use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{DefinitionError, Question};

/// A named, ordered group of questions presented as one step of the survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    /// Phase id, sequential starting at 1.
    id: u32,

    /// Display name of the phase.
    name: String,

    /// The questions of this phase, in presentation order.
    questions: Vec<Question>,
}

impl Phase {
    /// Create a new phase.
    pub fn new(id: u32, name: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            id,
            name: name.into(),
            questions,
        }
    }

    /// Get the phase id.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Get the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Look up a question of this phase by id.
    pub fn question(&self, question_id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == question_id)
    }
}

/// The top-level structure containing all phases of a survey.
///
/// A survey definition is static: it is loaded once from configuration and
/// never mutated while answers accumulate. Question ids are unique across
/// the whole survey, so a condition may reference a question in any phase,
/// including earlier ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyDefinition {
    phases: Vec<Phase>,
}

impl SurveyDefinition {
    /// Create a survey definition from its phases.
    pub fn new(phases: Vec<Phase>) -> Self {
        Self { phases }
    }

    /// Parse a definition from JSON and check its invariants.
    ///
    /// # Errors
    ///
    /// Returns `DefinitionError::Parse` on malformed JSON, otherwise
    /// whatever [`SurveyDefinition::validate`] reports.
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        let definition: Self = serde_json::from_str(json)?;
        definition.validate()?;
        Ok(definition)
    }

    /// Check the structural invariants of this definition: question ids
    /// unique across all phases, phase ids sequential starting at 1.
    ///
    /// # Errors
    ///
    /// Returns `DefinitionError::DuplicateQuestionId` or
    /// `DefinitionError::PhaseOutOfSequence` on the first violation found.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        let mut seen = HashSet::new();
        for (index, phase) in self.phases.iter().enumerate() {
            let expected = index as u32 + 1;
            if phase.id() != expected {
                return Err(DefinitionError::PhaseOutOfSequence {
                    expected,
                    actual: phase.id(),
                });
            }
            for question in phase.questions() {
                if !seen.insert(question.id()) {
                    return Err(DefinitionError::DuplicateQuestionId(question.id()));
                }
            }
        }
        Ok(())
    }

    /// Get the phases in order.
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// Look up a phase by id.
    pub fn phase(&self, phase_id: u32) -> Option<&Phase> {
        self.phases.iter().find(|p| p.id() == phase_id)
    }

    /// Look up a question anywhere in the survey by id.
    pub fn question(&self, question_id: u32) -> Option<&Question> {
        self.phases.iter().find_map(|p| p.question(question_id))
    }

    /// Get the number of phases.
    pub fn phase_count(&self) -> u32 {
        self.phases.len() as u32
    }

    /// Check if the survey has no phases.
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }
}
