use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{AnswerValue, Answers, SurveyDefinition};

/// Navigation and completion state for one run through a survey.
///
/// All mutating operations are total: they never fail and never panic.
/// Bounds that the operations themselves do not enforce (a question index
/// within the visible list, a phase id that exists in the definition) are
/// the caller's precondition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyProgress {
    /// Number of phases in the survey this progress tracks.
    phase_count: u32,

    /// Current phase id, kept within `[1, phase_count]` by
    /// `advance_phase`/`retreat_phase`.
    current_phase: u32,

    /// Index into the *visible* question list of the current phase.
    current_question_index: usize,

    /// All recorded answers.
    answers: Answers,

    /// Explicitly set per-phase completion flags.
    phase_completion: BTreeMap<u32, bool>,

    /// Whether the results view is currently shown.
    show_results: bool,
}

impl SurveyProgress {
    /// Create fresh progress for a survey with the given number of phases.
    pub fn new(phase_count: u32) -> Self {
        Self {
            phase_count,
            current_phase: 1,
            current_question_index: 0,
            answers: Answers::new(),
            phase_completion: BTreeMap::new(),
            show_results: false,
        }
    }

    /// Create fresh progress sized for the given definition.
    pub fn for_survey(definition: &SurveyDefinition) -> Self {
        Self::new(definition.phase_count())
    }

    /// Record an answer for a question in a phase, replacing any prior
    /// answer for the same pair.
    pub fn record_answer(&mut self, question_id: u32, value: impl Into<AnswerValue>, phase_id: u32) {
        self.answers.record(question_id, phase_id, value);
    }

    /// Jump to a phase. The question index resets whenever the phase
    /// actually changes.
    pub fn set_current_phase(&mut self, phase_id: u32) {
        if phase_id != self.current_phase {
            self.current_question_index = 0;
        }
        self.current_phase = phase_id;
    }

    /// Set the index into the current phase's visible question list.
    pub fn set_question_index(&mut self, index: usize) {
        self.current_question_index = index;
    }

    /// Mark a phase complete or incomplete. The engine never sets this
    /// itself; the caller flips it once `is_phase_complete` is observed.
    pub fn set_phase_completion(&mut self, phase_id: u32, completed: bool) {
        self.phase_completion.insert(phase_id, completed);
    }

    /// Show or hide the results view.
    pub fn set_show_results(&mut self, show: bool) {
        self.show_results = show;
    }

    /// Move to the next phase, if there is one. Resets the question index.
    pub fn advance_phase(&mut self) {
        if self.current_phase < self.phase_count {
            self.current_phase += 1;
            self.current_question_index = 0;
        }
    }

    /// Move back to the previous phase, if there is one. Resets the
    /// question index.
    pub fn retreat_phase(&mut self) {
        if self.current_phase > 1 {
            self.current_phase -= 1;
            self.current_question_index = 0;
        }
    }

    /// Restore the initial state: phase 1, index 0, no answers, no
    /// completion flags, results hidden. The phase count is kept.
    pub fn reset(&mut self) {
        self.current_phase = 1;
        self.current_question_index = 0;
        self.answers.clear();
        self.phase_completion.clear();
        self.show_results = false;
    }

    /// Get the number of phases.
    pub fn phase_count(&self) -> u32 {
        self.phase_count
    }

    /// Get the current phase id.
    pub fn current_phase(&self) -> u32 {
        self.current_phase
    }

    /// Get the current index into the visible question list.
    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }

    /// Get the recorded answers.
    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// Check whether a phase has been explicitly marked complete.
    pub fn is_phase_marked_complete(&self, phase_id: u32) -> bool {
        self.phase_completion.get(&phase_id).copied().unwrap_or(false)
    }

    /// Check whether the results view is shown.
    pub fn show_results(&self) -> bool {
        self.show_results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_and_retreat_stay_within_bounds() {
        let mut progress = SurveyProgress::new(2);
        assert_eq!(progress.current_phase(), 1);

        progress.retreat_phase();
        assert_eq!(progress.current_phase(), 1);

        progress.advance_phase();
        assert_eq!(progress.current_phase(), 2);

        progress.advance_phase();
        assert_eq!(progress.current_phase(), 2);

        progress.retreat_phase();
        assert_eq!(progress.current_phase(), 1);
    }

    #[test]
    fn phase_changes_reset_the_question_index() {
        let mut progress = SurveyProgress::new(3);
        progress.set_question_index(4);

        progress.advance_phase();
        assert_eq!(progress.current_question_index(), 0);

        progress.set_question_index(2);
        progress.set_current_phase(3);
        assert_eq!(progress.current_question_index(), 0);

        // Setting the same phase again keeps the index.
        progress.set_question_index(1);
        progress.set_current_phase(3);
        assert_eq!(progress.current_question_index(), 1);
    }

    #[test]
    fn completion_flags_default_to_false() {
        let mut progress = SurveyProgress::new(2);
        assert!(!progress.is_phase_marked_complete(1));

        progress.set_phase_completion(1, true);
        assert!(progress.is_phase_marked_complete(1));
        assert!(!progress.is_phase_marked_complete(2));
    }

    #[test]
    fn reset_restores_the_initial_state() {
        let mut progress = SurveyProgress::new(3);
        progress.record_answer(1, "yes", 1);
        progress.advance_phase();
        progress.set_question_index(2);
        progress.set_phase_completion(1, true);
        progress.set_show_results(true);

        progress.reset();

        assert_eq!(progress.current_phase(), 1);
        assert_eq!(progress.current_question_index(), 0);
        assert!(progress.answers().is_empty());
        assert!(!progress.is_phase_marked_complete(1));
        assert!(!progress.show_results());
        assert_eq!(progress.phase_count(), 3);
    }
}
