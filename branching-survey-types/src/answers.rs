use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::AnswerValue;

/// A recorded answer for one question in one phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(rename = "questionId")]
    question_id: u32,

    #[serde(rename = "phaseId")]
    phase_id: u32,

    value: AnswerValue,

    timestamp: DateTime<Utc>,
}

impl Answer {
    /// Create an answer stamped with the current time.
    pub fn new(question_id: u32, phase_id: u32, value: impl Into<AnswerValue>) -> Self {
        Self {
            question_id,
            phase_id,
            value: value.into(),
            timestamp: Utc::now(),
        }
    }

    /// Get the answered question's id.
    pub fn question_id(&self) -> u32 {
        self.question_id
    }

    /// Get the phase the answer was recorded in.
    pub fn phase_id(&self) -> u32 {
        self.phase_id
    }

    /// Get the recorded value.
    pub fn value(&self) -> &AnswerValue {
        &self.value
    }

    /// Get the time the answer was (last) recorded.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// The ordered collection of recorded answers.
///
/// Holds at most one answer per `(question, phase)` pair. Iteration order is
/// insertion order: re-recording a pair replaces the entry in place, so an
/// answer keeps its original position. That order is observable through
/// [`Answers::first_up_to_phase`] and must not be changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers {
    entries: Vec<Answer>,
}

impl Answers {
    /// Create a new empty collection.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record an answer, replacing any existing answer for the same
    /// `(question, phase)` pair in place, else appending.
    pub fn record(&mut self, question_id: u32, phase_id: u32, value: impl Into<AnswerValue>) {
        let answer = Answer::new(question_id, phase_id, value);
        match self
            .entries
            .iter_mut()
            .find(|a| a.question_id == question_id && a.phase_id == phase_id)
        {
            Some(existing) => *existing = answer,
            None => self.entries.push(answer),
        }
    }

    /// Exact-pair lookup of a recorded value.
    pub fn value_for(&self, question_id: u32, phase_id: u32) -> Option<&AnswerValue> {
        self.entries
            .iter()
            .find(|a| a.question_id == question_id && a.phase_id == phase_id)
            .map(Answer::value)
    }

    /// Check whether an answer exists for the exact `(question, phase)` pair.
    pub fn contains(&self, question_id: u32, phase_id: u32) -> bool {
        self.value_for(question_id, phase_id).is_some()
    }

    /// The answer condition evaluation sees for a question: the first stored
    /// answer with a matching question id and `phase_id <= current_phase`.
    ///
    /// "First stored", not "latest phase": if the same question id was
    /// somehow answered in several phases, whichever entry was recorded
    /// first wins. This mirrors the original store's iteration order and may
    /// well be an accident of it rather than a deliberate choice; it is kept
    /// as-is so that downstream visibility decisions do not shift.
    pub fn first_up_to_phase(&self, question_id: u32, current_phase: u32) -> Option<&Answer> {
        self.entries
            .iter()
            .find(|a| a.question_id == question_id && a.phase_id <= current_phase)
    }

    /// Get all answers recorded in the given phase, in store order.
    pub fn for_phase(&self, phase_id: u32) -> impl Iterator<Item = &Answer> {
        self.entries.iter().filter(move |a| a.phase_id == phase_id)
    }

    /// Get an iterator over all answers in store order.
    pub fn iter(&self) -> impl Iterator<Item = &Answer> {
        self.entries.iter()
    }

    /// Get the number of recorded answers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no recorded answers.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove all recorded answers.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl IntoIterator for Answers {
    type Item = Answer;
    type IntoIter = std::vec::IntoIter<Answer>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Answers {
    type Item = &'a Answer;
    type IntoIter = std::slice::Iter<'a, Answer>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_and_lookup() {
        let mut answers = Answers::new();
        answers.record(1, 1, "yes");
        answers.record(2, 1, vec!["a", "b"]);

        assert_eq!(answers.value_for(1, 1), Some(&AnswerValue::Text("yes".into())));
        assert!(answers.contains(2, 1));
        assert_eq!(answers.value_for(1, 2), None);
    }

    #[test]
    fn re_recording_replaces_in_place() {
        let mut answers = Answers::new();
        answers.record(1, 1, "first");
        answers.record(2, 1, "other");
        answers.record(1, 1, "second");

        assert_eq!(answers.len(), 2);
        let entries: Vec<_> = answers.iter().map(Answer::question_id).collect();
        assert_eq!(entries, vec![1, 2]);
        assert_eq!(answers.value_for(1, 1), Some(&AnswerValue::Text("second".into())));
    }

    #[test]
    fn first_up_to_phase_respects_store_order_not_phase_order() {
        let mut answers = Answers::new();
        answers.record(7, 2, "recorded-first");
        answers.record(7, 1, "recorded-second");

        // Phase 2 already stored when the phase-1 entry arrives: the earlier
        // *store* entry wins even though its phase is later.
        let found = answers.first_up_to_phase(7, 3).unwrap();
        assert_eq!(found.value(), &AnswerValue::Text("recorded-first".into()));

        // A phase bound below the first entry's phase skips it.
        let found = answers.first_up_to_phase(7, 1).unwrap();
        assert_eq!(found.value(), &AnswerValue::Text("recorded-second".into()));
    }

    #[test]
    fn first_up_to_phase_misses_future_phases() {
        let mut answers = Answers::new();
        answers.record(3, 2, "later");

        assert!(answers.first_up_to_phase(3, 1).is_none());
        assert!(answers.first_up_to_phase(3, 2).is_some());
    }
}
