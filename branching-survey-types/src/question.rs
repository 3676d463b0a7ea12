use serde::{Deserialize, Serialize};

use crate::Condition;

/// A single question in a phased survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Unique id of this question within the whole survey.
    id: u32,

    /// The prompt text shown to the user.
    #[serde(rename = "question")]
    text: String,

    /// The kind of input widget this question renders as.
    #[serde(rename = "type")]
    kind: QuestionKind,

    /// Selectable options (empty for text and range kinds).
    #[serde(default)]
    options: Vec<QuestionOption>,

    /// Visibility conditions, combined with AND. Empty means always visible.
    #[serde(default)]
    conditions: Vec<Condition>,

    /// Range descriptor for `Range` questions.
    #[serde(default, rename = "rangeConfig", skip_serializing_if = "Option::is_none")]
    range_config: Option<RangeConfig>,
}

impl Question {
    /// Create a new question with no options and no conditions.
    pub fn new(id: u32, text: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id,
            text: text.into(),
            kind,
            options: Vec::new(),
            conditions: Vec::new(),
            range_config: None,
        }
    }

    /// Set the selectable options.
    pub fn with_options(mut self, options: Vec<QuestionOption>) -> Self {
        self.options = options;
        self
    }

    /// Set the visibility conditions.
    pub fn with_conditions(mut self, conditions: Vec<Condition>) -> Self {
        self.conditions = conditions;
        self
    }

    /// Set the range descriptor.
    pub fn with_range(mut self, range_config: RangeConfig) -> Self {
        self.range_config = Some(range_config);
        self
    }

    /// Get the question id.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Get the prompt text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the question kind.
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    /// Get the selectable options.
    pub fn options(&self) -> &[QuestionOption] {
        &self.options
    }

    /// Get the visibility conditions.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Get the range descriptor, if any.
    pub fn range_config(&self) -> Option<&RangeConfig> {
        self.range_config.as_ref()
    }
}

/// The kind of question, determining the input widget and the shape of its
/// answer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    /// Choose exactly one option (radio group). Answer is a single string.
    SingleChoice,

    /// Choose any number of options (checkboxes). Answer is a string list.
    MultiChoice,

    /// Choose exactly one option from a dropdown. Answer is a single string.
    Dropdown,

    /// Single-line free text. Answer is a single string.
    Text,

    /// Multi-line free text. Answer is a single string.
    Multiline,

    /// A numeric value on a configured range. Answer is a number.
    Range,
}

impl QuestionKind {
    /// Check if this kind presents a list of options.
    pub fn has_options(self) -> bool {
        matches!(self, Self::SingleChoice | Self::MultiChoice | Self::Dropdown)
    }

    /// Check if this kind produces a multi-value answer.
    pub fn is_multi(self) -> bool {
        self == Self::MultiChoice
    }
}

/// A selectable option: the stored value and the label shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub value: String,
    pub label: String,
}

impl QuestionOption {
    /// Create a new option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Bounds and presentation hints for a `Range` question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeConfig {
    pub min: f64,
    pub max: f64,

    /// Slider step size, if the widget should snap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,

    /// Display unit, e.g. "€" or "employees".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl RangeConfig {
    /// Create a range descriptor with the given bounds.
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            step: None,
            unit: None,
        }
    }

    /// Set the step size.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    /// Set the display unit.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}
