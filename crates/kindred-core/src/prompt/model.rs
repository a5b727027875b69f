//! Prompt domain model.

use serde::{Deserialize, Serialize};

/// One pre-authored question with a closed set of selectable choices.
///
/// Prompts are defined once when the catalog is built and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    /// Stable identifier referenced by stored responses.
    pub id: u32,
    /// The question shown to the user.
    pub text: String,
    /// Display category (e.g. "Gratitude").
    pub category: String,
    /// Ordered list of accepted answers.
    pub choices: Vec<String>,
}

impl Prompt {
    pub fn new(
        id: u32,
        text: impl Into<String>,
        category: impl Into<String>,
        choices: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            category: category.into(),
            choices: choices.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if `value` is exactly one of this prompt's choices.
    pub fn accepts(&self, value: &str) -> bool {
        self.choices.iter().any(|choice| choice == value)
    }

    /// Looks up a choice by its zero-based position.
    pub fn choice(&self, index: usize) -> Option<&str> {
        self.choices.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_exact_match_only() {
        let prompt = Prompt::new(1, "Tea or coffee?", "Taste", ["Tea", "Coffee"]);
        assert!(prompt.accepts("Tea"));
        assert!(!prompt.accepts("tea"));
        assert!(!prompt.accepts("Tea "));
        assert_eq!(prompt.choice(1), Some("Coffee"));
        assert_eq!(prompt.choice(2), None);
    }
}
