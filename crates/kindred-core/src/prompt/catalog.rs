//! The ordered prompt table driving a conversation.

use super::model::Prompt;
use crate::error::{KindredError, Result};
use std::collections::HashSet;
use std::sync::Arc;

/// An immutable, validated, ordered list of prompts.
///
/// Cloning is cheap; all clones share the same table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptCatalog {
    prompts: Arc<[Prompt]>,
}

impl PromptCatalog {
    /// Builds a catalog from an ordered list of prompts.
    ///
    /// # Errors
    ///
    /// Returns `KindredError::Config` if the list is empty, contains a
    /// duplicate id, or contains a prompt without choices.
    pub fn new(prompts: Vec<Prompt>) -> Result<Self> {
        if prompts.is_empty() {
            return Err(KindredError::config("prompt catalog must not be empty"));
        }

        let mut seen = HashSet::with_capacity(prompts.len());
        for prompt in &prompts {
            if !seen.insert(prompt.id) {
                return Err(KindredError::config(format!(
                    "duplicate prompt id {}",
                    prompt.id
                )));
            }
            if prompt.choices.is_empty() {
                return Err(KindredError::config(format!(
                    "prompt {} has no choices",
                    prompt.id
                )));
            }
        }

        Ok(Self {
            prompts: prompts.into(),
        })
    }

    /// The built-in conversation: five questions adapted from the
    /// "36 Questions to Fall in Love".
    pub fn builtin() -> Self {
        Self {
            prompts: builtin_prompts().into(),
        }
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Prompt> {
        self.prompts.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Prompt> {
        self.prompts.iter()
    }

    /// Prompt ids in sequence order.
    pub fn ids(&self) -> Vec<u32> {
        self.prompts.iter().map(|p| p.id).collect()
    }
}

impl Default for PromptCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_prompts() -> Vec<Prompt> {
    vec![
        Prompt::new(
            1,
            "What would constitute a 'perfect' day for you?",
            "Personal Values",
            [
                "A day filled with meaningful conversations and deep connections",
                "An adventure exploring new places and experiences",
                "A peaceful day at home with loved ones",
                "A productive day achieving important goals",
            ],
        ),
        Prompt::new(
            2,
            "For what in your life do you feel most grateful?",
            "Gratitude",
            [
                "My family and close relationships",
                "My health and well-being",
                "The opportunities I've been given",
                "The ability to learn and grow",
            ],
        ),
        Prompt::new(
            3,
            "If you could change anything about the way you were raised, what would it be?",
            "Family",
            [
                "More open communication about emotions",
                "More encouragement to take risks",
                "More quality time together",
                "Nothing, I'm grateful for my upbringing",
            ],
        ),
        Prompt::new(
            4,
            "What is your most treasured memory?",
            "Memories",
            [
                "A special moment with family",
                "An achievement I worked hard for",
                "A spontaneous adventure",
                "A quiet moment of realization",
            ],
        ),
        Prompt::new(
            5,
            "What does friendship mean to you?",
            "Relationships",
            [
                "Unconditional support and loyalty",
                "Shared experiences and adventures",
                "Deep understanding and acceptance",
                "Mutual growth and inspiration",
            ],
        ),
    ]
}
