//! Canned prompts behind the quick action buttons

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    Summarize,
    Compare,
    Explain,
    Quiz,
}

impl QuickAction {
    pub fn all() -> [QuickAction; 4] {
        [
            QuickAction::Summarize,
            QuickAction::Compare,
            QuickAction::Explain,
            QuickAction::Quiz,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            QuickAction::Summarize => "summarize",
            QuickAction::Compare => "compare",
            QuickAction::Explain => "explain",
            QuickAction::Quiz => "quiz",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            QuickAction::Summarize => "Summarize",
            QuickAction::Compare => "Compare",
            QuickAction::Explain => "Explain",
            QuickAction::Quiz => "Quiz me",
        }
    }

    /// Text placed into the input before sending
    pub fn prompt(&self) -> &'static str {
        match self {
            QuickAction::Summarize => "Please provide a comprehensive summary of the main document.",
            QuickAction::Compare => "Compare two concepts from my materials.",
            QuickAction::Explain => "Explain the most complex topic in my documents.",
            QuickAction::Quiz => "Generate a quiz based on my study materials.",
        }
    }
}
