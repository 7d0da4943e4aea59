//! Lead input normalization and the form-level enums attached to a submission.

use serde::{Deserialize, Serialize};

/// Hard cap on cleaned lead text, matching the original form limit.
pub const MAX_LEAD_CHARS: usize = 500;

/// CRM-style tag attached to a saved lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tag {
    #[default]
    None,
    Hot,
    #[serde(rename = "Follow-up")]
    FollowUp,
    Cold,
    Replied,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::None => "None",
            Tag::Hot => "Hot",
            Tag::FollowUp => "Follow-up",
            Tag::Cold => "Cold",
            Tag::Replied => "Replied",
        }
    }
}

/// Tone/style of the generated openers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Style {
    #[default]
    Friendly,
    Professional,
    Funny,
    Bold,
    Casual,
}

impl Style {
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Friendly => "Friendly",
            Style::Professional => "Professional",
            Style::Funny => "Funny",
            Style::Bold => "Bold",
            Style::Casual => "Casual",
        }
    }

    /// Lowercase adjective used inside the prompt text.
    pub fn prompt_adjective(&self) -> &'static str {
        match self {
            Style::Friendly => "friendly",
            Style::Professional => "professional",
            Style::Funny => "funny",
            Style::Bold => "bold",
            Style::Casual => "casual",
        }
    }
}

/// Requested opener length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Length {
    Short,
    #[default]
    Medium,
    Long,
}

impl Length {
    pub fn as_str(&self) -> &'static str {
        match self {
            Length::Short => "Short",
            Length::Medium => "Medium",
            Length::Long => "Long",
        }
    }

    /// Sentence-count guidance injected into the prompt.
    pub fn guidance(&self) -> &'static str {
        match self {
            Length::Short => "one punchy sentence",
            Length::Medium => "two to three sentences",
            Length::Long => "a short paragraph of four to five sentences",
        }
    }
}

/// Normalizes raw lead text: strips control characters and collapses all
/// whitespace runs (including newlines) to single spaces.
pub fn clean_lead(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .filter(|c| !c.is_control())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
