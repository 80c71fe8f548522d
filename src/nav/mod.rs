pub mod prompt;
pub mod select;
pub mod window;

pub use prompt::{PromptOutcome, PromptState};
pub use select::{NavAction, OptionStyle, SelectOption, SelectOutcome, SelectState};
pub use window::PageWindow;

/// An informational line shown above a screen's prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageStyle {
    Plain,
    Success,
    Warning,
    Error,
    Muted,
}

impl Message {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: MessageStyle::Plain,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: MessageStyle::Success,
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: MessageStyle::Warning,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: MessageStyle::Error,
        }
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: MessageStyle::Muted,
        }
    }
}
