use crate::nav::window::PageWindow;
use crate::nav::Message;

/// Navigation intents, resolved from raw keys by the configured bindings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    Down,
    Up,
    Select,
    Back,
    Exit,
}

/// How a select screen resolved. At most one outcome per screen entry;
/// the engine never navigates on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    Selected(usize),
    Back,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionStyle {
    Normal,
    Warning,
    Danger,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub style: OptionStyle,
}

impl SelectOption {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style: OptionStyle::Normal,
        }
    }

    pub fn warning(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style: OptionStyle::Warning,
        }
    }

    pub fn danger(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style: OptionStyle::Danger,
        }
    }
}

/// State of one select screen: a title, informational messages, a prompt
/// line, and a vertical list of options with a single highlighted entry.
/// Built fresh on every screen entry; pagination follows the terminal size
/// via `layout`.
pub struct SelectState {
    pub title: String,
    pub prompt: String,
    pub messages: Vec<Message>,
    pub options: Vec<SelectOption>,
    pub selected: usize,
    window: PageWindow,
}

impl SelectState {
    pub fn new(
        title: impl Into<String>,
        prompt: impl Into<String>,
        messages: Vec<Message>,
        options: Vec<SelectOption>,
    ) -> Self {
        let len = options.len();
        Self {
            title: title.into(),
            prompt: prompt.into(),
            messages,
            options,
            selected: 0,
            window: PageWindow::new(len, len.max(1)),
        }
    }

    /// Recompute pagination for the rows currently available to options.
    pub fn layout(&mut self, avail_rows: usize) {
        self.window.resize(self.options.len(), avail_rows, self.selected);
    }

    pub fn window(&self) -> &PageWindow {
        &self.window
    }

    /// Apply one navigation action. Down/up clamp at the list edges (no
    /// wraparound) and keep the window over the selection; select, back and
    /// exit resolve an outcome for the caller to dispatch.
    pub fn handle(&mut self, action: NavAction) -> Option<SelectOutcome> {
        match action {
            NavAction::Down => {
                if self.selected + 1 < self.options.len() {
                    self.selected += 1;
                    self.window.scroll_to(self.selected);
                }
                None
            }
            NavAction::Up => {
                if self.selected > 0 {
                    self.selected -= 1;
                    self.window.scroll_to(self.selected);
                }
                None
            }
            NavAction::Select => Some(SelectOutcome::Selected(self.selected)),
            NavAction::Back => Some(SelectOutcome::Back),
            NavAction::Exit => Some(SelectOutcome::Quit),
        }
    }
}
