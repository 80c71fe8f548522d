pub mod prompt_screen;
pub mod select_screen;

pub use prompt_screen::PromptScreen;
pub use select_screen::SelectScreen;

use ratatui::style::{Modifier, Style};
use ratatui::text::Line;

use crate::nav::{Message, MessageStyle};
use crate::ui::theme::Theme;

pub(crate) fn message_line<'a>(message: &'a Message, theme: &Theme) -> Line<'a> {
    let style = match message.style {
        MessageStyle::Plain => Style::default().fg(theme.colors.fg()),
        MessageStyle::Success => Style::default().fg(theme.colors.success()),
        MessageStyle::Warning => Style::default().fg(theme.colors.warning()),
        MessageStyle::Error => Style::default()
            .fg(theme.colors.error())
            .add_modifier(Modifier::BOLD),
        MessageStyle::Muted => Style::default()
            .fg(theme.colors.muted())
            .add_modifier(Modifier::ITALIC),
    };
    Line::styled(message.text.as_str(), style)
}
