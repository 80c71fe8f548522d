use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};

use crate::nav::{OptionStyle, SelectState};
use crate::ui::components::message_line;
use crate::ui::theme::Theme;

/// Full-screen renderer for a select screen: title bar, messages, prompt,
/// the visible slice of options with ellipsis rows at paging boundaries,
/// and a key-hint footer.
pub struct SelectScreen<'a> {
    pub state: &'a SelectState,
    pub theme: &'a Theme,
    pub footer: &'a str,
}

impl Widget for SelectScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let [title_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        Paragraph::new(self.state.title.as_str())
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(colors.header_fg())
                    .bg(colors.header_bg())
                    .add_modifier(Modifier::BOLD),
            )
            .render(title_area, buf);

        let mut lines: Vec<Line> = self
            .state
            .messages
            .iter()
            .map(|message| message_line(message, self.theme))
            .collect();
        lines.push(Line::styled(
            self.state.prompt.as_str(),
            Style::default()
                .fg(colors.fg())
                .add_modifier(Modifier::BOLD),
        ));

        let window = self.state.window();
        let ellipsis_style = Style::default().fg(colors.muted());
        if window.leading_ellipsis() {
            lines.push(Line::styled("  ...", ellipsis_style));
        }
        for index in window.start()..window.stop() {
            let option = &self.state.options[index];
            let selected = index == self.state.selected;
            let prefix = if selected { "> " } else { "  " };
            let mut style = match option.style {
                OptionStyle::Normal => Style::default().fg(colors.fg()),
                OptionStyle::Warning => Style::default().fg(colors.warning()),
                OptionStyle::Danger => Style::default().fg(colors.error()),
            };
            if selected {
                style = style.add_modifier(Modifier::REVERSED);
            }
            lines.push(Line::styled(format!("{prefix}{}", option.label), style));
        }
        if window.trailing_ellipsis() {
            lines.push(Line::styled("  ...", ellipsis_style));
        }

        Paragraph::new(lines).render(body_area, buf);

        Paragraph::new(self.footer)
            .style(Style::default().fg(colors.muted()))
            .render(footer_area, buf);
    }
}
