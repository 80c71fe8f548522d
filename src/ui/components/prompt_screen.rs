use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::nav::PromptState;
use crate::ui::components::message_line;
use crate::ui::theme::Theme;

/// Full-screen renderer for a line-input screen: title bar, messages, the
/// prompt label with the editable line and a block cursor, and a footer.
pub struct PromptScreen<'a> {
    pub state: &'a PromptState,
    pub theme: &'a Theme,
    pub footer: &'a str,
}

impl Widget for PromptScreen<'_> {
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

        let (before, cursor, after) = self.state.render_parts();
        let cursor_style = Style::default()
            .fg(colors.fg())
            .add_modifier(Modifier::REVERSED);
        let mut input_line = vec![
            Span::styled(
                self.state.prompt.as_str(),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(before, Style::default().fg(colors.fg())),
        ];
        match cursor {
            Some(ch) => {
                input_line.push(Span::styled(ch.to_string(), cursor_style));
                input_line.push(Span::styled(after, Style::default().fg(colors.fg())));
            }
            // Cursor sits past the end of the text: render it on a space.
            None => input_line.push(Span::styled(" ", cursor_style)),
        }
        lines.push(Line::from(input_line));

        Paragraph::new(lines).render(body_area, buf);

        Paragraph::new(self.footer)
            .style(Style::default().fg(colors.muted()))
            .render(footer_area, buf);
    }
}
