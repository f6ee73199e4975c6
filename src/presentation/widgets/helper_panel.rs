//! Helper panel for the hub dashboard.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Assistant pane rendered next to the module dashboard.
///
/// Shows contextual guidance for the selected module and the key hints for
/// the dashboard itself.
pub struct HelperPanel<'a> {
    selected_module: Option<&'a str>,
}

impl<'a> HelperPanel<'a> {
    /// Creates a helper panel for the currently selected module.
    #[must_use]
    pub const fn new(selected_module: Option<&'a str>) -> Self {
        Self { selected_module }
    }
}

impl Widget for HelperPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Helper ");

        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(Span::styled(
                "Need a hand?",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        match self.selected_module {
            Some(name) => {
                lines.push(Line::from(vec![
                    Span::raw("Selected: "),
                    Span::styled(name.to_string(), Style::default().fg(Color::Green)),
                ]));
                lines.push(Line::from("Press Enter to open it in your browser."));
            }
            None => {
                lines.push(Line::from("No modules are enabled for this account."));
                lines.push(Line::from("Contact a platform admin to request access."));
            }
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Up/Down: select | Enter: open | r: refresh | L: logout | q: quit",
            Style::default().fg(Color::DarkGray),
        )));

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
