//! Hub dashboard screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use crate::domain::entities::ModuleSummary;
use crate::presentation::widgets::{HelperPanel, StatusBar, StatusLevel};

/// Result of a key event on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    /// Nothing to do.
    None,
    /// Open the given module URL externally.
    OpenModule(String),
    /// Re-fetch the module list.
    Refresh,
}

/// Module dashboard plus helper panel.
pub struct DashboardScreen {
    modules: Vec<ModuleSummary>,
    list_state: ListState,
}

impl DashboardScreen {
    /// Creates the dashboard for the fetched module list.
    #[must_use]
    pub fn new(modules: Vec<ModuleSummary>) -> Self {
        let mut list_state = ListState::default();
        if !modules.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            modules,
            list_state,
        }
    }

    /// Returns the listed modules.
    #[must_use]
    pub fn modules(&self) -> &[ModuleSummary] {
        &self.modules
    }

    fn selected(&self) -> Option<&ModuleSummary> {
        self.list_state
            .selected()
            .and_then(|index| self.modules.get(index))
    }

    fn move_selection(&mut self, delta: i64) {
        if self.modules.is_empty() {
            return;
        }
        #[allow(clippy::cast_possible_wrap)]
        let current = self.list_state.selected().unwrap_or(0) as i64;
        #[allow(clippy::cast_sign_loss)]
        let next = (current + delta).clamp(0, self.modules.len() as i64 - 1) as usize;
        self.list_state.select(Some(next));
    }

    /// Handles a key event, returning the resulting action.
    pub fn handle_key(&mut self, key: KeyEvent) -> DashboardAction {
        match key.code {
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::Char('r') => return DashboardAction::Refresh,
            KeyCode::Enter => {
                if let Some(url) = self.selected().and_then(|m| m.url.clone()) {
                    return DashboardAction::OpenModule(url);
                }
            }
            _ => {}
        }
        DashboardAction::None
    }

    /// Renders the screen.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let layout = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]);
        let [content_area, status_area] = layout.areas(area);

        let columns = Layout::horizontal([Constraint::Fill(2), Constraint::Fill(1)]);
        let [modules_area, helper_area] = columns.areas(content_area);

        if self.modules.is_empty() {
            let block = Block::default()
                .borders(Borders::ALL)
                .title(" Modules ");
            let inner = block.inner(modules_area);
            block.render(modules_area, buf);
            Paragraph::new("No modules enabled.")
                .style(Style::default().fg(Color::DarkGray))
                .render(inner, buf);
        } else {
            let items: Vec<ListItem> = self
                .modules
                .iter()
                .map(|module| {
                    let mut lines = vec![Line::from(Span::styled(
                        module.name.clone(),
                        Style::default().fg(Color::White),
                    ))];
                    if let Some(description) = &module.description {
                        lines.push(Line::from(Span::styled(
                            format!("  {description}"),
                            Style::default().fg(Color::DarkGray),
                        )));
                    }
                    ListItem::new(lines)
                })
                .collect();

            let list = List::new(items)
                .block(Block::default().borders(Borders::ALL).title(" Modules "))
                .highlight_style(
                    Style::default()
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                );

            StatefulWidget::render(list, modules_area, buf, &mut self.list_state);
        }

        HelperPanel::new(self.selected().map(|m| m.name.as_str())).render(helper_area, buf);

        let status = StatusBar::new()
            .left(format!("{} module(s)", self.modules.len()))
            .right("Enter: open | r: refresh | L: logout | q: quit")
            .level(StatusLevel::Success);
        (&status).render(status_area, buf);
    }
}
