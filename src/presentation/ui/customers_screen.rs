//! Customer list screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

use crate::application::services::RemoteData;
use crate::domain::entities::{CustomerPage, display_or_placeholder};
use crate::presentation::widgets::{StatusBar, StatusLevel, TextInput};

/// Result of a key event on the customers screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomersAction {
    /// Nothing to do.
    None,
    /// Fetch the list; `None` means no search filter.
    Search(Option<String>),
    /// Open the detail view for the given customer id.
    Open(String),
}

/// Customer list with a free-text search filter.
pub struct CustomersScreen {
    search: TextInput,
    editing: bool,
    data: RemoteData<CustomerPage>,
    table_state: TableState,
}

impl CustomersScreen {
    /// Creates the screen in its pre-fetch state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            search: TextInput::new("Search").placeholder("Name, email or company..."),
            editing: false,
            data: RemoteData::Idle,
            table_state: TableState::default(),
        }
    }

    /// Returns mutable access to the fetch state.
    pub fn data_mut(&mut self) -> &mut RemoteData<CustomerPage> {
        &mut self.data
    }

    /// Returns the fetch state.
    #[must_use]
    pub const fn data(&self) -> &RemoteData<CustomerPage> {
        &self.data
    }

    /// Returns whether the search box currently captures typing.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing
    }

    /// Returns the current search filter, `None` when blank.
    #[must_use]
    pub fn current_query(&self) -> Option<String> {
        let trimmed = self.search.trimmed();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Clamps the selection after the data changed.
    pub fn sync_selection(&mut self) {
        let len = self.data.ready().map_or(0, |page| page.items.len());
        if len == 0 {
            self.table_state.select(None);
        } else {
            let selected = self.table_state.selected().unwrap_or(0).min(len - 1);
            self.table_state.select(Some(selected));
        }
    }

    fn selected_id(&self) -> Option<String> {
        let page = self.data.ready()?;
        let index = self.table_state.selected()?;
        page.items.get(index).map(|c| c.id.clone())
    }

    fn move_selection(&mut self, delta: i64) {
        let len = self.data.ready().map_or(0, |page| page.items.len());
        if len == 0 {
            return;
        }
        #[allow(clippy::cast_possible_wrap)]
        let current = self.table_state.selected().unwrap_or(0) as i64;
        #[allow(clippy::cast_sign_loss)]
        let next = (current + delta).clamp(0, len as i64 - 1) as usize;
        self.table_state.select(Some(next));
    }

    /// Handles a key event, returning the resulting action.
    pub fn handle_key(&mut self, key: KeyEvent) -> CustomersAction {
        if self.editing {
            match key.code {
                KeyCode::Enter => {
                    self.editing = false;
                    self.search.set_focused(false);
                    return CustomersAction::Search(self.current_query());
                }
                KeyCode::Esc => {
                    self.editing = false;
                    self.search.set_focused(false);
                }
                _ => {
                    self.search.handle_key(key);
                }
            }
            return CustomersAction::None;
        }

        match key.code {
            KeyCode::Char('/') => {
                self.editing = true;
                self.search.set_focused(true);
            }
            KeyCode::Char('r') => return CustomersAction::Search(self.current_query()),
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::Enter => {
                if let Some(id) = self.selected_id() {
                    return CustomersAction::Open(id);
                }
            }
            _ => {}
        }

        CustomersAction::None
    }

    fn render_content(&mut self, area: Rect, buf: &mut Buffer) {
        match &self.data {
            RemoteData::Idle | RemoteData::Loading => {
                Paragraph::new("Loading customers...")
                    .style(Style::default().fg(Color::Yellow))
                    .render(area, buf);
            }
            RemoteData::Failed(message) => {
                Paragraph::new(message.as_str())
                    .style(Style::default().fg(Color::Red))
                    .render(area, buf);
            }
            RemoteData::Ready(page) if page.is_empty() => {
                Paragraph::new("No customers found.")
                    .style(Style::default().fg(Color::DarkGray))
                    .render(area, buf);
            }
            RemoteData::Ready(page) => {
                let header = Row::new(["Name", "Email", "Type", "Company", "City", "State"])
                    .style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    );

                let rows: Vec<Row> = page
                    .items
                    .iter()
                    .map(|c| {
                        Row::new([
                            c.full_name(),
                            c.email.clone(),
                            c.customer_type.label().to_string(),
                            display_or_placeholder(c.company_name.as_deref()).to_string(),
                            display_or_placeholder(c.address_city.as_deref()).to_string(),
                            display_or_placeholder(c.address_state.as_deref()).to_string(),
                        ])
                    })
                    .collect();

                let table = Table::new(
                    rows,
                    [
                        Constraint::Fill(2),
                        Constraint::Fill(3),
                        Constraint::Length(10),
                        Constraint::Fill(2),
                        Constraint::Fill(1),
                        Constraint::Fill(1),
                    ],
                )
                .header(header)
                .row_highlight_style(
                    Style::default()
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                )
                .block(Block::default().borders(Borders::ALL).title(" Customers "));

                StatefulWidget::render(table, area, buf, &mut self.table_state);
            }
        }
    }

    /// Renders the screen.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ]);
        let [search_area, content_area, status_area] = layout.areas(area);

        (&self.search).render(search_area, buf);
        self.render_content(content_area, buf);

        let total = self
            .data
            .ready()
            .map_or_else(String::new, |page| format!("Total: {}", page.total));
        let status = StatusBar::new()
            .left(total)
            .right("/: search | Enter: open | r: reload | o: hub | L: logout | q: quit")
            .level(StatusLevel::Info);
        (&status).render(status_area, buf);
    }
}

impl Default for CustomersScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::fixtures;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn loaded_screen(ids: &[&str]) -> CustomersScreen {
        let mut screen = CustomersScreen::new();
        let items = ids.iter().map(|id| fixtures::summary(id)).collect::<Vec<_>>();
        let total = items.len() as u64;
        *screen.data_mut() = RemoteData::Ready(CustomerPage { items, total });
        screen.sync_selection();
        screen
    }

    #[test]
    fn test_search_submit_produces_trimmed_query() {
        let mut screen = CustomersScreen::new();

        screen.handle_key(key(KeyCode::Char('/')));
        assert!(screen.is_editing());

        for c in "  garcia ".chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }

        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            CustomersAction::Search(Some("garcia".to_string()))
        );
        assert!(!screen.is_editing());
    }

    #[test]
    fn test_blank_search_produces_no_filter() {
        let mut screen = CustomersScreen::new();
        screen.handle_key(key(KeyCode::Char('/')));

        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            CustomersAction::Search(None)
        );
    }

    #[test]
    fn test_open_selected_row() {
        let mut screen = loaded_screen(&["c1", "c2", "c3"]);

        screen.handle_key(key(KeyCode::Down));
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            CustomersAction::Open("c2".to_string())
        );
    }

    #[test]
    fn test_enter_on_empty_page_does_nothing() {
        let mut screen = loaded_screen(&[]);
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), CustomersAction::None);
    }

    #[test]
    fn test_empty_page_renders_empty_state_not_table() {
        let mut screen = loaded_screen(&[]);
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        screen.render(area, &mut buf);

        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buf[(x, y)].symbol());
            }
        }
        assert!(text.contains("No customers found."));
        assert!(!text.contains("Email"));
    }

    #[test]
    fn test_selection_clamped_after_shrinking_results() {
        let mut screen = loaded_screen(&["c1", "c2", "c3"]);
        screen.handle_key(key(KeyCode::Down));
        screen.handle_key(key(KeyCode::Down));

        let items = vec![fixtures::summary("c1")];
        *screen.data_mut() = RemoteData::Ready(CustomerPage { items, total: 1 });
        screen.sync_selection();

        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            CustomersAction::Open("c1".to_string())
        );
    }
}
