//! Customer detail screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::application::services::RemoteData;
use crate::domain::entities::{CustomerDetail, display_or_placeholder};
use crate::presentation::widgets::{StatusBar, StatusLevel};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// Result of a key event on the detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    /// Nothing to do.
    None,
    /// Return to the customer list.
    Back,
}

/// Single customer record, grouped into sections.
pub struct CustomerDetailScreen {
    customer_id: String,
    data: RemoteData<CustomerDetail>,
}

impl CustomerDetailScreen {
    /// Creates the screen for the given customer id.
    #[must_use]
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            data: RemoteData::Idle,
        }
    }

    /// Returns the id this screen was opened for.
    #[must_use]
    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    /// Returns mutable access to the fetch state.
    pub fn data_mut(&mut self) -> &mut RemoteData<CustomerDetail> {
        &mut self.data
    }

    /// Handles a key event, returning the resulting action.
    pub fn handle_key(&mut self, key: KeyEvent) -> DetailAction {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => DetailAction::Back,
            _ => DetailAction::None,
        }
    }

    fn section<'a>(title: &'a str, lines: Vec<Line<'a>>) -> Paragraph<'a> {
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(format!(" {title} ")),
            )
    }

    fn labeled<'a>(label: &'a str, value: impl Into<String>) -> Line<'a> {
        Line::from(vec![
            Span::styled(
                format!("{label}: "),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(value.into()),
        ])
    }

    fn render_detail(customer: &CustomerDetail, area: Rect, buf: &mut Buffer) {
        let summary = &customer.summary;

        let layout = Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]);
        let [header_area, grid_area] = layout.areas(area);

        let subtitle = match summary.company_name.as_deref() {
            Some(company) => format!("{} | {company}", summary.customer_type),
            None => summary.customer_type.to_string(),
        };
        Paragraph::new(vec![
            Line::from(Span::styled(
                summary.full_name(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                subtitle,
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .render(header_area, buf);

        let rows = Layout::vertical([Constraint::Fill(1), Constraint::Fill(1)]);
        let [top_row, bottom_row] = rows.areas(grid_area);
        let columns = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]);
        let [contact_area, address_area] = columns.areas(top_row);
        let [company_area, metadata_area] = columns.areas(bottom_row);

        let contact = vec![
            Self::labeled("Email", summary.email.clone()),
            Self::labeled(
                "Phone",
                display_or_placeholder(summary.phone_number.as_deref()),
            ),
            Self::labeled("Active", if summary.is_active { "Yes" } else { "No" }),
            Self::labeled("Admin", if customer.is_admin { "Yes" } else { "No" }),
        ];
        Self::section("Contact", contact).render(contact_area, buf);

        let street_line = format!(
            "{} {}{}",
            display_or_placeholder(summary.address_street.as_deref()),
            display_or_placeholder(summary.address_ext_number.as_deref()),
            summary
                .address_int_number
                .as_deref()
                .map(|n| format!(", Int. {n}"))
                .unwrap_or_default(),
        );
        let address = vec![
            Line::from(street_line),
            Line::from(
                display_or_placeholder(summary.address_neighborhood.as_deref()).to_string(),
            ),
            Line::from(format!(
                "{} {}, {}",
                display_or_placeholder(summary.address_postal_code.as_deref()),
                display_or_placeholder(summary.address_city.as_deref()),
                display_or_placeholder(summary.address_state.as_deref()),
            )),
            Line::from(display_or_placeholder(summary.address_country.as_deref()).to_string()),
        ];
        Self::section("Address", address).render(address_area, buf);

        let company = vec![
            Self::labeled(
                "Company",
                display_or_placeholder(summary.company_name.as_deref()),
            ),
            Self::labeled("Tax id", display_or_placeholder(summary.tax_id.as_deref())),
            Self::labeled(
                "Description",
                display_or_placeholder(summary.description.as_deref()),
            ),
        ];
        Self::section("Company & extra", company).render(company_area, buf);

        let metadata = vec![
            Self::labeled(
                "Created",
                customer.created_at.format(TIMESTAMP_FORMAT).to_string(),
            ),
            Self::labeled(
                "Updated",
                customer.updated_at.format(TIMESTAMP_FORMAT).to_string(),
            ),
        ];
        Self::section("Metadata", metadata).render(metadata_area, buf);
    }

    /// Renders the screen.
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let layout = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]);
        let [content_area, status_area] = layout.areas(area);

        match &self.data {
            RemoteData::Idle | RemoteData::Loading => {
                Paragraph::new("Loading customer...")
                    .style(Style::default().fg(Color::Yellow))
                    .render(content_area, buf);
            }
            RemoteData::Failed(message) => {
                Paragraph::new(message.as_str())
                    .style(Style::default().fg(Color::Red))
                    .render(content_area, buf);
            }
            RemoteData::Ready(customer) => {
                Self::render_detail(customer, content_area, buf);
            }
        }

        let status = StatusBar::new()
            .left(format!("Customer {}", self.customer_id))
            .right("Esc: back to list | q: quit")
            .level(StatusLevel::Info);
        (&status).render(status_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_back_keys() {
        let mut screen = CustomerDetailScreen::new("42");

        assert_eq!(screen.handle_key(key(KeyCode::Esc)), DetailAction::Back);
        assert_eq!(
            screen.handle_key(key(KeyCode::Backspace)),
            DetailAction::Back
        );
        assert_eq!(screen.handle_key(key(KeyCode::Char('x'))), DetailAction::None);
    }

    #[test]
    fn test_back_available_from_error_state() {
        let mut screen = CustomerDetailScreen::new("42");
        *screen.data_mut() = RemoteData::Failed("Could not load customer.".to_string());

        assert_eq!(screen.handle_key(key(KeyCode::Esc)), DetailAction::Back);
    }
}
