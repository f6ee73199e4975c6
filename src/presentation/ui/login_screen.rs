//! Login screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::application::dto::Credentials;
use crate::presentation::widgets::TextInput;

/// Generic failure message; backend error detail is never echoed here.
const LOGIN_FAILED_MESSAGE: &str = "Login failed. Check email and password.";

/// Login form state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginState {
    /// Accepting input.
    Input,
    /// A submission is in flight; the form is locked.
    Submitting,
    /// The last submission failed.
    Error,
}

/// Result of a key event on the login screen.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginAction {
    /// Nothing to do.
    None,
    /// Submit the entered credentials.
    Submit(Credentials),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Email,
    Password,
}

/// Credential form: identifier plus secret.
pub struct LoginScreen {
    email: TextInput,
    password: TextInput,
    focus: Field,
    state: LoginState,
    error_message: Option<String>,
}

impl LoginScreen {
    /// Creates a fresh login screen.
    #[must_use]
    pub fn new() -> Self {
        let mut email = TextInput::new("Email").placeholder("admin@example.mx");
        email.set_focused(true);
        let password = TextInput::new("Password").password();

        Self {
            email,
            password,
            focus: Field::Email,
            state: LoginState::Input,
            error_message: None,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> LoginState {
        self.state
    }

    /// Locks the form while a submission is in flight.
    pub fn set_submitting(&mut self) {
        self.state = LoginState::Submitting;
        self.error_message = None;
    }

    /// Marks the last submission as failed with the generic message.
    pub fn set_failed(&mut self) {
        self.state = LoginState::Error;
        self.error_message = Some(LOGIN_FAILED_MESSAGE.to_string());
    }

    /// Returns to the input state.
    pub fn reset(&mut self) {
        self.state = LoginState::Input;
        self.error_message = None;
    }

    fn focus_field(&mut self, field: Field) {
        self.focus = field;
        self.email.set_focused(field == Field::Email);
        self.password.set_focused(field == Field::Password);
    }

    fn credentials(&self) -> Credentials {
        Credentials::new(self.email.trimmed(), self.password.value())
    }

    /// Handles a key event, returning the resulting action.
    pub fn handle_key(&mut self, key: KeyEvent) -> LoginAction {
        if self.state == LoginState::Submitting {
            return LoginAction::None;
        }

        if self.state == LoginState::Error {
            self.reset();
            return LoginAction::None;
        }

        match key.code {
            KeyCode::Enter => {
                let credentials = self.credentials();
                if credentials.is_complete() {
                    return LoginAction::Submit(credentials);
                }
            }
            KeyCode::Tab | KeyCode::Down => {
                let next = match self.focus {
                    Field::Email => Field::Password,
                    Field::Password => Field::Email,
                };
                self.focus_field(next);
            }
            KeyCode::BackTab | KeyCode::Up => {
                let previous = match self.focus {
                    Field::Email => Field::Password,
                    Field::Password => Field::Email,
                };
                self.focus_field(previous);
            }
            _ => {
                let input = match self.focus {
                    Field::Email => &mut self.email,
                    Field::Password => &mut self.password,
                };
                input.handle_key(key);
            }
        }

        LoginAction::None
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(13),
            Constraint::Fill(1),
        ]);
        let [_, center, _] = vertical.areas(area);

        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Min(48),
            Constraint::Fill(1),
        ]);
        let [_, content_area, _] = horizontal.areas(center);

        Clear.render(content_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Admin Login ");

        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let inner_layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ]);
        let areas = inner_layout.areas::<5>(inner);

        Paragraph::new("Sign in with your admin account")
            .style(Style::default().fg(Color::White))
            .render(areas[0], buf);

        (&self.email).render(areas[1], buf);
        (&self.password).render(areas[2], buf);

        let status = match self.state {
            LoginState::Input => Line::from(vec![
                Span::styled("Enter: Sign in", Style::default().fg(Color::DarkGray)),
                Span::raw(" | "),
                Span::styled("Tab: Next field", Style::default().fg(Color::DarkGray)),
                Span::raw(" | "),
                Span::styled("Esc: Quit", Style::default().fg(Color::DarkGray)),
            ]),
            LoginState::Submitting => Line::from(Span::styled(
                "Signing in...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            )),
            LoginState::Error => {
                let msg = self.error_message.as_deref().unwrap_or(LOGIN_FAILED_MESSAGE);
                Line::from(Span::styled(msg, Style::default().fg(Color::Red)))
            }
        };
        Paragraph::new(status).render(areas[4], buf);
    }
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &LoginScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(screen: &mut LoginScreen, text: &str) {
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_initial_state() {
        let screen = LoginScreen::new();
        assert_eq!(screen.state(), LoginState::Input);
    }

    #[test]
    fn test_submit_requires_both_fields() {
        let mut screen = LoginScreen::new();

        type_text(&mut screen, "admin@casuse.mx");
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), LoginAction::None);

        screen.handle_key(key(KeyCode::Tab));
        type_text(&mut screen, "Test1234!");

        match screen.handle_key(key(KeyCode::Enter)) {
            LoginAction::Submit(credentials) => {
                assert_eq!(credentials.identifier, "admin@casuse.mx");
                assert_eq!(credentials.secret, "Test1234!");
            }
            LoginAction::None => panic!("expected submit"),
        }
    }

    #[test]
    fn test_form_locked_while_submitting() {
        let mut screen = LoginScreen::new();
        type_text(&mut screen, "admin@casuse.mx");
        screen.handle_key(key(KeyCode::Tab));
        type_text(&mut screen, "Test1234!");

        screen.set_submitting();
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), LoginAction::None);
        assert_eq!(screen.state(), LoginState::Submitting);
    }

    #[test]
    fn test_error_shows_generic_message_and_any_key_resets() {
        let mut screen = LoginScreen::new();
        screen.set_failed();

        assert_eq!(screen.state(), LoginState::Error);
        assert_eq!(
            screen.error_message.as_deref(),
            Some(LOGIN_FAILED_MESSAGE)
        );

        screen.handle_key(key(KeyCode::Char('x')));
        assert_eq!(screen.state(), LoginState::Input);
    }
}
