//! Website admin application shell.

use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyModifiers};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::application::dto::Credentials;
use crate::application::use_cases::{LoginUseCase, ResolveSessionUseCase};
use crate::domain::entities::{CustomerDetail, CustomerPage, SessionToken};
use crate::domain::errors::ApiError;
use crate::domain::ports::{AuthPort, CustomerDirectoryPort, SessionStorePort};
use crate::presentation::ui::{
    CustomerDetailScreen, CustomersAction, CustomersScreen, DetailAction, LoginAction, LoginScreen,
    LoginState,
};

const CUSTOMERS_LOAD_FAILED: &str = "Could not load customers.";
const CUSTOMER_LOAD_FAILED: &str = "Could not load customer.";

#[derive(Debug)]
enum Action {
    LoginFinished {
        result: Result<SessionToken, ApiError>,
    },
    CustomersLoaded {
        generation: u64,
        result: Result<CustomerPage, ApiError>,
    },
    CustomerLoaded {
        generation: u64,
        id: String,
        result: Result<CustomerDetail, ApiError>,
    },
}

enum Screen {
    Login(LoginScreen),
    Customers(CustomersScreen),
    Detail(CustomerDetailScreen),
}

/// Website admin shell.
///
/// Two macro-states drive routing: without a token only the login screen is
/// reachable; with a token the login screen is unreachable and the
/// list/detail screens are. Any fetch reporting an unauthorized outcome
/// clears the session and lands on the login screen, indistinguishable from
/// an explicit logout.
pub struct WebsiteApp {
    screen: Screen,
    login_use_case: LoginUseCase,
    resolve_session: ResolveSessionUseCase,
    directory: Arc<dyn CustomerDirectoryPort>,
    session_store: Arc<dyn SessionStorePort>,
    home_url: String,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    // Bumped on every navigation/fetch; stale task results are discarded.
    generation: u64,
    should_exit: bool,
}

impl WebsiteApp {
    /// Creates the shell with its collaborators.
    #[must_use]
    pub fn new(
        auth_port: Arc<dyn AuthPort>,
        directory: Arc<dyn CustomerDirectoryPort>,
        session_store: Arc<dyn SessionStorePort>,
        home_url: impl Into<String>,
    ) -> Self {
        let login_use_case = LoginUseCase::new(auth_port, session_store.clone());
        let resolve_session = ResolveSessionUseCase::new(session_store.clone());
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            screen: Screen::Login(LoginScreen::new()),
            login_use_case,
            resolve_session,
            directory,
            session_store,
            home_url: home_url.into(),
            action_tx,
            action_rx,
            generation: 0,
            should_exit: false,
        }
    }

    /// Runs the event loop until the user quits.
    ///
    /// # Errors
    /// Returns an error if terminal drawing fails.
    pub async fn run(
        mut self,
        terminal: &mut DefaultTerminal,
        token_override: Option<String>,
    ) -> color_eyre::Result<()> {
        if self.resolve_session.execute(token_override).is_some() {
            info!("Existing session found, opening customer list");
            self.enter_customers(None);
        }

        let mut terminal_events = EventStream::new();

        terminal.draw(|frame| self.render(frame))?;

        while !self.should_exit {
            tokio::select! {
                Some(Ok(event)) = terminal_events.next() => {
                    if let Event::Key(key) = event {
                        self.handle_key(key);
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }

                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        info!("Website admin exiting");
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        match &mut self.screen {
            Screen::Login(screen) => frame.render_widget(&*screen, area),
            Screen::Customers(screen) => screen.render(area, frame.buffer_mut()),
            Screen::Detail(screen) => screen.render(area, frame.buffer_mut()),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_exit = true;
            return;
        }

        // Session-wide keys apply only outside text entry, so typing "q"
        // into the search box never quits.
        let in_text_entry = match &self.screen {
            Screen::Login(_) => true,
            Screen::Customers(screen) => screen.is_editing(),
            Screen::Detail(_) => false,
        };
        if !in_text_entry && self.handle_session_key(key) {
            return;
        }

        match &mut self.screen {
            Screen::Login(screen) => {
                if key.code == KeyCode::Esc && screen.state() == LoginState::Input {
                    self.should_exit = true;
                    return;
                }
                if let LoginAction::Submit(credentials) = screen.handle_key(key) {
                    self.begin_login(credentials);
                }
            }
            Screen::Customers(screen) => match screen.handle_key(key) {
                CustomersAction::Search(query) => self.start_customers_fetch(query),
                CustomersAction::Open(id) => self.open_detail(id),
                CustomersAction::None => {}
            },
            Screen::Detail(screen) => {
                if screen.handle_key(key) == DetailAction::Back {
                    self.enter_customers(None);
                }
            }
        }
    }

    /// Keys available on every authenticated screen (outside text entry).
    fn handle_session_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => {
                self.should_exit = true;
                true
            }
            KeyCode::Char('L') => {
                info!("Explicit logout");
                self.logout();
                true
            }
            KeyCode::Char('o') => {
                debug!(url = %self.home_url, "Opening module hub");
                if let Err(e) = opener::open(&self.home_url) {
                    warn!(error = %e, "Failed to open module hub in browser");
                }
                true
            }
            _ => false,
        }
    }

    fn begin_login(&mut self, credentials: Credentials) {
        if let Screen::Login(screen) = &mut self.screen {
            screen.set_submitting();
        }

        let use_case = self.login_use_case.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let result = use_case.execute(&credentials).await;
            let _ = tx.send(Action::LoginFinished { result });
        });
    }

    fn enter_customers(&mut self, query: Option<String>) {
        self.screen = Screen::Customers(CustomersScreen::new());
        self.start_customers_fetch(query);
    }

    fn start_customers_fetch(&mut self, query: Option<String>) {
        self.generation += 1;
        let generation = self.generation;

        if let Screen::Customers(screen) = &mut self.screen {
            screen.data_mut().begin();
        }

        let directory = self.directory.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let result = directory.list_customers(query.as_deref()).await;
            let _ = tx.send(Action::CustomersLoaded { generation, result });
        });
    }

    fn open_detail(&mut self, id: String) {
        self.generation += 1;
        let generation = self.generation;

        let mut screen = CustomerDetailScreen::new(id.clone());
        screen.data_mut().begin();
        self.screen = Screen::Detail(screen);

        let directory = self.directory.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let result = directory.fetch_customer(&id).await;
            let _ = tx.send(Action::CustomerLoaded {
                generation,
                id,
                result,
            });
        });
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::LoginFinished { result } => {
                let Screen::Login(screen) = &mut self.screen else {
                    return;
                };
                match result {
                    Ok(token) => {
                        info!(token = %token, "Login complete");
                        self.enter_customers(None);
                    }
                    Err(_) => screen.set_failed(),
                }
            }
            Action::CustomersLoaded { generation, result } => {
                if generation != self.generation {
                    debug!("Discarding stale customer list response");
                    return;
                }
                let Screen::Customers(screen) = &mut self.screen else {
                    return;
                };
                if screen
                    .data_mut()
                    .resolve(result, CUSTOMERS_LOAD_FAILED)
                    .is_some()
                {
                    self.force_logout();
                    return;
                }
                screen.sync_selection();
            }
            Action::CustomerLoaded {
                generation,
                id,
                result,
            } => {
                if generation != self.generation {
                    debug!("Discarding stale customer detail response");
                    return;
                }
                let Screen::Detail(screen) = &mut self.screen else {
                    return;
                };
                if screen.customer_id() != id {
                    return;
                }
                if screen
                    .data_mut()
                    .resolve(result, CUSTOMER_LOAD_FAILED)
                    .is_some()
                {
                    self.force_logout();
                }
            }
        }
    }

    /// Explicit logout; ends in the same state as a forced one.
    fn logout(&mut self) {
        self.login_use_case.logout();
        self.generation += 1;
        self.screen = Screen::Login(LoginScreen::new());
    }

    /// Session invalidation after an unauthorized fetch outcome.
    fn force_logout(&mut self) {
        warn!("Session rejected by backend, returning to login");
        self.session_store.clear();
        self.generation += 1;
        self.screen = Screen::Login(LoginScreen::new());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::fixtures;
    use crate::domain::ports::mocks::{MockAuthPort, MockCustomerDirectory, MockSessionStore};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    struct Harness {
        app: WebsiteApp,
        store: Arc<MockSessionStore>,
        directory: Arc<MockCustomerDirectory>,
    }

    fn harness(login_succeeds: bool, directory: MockCustomerDirectory) -> Harness {
        let store = Arc::new(MockSessionStore::new());
        let directory = Arc::new(directory);
        let app = WebsiteApp::new(
            Arc::new(MockAuthPort::new(login_succeeds)),
            directory.clone(),
            store.clone(),
            "http://localhost:20020",
        );
        Harness {
            app,
            store,
            directory,
        }
    }

    fn sample_directory() -> MockCustomerDirectory {
        MockCustomerDirectory::new(
            vec![fixtures::summary("c1"), fixtures::summary("c2")],
            vec![fixtures::detail("c1")],
        )
    }

    async fn drain_action(app: &mut WebsiteApp) {
        let action = app.action_rx.recv().await.expect("expected an action");
        app.handle_action(action);
    }

    #[tokio::test]
    async fn test_login_success_stores_token_and_opens_list() {
        let mut h = harness(true, sample_directory());

        h.app
            .begin_login(Credentials::new("admin@casuse.mx", "Test1234!"));
        drain_action(&mut h.app).await;

        assert_eq!(h.store.get().unwrap().as_str(), "tok-123");
        assert!(matches!(h.app.screen, Screen::Customers(_)));

        // The list fetch started by the transition completes too.
        drain_action(&mut h.app).await;
        if let Screen::Customers(screen) = &h.app.screen {
            assert_eq!(screen.data().ready().unwrap().items.len(), 2);
        } else {
            panic!("expected customers screen");
        }
    }

    #[tokio::test]
    async fn test_login_failure_shows_generic_error_and_keeps_store_empty() {
        let mut h = harness(false, sample_directory());

        h.app
            .begin_login(Credentials::new("admin@casuse.mx", "wrong"));
        drain_action(&mut h.app).await;

        assert!(h.store.get().is_none());
        match &h.app.screen {
            Screen::Login(screen) => assert_eq!(screen.state(), LoginState::Error),
            _ => panic!("expected login screen"),
        }
    }

    #[tokio::test]
    async fn test_unauthorized_list_fetch_clears_session_and_routes_to_login() {
        let mut h = harness(true, sample_directory());
        h.store.set(&SessionToken::new("tok-123").unwrap());
        h.app.enter_customers(None);

        h.app.handle_action(Action::CustomersLoaded {
            generation: h.app.generation,
            result: Err(ApiError::Unauthorized),
        });

        assert!(h.store.get().is_none());
        assert!(matches!(h.app.screen, Screen::Login(_)));
    }

    #[tokio::test]
    async fn test_unauthorized_detail_fetch_clears_session() {
        let mut h = harness(true, sample_directory());
        h.store.set(&SessionToken::new("tok-123").unwrap());
        h.app.open_detail("c1".to_string());

        h.app.handle_action(Action::CustomerLoaded {
            generation: h.app.generation,
            id: "c1".to_string(),
            result: Err(ApiError::Unauthorized),
        });

        assert!(h.store.get().is_none());
        assert!(matches!(h.app.screen, Screen::Login(_)));
    }

    #[tokio::test]
    async fn test_missing_customer_renders_error_with_back_navigation() {
        let mut h = harness(true, sample_directory());
        h.store.set(&SessionToken::new("tok-123").unwrap());
        h.app.open_detail("42".to_string());

        h.app.handle_action(Action::CustomerLoaded {
            generation: h.app.generation,
            id: "42".to_string(),
            result: Err(ApiError::request_failed(404, "customer not found")),
        });

        match &mut h.app.screen {
            Screen::Detail(screen) => {
                assert_eq!(screen.data_mut().error(), Some(CUSTOMER_LOAD_FAILED));
            }
            _ => panic!("expected detail screen"),
        }

        h.app.handle_key(key(KeyCode::Esc));
        assert!(matches!(h.app.screen, Screen::Customers(_)));
        assert!(h.store.get().is_some());
    }

    #[tokio::test]
    async fn test_stale_response_is_discarded() {
        let mut h = harness(true, sample_directory());
        h.store.set(&SessionToken::new("tok-123").unwrap());
        h.app.enter_customers(None);
        let stale = h.app.generation;
        h.app.open_detail("c1".to_string());

        h.app.handle_action(Action::CustomersLoaded {
            generation: stale,
            result: Err(ApiError::Unauthorized),
        });

        // The stale unauthorized result from the abandoned list fetch must
        // not tear the session down.
        assert!(h.store.get().is_some());
        assert!(matches!(h.app.screen, Screen::Detail(_)));
    }

    #[tokio::test]
    async fn test_explicit_logout_matches_forced_end_state() {
        let mut h = harness(true, sample_directory());
        h.store.set(&SessionToken::new("tok-123").unwrap());
        h.app.enter_customers(None);

        h.app.handle_key(key(KeyCode::Char('L')));

        assert!(h.store.get().is_none());
        assert!(matches!(h.app.screen, Screen::Login(_)));
    }

    #[tokio::test]
    async fn test_search_query_reaches_directory_trimmed_or_omitted() {
        let mut h = harness(true, sample_directory());
        h.store.set(&SessionToken::new("tok-123").unwrap());

        h.app.start_customers_fetch(Some("garcia".to_string()));
        drain_action(&mut h.app).await;
        assert_eq!(
            h.directory.last_query(),
            Some(Some("garcia".to_string()))
        );

        h.app.start_customers_fetch(None);
        drain_action(&mut h.app).await;
        assert_eq!(h.directory.last_query(), Some(None));
    }
}
