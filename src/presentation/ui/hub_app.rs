//! Hub application shell.

use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyModifiers};
use futures_util::StreamExt;
use ratatui::{
    DefaultTerminal, Frame,
    style::{Color, Style},
    widgets::Paragraph,
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::application::dto::Credentials;
use crate::application::use_cases::{LoginUseCase, ResolveSessionUseCase};
use crate::domain::entities::{ModuleSummary, SessionToken};
use crate::domain::errors::ApiError;
use crate::domain::ports::{AuthPort, ModuleCatalogPort, SessionStorePort};
use crate::presentation::ui::{
    DashboardAction, DashboardScreen, LoginAction, LoginScreen, LoginState,
};

#[derive(Debug)]
enum Action {
    LoginFinished {
        result: Result<SessionToken, ApiError>,
    },
    ModulesLoaded {
        generation: u64,
        result: Result<Vec<ModuleSummary>, ApiError>,
    },
}

enum Screen {
    Login(LoginScreen),
    Loading,
    Dashboard(DashboardScreen),
}

/// Hub shell: login, then the module dashboard.
///
/// The module list is the gate into the authenticated area. Any failure to
/// fetch it, network errors included, is treated as a dead session: the token
/// is cleared and the login screen comes back. There is no error screen in
/// between.
pub struct HubApp {
    screen: Screen,
    login_use_case: LoginUseCase,
    resolve_session: ResolveSessionUseCase,
    catalog: Arc<dyn ModuleCatalogPort>,
    session_store: Arc<dyn SessionStorePort>,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    generation: u64,
    should_exit: bool,
}

impl HubApp {
    /// Creates the shell with its collaborators.
    #[must_use]
    pub fn new(
        auth_port: Arc<dyn AuthPort>,
        catalog: Arc<dyn ModuleCatalogPort>,
        session_store: Arc<dyn SessionStorePort>,
    ) -> Self {
        let login_use_case = LoginUseCase::new(auth_port, session_store.clone());
        let resolve_session = ResolveSessionUseCase::new(session_store.clone());
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            screen: Screen::Login(LoginScreen::new()),
            login_use_case,
            resolve_session,
            catalog,
            session_store,
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
            info!("Existing session found, fetching module list");
            self.start_modules_fetch();
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

        info!("Hub exiting");
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        match &mut self.screen {
            Screen::Login(screen) => frame.render_widget(&*screen, area),
            Screen::Loading => frame.render_widget(
                Paragraph::new("Loading modules...").style(Style::default().fg(Color::Yellow)),
                area,
            ),
            Screen::Dashboard(screen) => screen.render(area, frame.buffer_mut()),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_exit = true;
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
            Screen::Loading => {
                if key.code == KeyCode::Char('q') {
                    self.should_exit = true;
                }
            }
            Screen::Dashboard(screen) => {
                match key.code {
                    KeyCode::Char('q') => {
                        self.should_exit = true;
                        return;
                    }
                    KeyCode::Char('L') => {
                        info!("Explicit logout");
                        self.logout();
                        return;
                    }
                    _ => {}
                }
                match screen.handle_key(key) {
                    DashboardAction::OpenModule(url) => {
                        debug!(url = %url, "Opening module");
                        if let Err(e) = opener::open(&url) {
                            warn!(error = %e, "Failed to open module in browser");
                        }
                    }
                    DashboardAction::Refresh => self.start_modules_fetch(),
                    DashboardAction::None => {}
                }
            }
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

    fn start_modules_fetch(&mut self) {
        self.generation += 1;
        let generation = self.generation;
        self.screen = Screen::Loading;

        let catalog = self.catalog.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let result = catalog.list_modules().await;
            let _ = tx.send(Action::ModulesLoaded { generation, result });
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
                        self.start_modules_fetch();
                    }
                    Err(_) => screen.set_failed(),
                }
            }
            Action::ModulesLoaded { generation, result } => {
                if generation != self.generation {
                    debug!("Discarding stale module list response");
                    return;
                }
                match result {
                    Ok(modules) => {
                        info!(count = modules.len(), "Module list loaded");
                        self.screen = Screen::Dashboard(DashboardScreen::new(modules));
                    }
                    Err(e) => {
                        // A failed module fetch of any kind invalidates the
                        // session, transient network errors included.
                        warn!(error = %e, "Module list fetch failed, discarding session");
                        self.session_store.clear();
                        self.screen = Screen::Login(LoginScreen::new());
                    }
                }
            }
        }
    }

    fn logout(&mut self) {
        self.login_use_case.logout();
        self.generation += 1;
        self.screen = Screen::Login(LoginScreen::new());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::{MockAuthPort, MockModuleCatalog, MockSessionStore};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn modules() -> Vec<ModuleSummary> {
        vec![
            ModuleSummary {
                slug: "website".to_string(),
                name: "Website".to_string(),
                description: Some("Customer admin".to_string()),
                url: Some("http://localhost:20050".to_string()),
            },
            ModuleSummary::new("billing", "Billing"),
        ]
    }

    struct Harness {
        app: HubApp,
        store: Arc<MockSessionStore>,
        catalog: Arc<MockModuleCatalog>,
    }

    fn harness(login_succeeds: bool) -> Harness {
        let store = Arc::new(MockSessionStore::new());
        let catalog = Arc::new(MockModuleCatalog::new(modules()));
        let app = HubApp::new(
            Arc::new(MockAuthPort::new(login_succeeds)),
            catalog.clone(),
            store.clone(),
        );
        Harness {
            app,
            store,
            catalog,
        }
    }

    async fn drain_action(app: &mut HubApp) {
        let action = app.action_rx.recv().await.expect("expected an action");
        app.handle_action(action);
    }

    #[tokio::test]
    async fn test_login_then_dashboard() {
        let mut h = harness(true);

        h.app
            .begin_login(Credentials::new("admin@casuse.mx", "Test1234!"));
        drain_action(&mut h.app).await;
        assert!(matches!(h.app.screen, Screen::Loading));
        assert!(h.store.has_token());

        drain_action(&mut h.app).await;
        match &h.app.screen {
            Screen::Dashboard(screen) => assert_eq!(screen.modules().len(), 2),
            _ => panic!("expected dashboard"),
        }
    }

    #[tokio::test]
    async fn test_login_failure_stays_on_login() {
        let mut h = harness(false);

        h.app.begin_login(Credentials::new("admin@casuse.mx", "no"));
        drain_action(&mut h.app).await;

        assert!(h.store.get().is_none());
        match &h.app.screen {
            Screen::Login(screen) => assert_eq!(screen.state(), LoginState::Error),
            _ => panic!("expected login screen"),
        }
    }

    #[tokio::test]
    async fn test_network_failure_discards_session() {
        let mut h = harness(true);
        h.store.set(&SessionToken::new("tok-123").unwrap());
        h.catalog.fail_with(|| ApiError::network("connect refused"));

        h.app.start_modules_fetch();
        drain_action(&mut h.app).await;

        assert!(h.store.get().is_none());
        assert!(matches!(h.app.screen, Screen::Login(_)));
    }

    #[tokio::test]
    async fn test_unauthorized_fetch_discards_session() {
        let mut h = harness(true);
        h.store.set(&SessionToken::new("tok-123").unwrap());
        h.catalog.fail_with(|| ApiError::Unauthorized);

        h.app.start_modules_fetch();
        drain_action(&mut h.app).await;

        assert!(h.store.get().is_none());
        assert!(matches!(h.app.screen, Screen::Login(_)));
    }

    #[tokio::test]
    async fn test_stale_module_response_discarded() {
        let mut h = harness(true);
        h.store.set(&SessionToken::new("tok-123").unwrap());
        h.app.start_modules_fetch();
        let stale = h.app.generation;
        h.app.start_modules_fetch();

        h.app.handle_action(Action::ModulesLoaded {
            generation: stale,
            result: Err(ApiError::Unauthorized),
        });

        assert!(h.store.get().is_some());
        assert!(matches!(h.app.screen, Screen::Loading));
    }

    #[tokio::test]
    async fn test_logout_key_from_dashboard() {
        let mut h = harness(true);
        h.store.set(&SessionToken::new("tok-123").unwrap());
        h.app.screen = Screen::Dashboard(DashboardScreen::new(modules()));

        h.app.handle_key(key(KeyCode::Char('L')));

        assert!(h.store.get().is_none());
        assert!(matches!(h.app.screen, Screen::Login(_)));
    }

    #[tokio::test]
    async fn test_refresh_key_starts_new_fetch() {
        let mut h = harness(true);
        h.store.set(&SessionToken::new("tok-123").unwrap());
        h.app.screen = Screen::Dashboard(DashboardScreen::new(modules()));
        let before = h.app.generation;

        h.app.handle_key(key(KeyCode::Char('r')));

        assert_eq!(h.app.generation, before + 1);
        assert!(matches!(h.app.screen, Screen::Loading));
    }
}
