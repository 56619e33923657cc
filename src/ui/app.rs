//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::ui as ui_consts;
use crate::controller::{ActionError, Completion, DashboardController, Intent, SessionInfo};
use crate::environment::Environment;
use crate::events::{Action, Event as WorkerEvent, EventType};
use crate::logging::LogLevel;
use crate::ui::dashboard::updaters::InputOutcome;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crate::wallet::WalletPort;
use crate::workers::ActionRunner;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying wallet state and activity.
    Dashboard(Box<DashboardState>),
}

/// Application state
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// The environment in which the application is running.
    environment: Environment,

    /// The wallet driving this session.
    wallet: Arc<dyn WalletPort>,

    /// Turns intents into commands and folds completions into the snapshot.
    controller: DashboardController,

    /// Executes commands on background tasks.
    runner: ActionRunner,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Receives events from action workers.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Receives action completions from workers.
    completion_receiver: mpsc::Receiver<Completion>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        wallet: Arc<dyn WalletPort>,
        environment: Environment,
        runner: ActionRunner,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        completion_receiver: mpsc::Receiver<Completion>,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            environment,
            wallet,
            controller: DashboardController::new(),
            runner,
            current_screen: Screen::Splash,
            event_receiver,
            completion_receiver,
        }
    }

    fn session_info(&self) -> SessionInfo {
        SessionInfo {
            address: self.wallet.address(),
            can_sign_message: self.wallet.can_sign_message(),
            can_sign_transaction: self.wallet.can_sign_transaction(),
        }
    }

    /// Leave the splash screen and connect the wallet, which starts the
    /// initial refresh batch.
    fn open_dashboard(&mut self) {
        let state = DashboardState::new(
            self.wallet.address(),
            self.environment.clone(),
            self.start_time,
        );
        self.current_screen = Screen::Dashboard(Box::new(state));
        self.connect_wallet();
    }

    fn connect_wallet(&mut self) {
        for command in self.controller.observe_session(Some(self.session_info())) {
            self.runner.spawn(command);
        }
        self.push_event(WorkerEvent::success(
            Action::Session,
            format!("Wallet connected: {}", self.wallet.address()),
        ));
    }

    fn disconnect_wallet(&mut self) {
        for command in self.controller.observe_session(None) {
            self.runner.spawn(command);
        }
        self.push_event(WorkerEvent::new(
            Action::Session,
            "Wallet disconnected".to_string(),
            EventType::Refresh,
            LogLevel::Info,
        ));
    }

    fn push_event(&mut self, event: WorkerEvent) {
        if let Screen::Dashboard(state) = &mut self.current_screen {
            state.add_event(event);
        }
    }

    /// Hand an intent to the controller; rejections surface in the
    /// activity log without any network call having been made.
    fn submit(&mut self, intent: Intent) {
        let action = intent.action();
        match self.controller.request(intent) {
            Ok(command) => {
                self.runner.spawn(command);
            }
            Err(e) => {
                self.push_event(WorkerEvent::error(action, e.to_string(), LogLevel::Warn));
            }
        }
    }

    /// Handle one dashboard key press. Returns true when the app should
    /// exit.
    fn handle_dashboard_key(&mut self, code: KeyCode) -> bool {
        let entering = matches!(
            &self.current_screen,
            Screen::Dashboard(state) if state.is_entering_text()
        );

        // An active prompt owns the keyboard until finished or cancelled
        if entering {
            let outcome = match &mut self.current_screen {
                Screen::Dashboard(state) => match code {
                    KeyCode::Esc => {
                        state.cancel_entry();
                        return false;
                    }
                    KeyCode::Enter => state.submit_entry(),
                    KeyCode::Backspace => {
                        state.pop_input_char();
                        return false;
                    }
                    KeyCode::Char(c) => {
                        state.push_input_char(c);
                        return false;
                    }
                    _ => return false,
                },
                Screen::Splash => return false,
            };
            match outcome {
                InputOutcome::Submit(intent) => self.submit(intent),
                InputOutcome::Invalid { action, message } => {
                    self.push_event(WorkerEvent::error(action, message, LogLevel::Warn));
                }
                InputOutcome::Pending => {}
            }
            return false;
        }

        let busy = self.controller.snapshot().busy;
        let session = self.controller.snapshot().session;
        match code {
            KeyCode::Esc | KeyCode::Char('q') => return true,
            KeyCode::Char('c') => {
                if session.is_some() {
                    self.disconnect_wallet();
                } else {
                    self.connect_wallet();
                }
            }
            KeyCode::Char('b') if !busy.balance_loading => self.submit(Intent::RefreshBalance),
            KeyCode::Char('a') if !busy.airdrop_in_flight => {
                if session.is_none() {
                    self.push_event(WorkerEvent::error(
                        Action::Airdrop,
                        ActionError::NotConnected.to_string(),
                        LogLevel::Warn,
                    ));
                } else if !self.environment.supports_airdrop() {
                    self.push_event(WorkerEvent::error(
                        Action::Airdrop,
                        "Airdrops are not available on this cluster".to_string(),
                        LogLevel::Warn,
                    ));
                } else if let Screen::Dashboard(state) = &mut self.current_screen {
                    state.begin_airdrop_entry();
                }
            }
            KeyCode::Char('v') => self.submit(Intent::SignVerification),
            KeyCode::Char('s') if !busy.send_in_flight => {
                if session.is_none() {
                    self.push_event(WorkerEvent::error(
                        Action::Transfer,
                        ActionError::NotConnected.to_string(),
                        LogLevel::Warn,
                    ));
                } else if !session.is_some_and(|s| s.can_sign_transaction) {
                    self.push_event(WorkerEvent::error(
                        Action::Transfer,
                        ActionError::CapabilityMissing.to_string(),
                        LogLevel::Warn,
                    ));
                } else if let Screen::Dashboard(state) = &mut self.current_screen {
                    state.begin_send_entry();
                }
            }
            KeyCode::Char('t') => self.submit(Intent::ListHoldings),
            KeyCode::Char('h') => self.submit(Intent::FetchHistory),
            _ => {}
        }
        false
    }
}

/// Runs the application UI in a loop, handling events and rendering the
/// appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = ui_consts::splash_duration();

    // UI event loop
    loop {
        // Fold finished actions into the snapshot; follow-up refreshes
        // spawn immediately so they chain without user input
        while let Ok(completion) = app.completion_receiver.try_recv() {
            for command in app.controller.apply(completion) {
                app.runner.spawn(command);
            }
        }

        // Queue all incoming events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            if let Screen::Dashboard(state) = &mut app.current_screen {
                state.add_event(event);
            }
        }

        // Update the state based on the current screen
        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.apply_snapshot(app.controller.snapshot());
            state.update();
        }

        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.open_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(ui_consts::tick_interval())? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                match &mut app.current_screen {
                    Screen::Splash => {
                        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                            return Ok(());
                        }
                        // Any other key press skips the splash screen
                        app.open_dashboard();
                    }
                    Screen::Dashboard(_) => {
                        if app.handle_dashboard_key(key.code) {
                            return Ok(());
                        }
                    }
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
